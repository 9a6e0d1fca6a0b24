// ============================================================
// Layer 6 — Output Writer
// ============================================================
// Serialises an ExtractionResult as 4-space indented JSON.
//
// The JSON is written to a temporary file in the destination
// directory and renamed over the target, so readers see either
// the old file or the complete new one, never a partial write.
// The temp file takes the target's current permissions, or the
// usual 0o666-minus-umask for a new file.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::domain::extraction_result::ExtractionResult;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("cannot serialise results: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("cannot write '{}': {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub struct OutputWriter {
    path: PathBuf,
}

impl OutputWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the result, replacing any existing file.
    pub fn save(&self, result: &ExtractionResult) -> Result<(), SaveError> {
        let bytes = to_pretty_json(result)?;
        let write_err = |source: io::Error| SaveError::Write {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut tmp = temp_file_for(dir, &self.path).map_err(write_err)?;
        tmp.write_all(&bytes).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(&self.path).map_err(|e| write_err(e.error))?;

        tracing::info!("Output saved to {}", self.path.display());
        Ok(())
    }
}

#[cfg(unix)]
fn temp_file_for(dir: &Path, target: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    // mode given at creation is masked by the umask
    let tmp = tempfile::Builder::new()
        .prefix(".output")
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)?;
    if let Ok(meta) = fs::metadata(target) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    Ok(tmp)
}

#[cfg(not(unix))]
fn temp_file_for(dir: &Path, target: &Path) -> io::Result<NamedTempFile> {
    let tmp = NamedTempFile::new_in(dir)?;
    if let Ok(meta) = fs::metadata(target) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    Ok(tmp)
}

/// Pretty JSON with a 4-space indent and a trailing newline.
pub fn to_pretty_json(result: &ExtractionResult) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    result.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}
