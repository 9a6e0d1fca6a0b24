// ============================================================
// Layer 6 — Logging
// ============================================================
// Tracing setup for an extraction run:
//
//   console  → stdout
//   log file → plain text, appended across runs
//
// Both print one line per event: `timestamp LEVEL: message`.
// Level comes from RUST_LOG when set; the crate itself always
// logs at INFO and above.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{Event, Subscriber};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{
        self,
        format::{self as fmt_format, FormatEvent, FormatFields},
        time::{FormatTime, SystemTime},
        FmtContext,
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter,
};

/// `2024-10-16T09:30:12.345678Z WARN: Could not extract emd`
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: fmt_format::Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        SystemTime.format_time(&mut writer)?;
        write!(writer, " {}: ", event.metadata().level())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

pub fn init_logging(log_file: &Path) -> Result<()> {
    let dir = match log_file.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let file_name = log_file
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("tender_extraction.log");

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .with_context(|| format!("Cannot open log file '{}'", log_file.display()))?;

    let env_filter = EnvFilter::from_default_env().add_directive("tender_qa=info".parse()?);

    let console_layer = fmt::layer()
        .event_format(LineFormat)
        .with_writer(std::io::stdout);

    let file_layer = fmt::layer()
        .event_format(LineFormat)
        .with_writer(file_appender)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("Logger already initialised")?;

    Ok(())
}
