// Test fixtures shared across modules: a scripted Q&A model, an
// in-memory document source, a word-level tokenizer and a tiny
// PDF builder.

use anyhow::{anyhow, bail, Result};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Object, Stream};
use std::collections::HashMap;
use std::convert::Infallible;
use std::io::Write;
use std::str::FromStr;
use tempfile::NamedTempFile;
use tokenizers::Tokenizer;

use crate::domain::answer::QaAnswer;
use crate::domain::document::{Document, Page};
use crate::domain::traits::{DocumentSource, QuestionAnswerer};

/// Answers scripted questions by locating a fixed needle in the
/// context, so every answer is a real span like a model's would be.
pub struct ScriptedQa {
    answers: HashMap<String, Option<String>>,
    score:   f32,
    calls:   usize,
}

impl ScriptedQa {
    pub fn new() -> Self {
        Self {
            answers: HashMap::new(),
            score: 0.9,
            calls: 0,
        }
    }

    pub fn script(mut self, question: &str, needle: &str) -> Self {
        self.answers.insert(question.to_string(), Some(needle.to_string()));
        self
    }

    pub fn fail(mut self, question: &str) -> Self {
        self.answers.insert(question.to_string(), None);
        self
    }

    pub fn with_score(mut self, score: f32) -> Self {
        self.score = score;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl QuestionAnswerer for ScriptedQa {
    fn answer(&mut self, question: &str, context: &str) -> Result<QaAnswer> {
        self.calls += 1;
        if context.trim().is_empty() {
            bail!("empty context");
        }
        let needle = match self.answers.get(question) {
            Some(Some(needle)) => needle,
            Some(None) => bail!("model error"),
            None => bail!("no answer scripted"),
        };
        let start = context
            .find(needle.as_str())
            .ok_or_else(|| anyhow!("'{needle}' not in context"))?;
        QaAnswer::from_context(context, start, start + needle.len(), self.score)
            .ok_or_else(|| anyhow!("bad span"))
    }
}

/// Build a PDF with one page per entry; "" gives a page with no text.
pub fn build_pdf(pages: &[&str]) -> Vec<u8> {
    let mut doc = lopdf::Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let operations = if text.is_empty() {
            Vec::new()
        } else {
            vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ]
        };
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

pub fn write_temp_pdf(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

/// A document already in memory, one entry per page.
pub struct StaticSource {
    pages: Vec<String>,
}

impl StaticSource {
    pub fn new(pages: &[&str]) -> Self {
        Self {
            pages: pages.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl DocumentSource for StaticSource {
    type Error = Infallible;

    fn load(&self) -> Result<Document, Self::Error> {
        let pages = self
            .pages
            .iter()
            .enumerate()
            .map(|(i, text)| Page::new(i as u32 + 1, Some(text.clone())))
            .collect();
        Ok(Document::new("memory", pages))
    }
}

/// BERT-shaped tokenizer over a word-level vocabulary: lowercasing,
/// whitespace/punctuation splitting and [CLS] q [SEP] c [SEP] pairs.
/// Unknown words map to [UNK] but keep their offsets.
pub fn word_tokenizer() -> Tokenizer {
    let json = serde_json::json!({
        "version": "1.0",
        "truncation": null,
        "padding": null,
        "added_tokens": [
            {"id": 0,   "content": "[PAD]", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
            {"id": 1,   "content": "[UNK]", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
            {"id": 101, "content": "[CLS]", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
            {"id": 102, "content": "[SEP]", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true}
        ],
        "normalizer": {
            "type": "BertNormalizer",
            "clean_text": true,
            "handle_chinese_chars": true,
            "strip_accents": null,
            "lowercase": true
        },
        "pre_tokenizer": { "type": "Whitespace" },
        "post_processor": {
            "type": "BertProcessing",
            "sep": ["[SEP]", 102],
            "cls": ["[CLS]", 101]
        },
        "decoder": null,
        "model": {
            "type": "WordLevel",
            "vocab": {
                "[PAD]": 0, "[UNK]": 1, "[CLS]": 101, "[SEP]": 102,
                "what": 2, "fee": 3, "reference": 4, "emd": 5, "rs": 6
            },
            "unk_token": "[UNK]"
        }
    });
    Tokenizer::from_str(&json.to_string()).unwrap()
}
