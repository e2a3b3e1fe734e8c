// Export encoders: record (or a raster capture of the preview) -> downloadable file.
// Every encoder is pure over its input and returns `Result<ExportedFile, ExportError>`;
// none of them touches the stored record.

pub mod archive;
pub mod docx;
pub mod gate;
pub mod handlers;
pub mod html;
pub mod import;
pub mod json;
pub mod pdf;
pub mod text;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use gate::ExportGate;
pub use import::ImportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Pdf,
    Docx,
    Html,
    Text,
    Json,
}

impl ExportFormat {
    /// Suffix appended to the sanitized base name, including the dot.
    pub fn suffix(self) -> &'static str {
        match self {
            ExportFormat::Pdf => ".pdf",
            ExportFormat::Docx => ".docx",
            ExportFormat::Html => ".html",
            ExportFormat::Text => ".txt",
            ExportFormat::Json => "_data.json",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            ExportFormat::Html => "text/html; charset=utf-8",
            ExportFormat::Text => "text/plain; charset=utf-8",
            ExportFormat::Json => "application/json",
        }
    }

    /// User-facing name used in failure notices.
    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "PDF",
            ExportFormat::Docx => "DOCX",
            ExportFormat::Html => "HTML",
            ExportFormat::Text => "text",
            ExportFormat::Json => "JSON",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportedFile {
    pub format: ExportFormat,
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportedFile {
    pub fn new(format: ExportFormat, name: &str, bytes: Vec<u8>) -> Self {
        Self {
            format,
            filename: format!("{}{}", sanitize_filename(name), format.suffix()),
            content_type: format.content_type(),
            bytes,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("capture could not be decoded: {0}")]
    Capture(String),

    #[error("encoding failed: {0}")]
    Encode(String),

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("export task failed: {0}")]
    Task(String),
}

const FALLBACK_NAME: &str = "resume";

/// Trims, drops everything but ASCII alphanumerics, `-`, `_` and whitespace,
/// then collapses whitespace runs to `_`. Blank input or an empty result
/// yields `resume`.
pub fn sanitize_filename(name: &str) -> String {
    let kept: String = name
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_' || c.is_whitespace())
        .collect();
    let collapsed = kept.split_whitespace().collect::<Vec<_>>().join("_");
    if collapsed.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        collapsed
    }
}
