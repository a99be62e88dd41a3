//! Input files and format dispatch.

use crate::error::{ExtractError, Result};
use std::path::Path;

/// An uploaded file: an opaque byte blob plus its declared name.
///
/// Owned by the caller for the duration of one extraction call and never
/// retained afterwards.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Declared file name, including extension.
    pub file_name: String,
    /// Raw file content.
    pub content: Vec<u8>,
}

impl SourceFile {
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content,
        }
    }

    /// Read a file from disk, taking its on-disk name as the declared name.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .ok_or_else(|| ExtractError::validation(format!("path has no usable file name: {}", path.display())))?;

        let content = tokio::fs::read(path).await?;
        Ok(Self { file_name, content })
    }
}

/// Extraction strategy selected from a file's extension.
///
/// Exactly one strategy applies to a given file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Direct text read (.txt).
    PlainText,
    /// PDF structural walk with per-page OCR fallback (.pdf).
    Pdf,
    /// Whole-image OCR (.jpg, .jpeg, .png).
    Image,
}

impl SourceFormat {
    /// Determine the strategy for a file name. Extension matching is
    /// case-insensitive; anything outside {txt, pdf, jpg, jpeg, png} is an
    /// [`ExtractError::UnsupportedFormat`].
    pub fn from_name(file_name: &str) -> Result<Self> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "txt" => Ok(Self::PlainText),
            "pdf" => Ok(Self::Pdf),
            "jpg" | "jpeg" | "png" => Ok(Self::Image),
            _ => Err(ExtractError::UnsupportedFormat(extension)),
        }
    }
}
