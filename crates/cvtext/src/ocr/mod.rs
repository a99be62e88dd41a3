//! OCR backend seam.
//!
//! Recognition sits behind a trait so engines can be swapped and tests can
//! script recognition output. The built-in Tesseract backend lives behind the
//! `tesseract` cargo feature.

use crate::error::{ExtractError, Result};
use async_trait::async_trait;

#[cfg(feature = "tesseract")]
pub mod tesseract;

#[cfg(feature = "tesseract")]
pub use tesseract::TesseractOcrBackend;

/// An optical-character-recognition engine.
///
/// Backends must be thread-safe; one backend instance is shared across
/// concurrent extraction calls. Whatever text the engine returns is accepted
/// verbatim, with no confidence threshold or rejection policy.
#[async_trait]
pub trait OcrBackend: Send + Sync {
    /// Recognize text in an encoded image (PNG, JPEG, or a rendered page
    /// buffer). Failures surface as [`ExtractError::Ocr`] and propagate to the
    /// caller unmodified.
    async fn recognize(&self, image: &[u8], language: &str) -> Result<String>;

    /// Backend name for logs and diagnostics.
    fn name(&self) -> &str;
}

/// Placeholder backend for deployments that never reach an OCR path.
///
/// Any recognition attempt fails with [`ExtractError::MissingDependency`];
/// plain-text files and fully-searchable PDFs still extract normally.
pub struct UnavailableOcrBackend;

#[async_trait]
impl OcrBackend for UnavailableOcrBackend {
    async fn recognize(&self, _image: &[u8], _language: &str) -> Result<String> {
        Err(ExtractError::MissingDependency(
            "no OCR backend configured; rebuild with the `tesseract` feature or supply a custom backend".to_string(),
        ))
    }

    fn name(&self) -> &str {
        "unavailable"
    }
}
