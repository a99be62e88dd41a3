//! Extraction entry point.
//!
//! The extractor inspects a file's extension and applies exactly one strategy:
//! direct text read, PDF structural walk with per-page OCR fallback, or
//! whole-image OCR. Extraction is atomic from the caller's point of view: it
//! returns the full normalized text or fails, never a partial result.

use crate::config::ExtractionConfig;
use crate::error::{ExtractError, Result};
use crate::ocr::OcrBackend;
use crate::pdf::{self, PageRasterizer, PageUnit, PdfiumRasterizer};
use crate::source::{SourceFile, SourceFormat};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Document text extractor.
///
/// Holds its configuration and OCR backend explicitly; there is no shared
/// state between instances or between calls, so one extractor may serve
/// concurrent extractions of independent files.
pub struct Extractor {
    config: ExtractionConfig,
    ocr: Arc<dyn OcrBackend>,
    rasterizer: Arc<dyn PageRasterizer>,
}

impl Extractor {
    /// Create an extractor with the given configuration and OCR backend,
    /// rasterizing image-only PDF pages through pdfium.
    ///
    /// # Errors
    ///
    /// Returns `ExtractError::Validation` if the configuration is invalid.
    pub fn new(config: ExtractionConfig, ocr: Arc<dyn OcrBackend>) -> Result<Self> {
        Self::with_rasterizer(config, ocr, Arc::new(PdfiumRasterizer))
    }

    /// Create an extractor with an explicit page rasterizer.
    pub fn with_rasterizer(
        config: ExtractionConfig,
        ocr: Arc<dyn OcrBackend>,
        rasterizer: Arc<dyn PageRasterizer>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, ocr, rasterizer })
    }

    /// Extract the normalized text of one file.
    ///
    /// # Errors
    ///
    /// - `ExtractError::UnsupportedFormat` - extension outside {txt, pdf, jpg, jpeg, png}
    /// - `ExtractError::Read` - plain-text decode failure
    /// - `ExtractError::Parsing` - PDF open/parse/render failure
    /// - `ExtractError::Ocr` - recognition failure
    ///
    /// A failure on any PDF page aborts the whole call; text already gathered
    /// from earlier pages is discarded.
    pub async fn extract(&self, file: &SourceFile) -> Result<String> {
        let format = SourceFormat::from_name(&file.file_name)?;
        debug!(file = %file.file_name, ?format, size = file.content.len(), "dispatching extraction");

        match format {
            SourceFormat::PlainText => extract_plain_text(&file.content),
            SourceFormat::Pdf => self.extract_pdf(&file.content).await,
            SourceFormat::Image => {
                let text = self.ocr.recognize(&file.content, &self.config.ocr.language).await?;
                Ok(text.trim().to_string())
            }
        }
    }

    /// Read a file from disk and extract its text.
    pub async fn extract_path(&self, path: impl AsRef<Path>) -> Result<String> {
        let file = SourceFile::from_path(path).await?;
        self.extract(&file).await
    }

    async fn extract_pdf(&self, pdf_bytes: &[u8]) -> Result<String> {
        // The structural walk is blocking (lopdf + pdfium); classify and
        // rasterize off the async runtime, then run the OCR fallbacks here so
        // page n+1 never completes before page n.
        let pdf_config = self.config.pdf.clone();
        let bytes = pdf_bytes.to_vec();
        let rasterizer = Arc::clone(&self.rasterizer);
        let units =
            tokio::task::spawn_blocking(move || pdf::collect_page_units(&bytes, &pdf_config, rasterizer.as_ref()))
                .await
                .map_err(|e| ExtractError::parsing(format!("page walk task panicked: {e}")))??;

        let mut content = String::new();
        for (index, unit) in units.into_iter().enumerate() {
            match unit {
                PageUnit::Text(text) => content.push_str(&text),
                PageUnit::Raster(png) => {
                    debug!(page = index + 1, backend = self.ocr.name(), "running OCR fallback");
                    let text = self.ocr.recognize(&png, &self.config.ocr.language).await?;
                    content.push_str(&text);
                }
            }
            content.push('\n');
        }

        // Trimmed once at the very end, not per page.
        Ok(content.trim().to_string())
    }
}

fn extract_plain_text(content: &[u8]) -> Result<String> {
    let text = std::str::from_utf8(content)
        .map_err(|e| ExtractError::read_with_source("text file is not valid UTF-8", e))?;
    Ok(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_trims_outer_whitespace_only() {
        let text = extract_plain_text(b"  hello world  \n").unwrap();
        assert_eq!(text, "hello world");
    }

    #[test]
    fn test_plain_text_preserves_interior_whitespace() {
        let text = extract_plain_text(b"line one\n\nline  two\n").unwrap();
        assert_eq!(text, "line one\n\nline  two");
    }

    #[test]
    fn test_plain_text_rejects_invalid_utf8() {
        let result = extract_plain_text(&[0xff, 0xfe, 0x00]);
        assert!(matches!(result.unwrap_err(), ExtractError::Read { .. }));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = ExtractionConfig::default();
        config.pdf.render_scale = -1.0;
        let result = Extractor::new(config, Arc::new(crate::ocr::UnavailableOcrBackend));
        assert!(matches!(result, Err(ExtractError::Validation { .. })));
    }
}
