//! Extraction configuration.
//!
//! Configuration is an explicit value passed to [`Extractor::new`] rather than
//! hidden process-wide state, so independent extractors (and parallel tests)
//! never share engine settings.
//!
//! [`Extractor::new`]: crate::extractor::Extractor::new

use crate::error::{ExtractError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration for one extractor instance.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExtractionConfig {
    /// OCR settings used for raw images and scanned PDF pages.
    #[serde(default)]
    pub ocr: OcrConfig,

    /// PDF-specific settings.
    #[serde(default)]
    pub pdf: PdfConfig,
}

/// OCR configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrConfig {
    /// ISO 639-2/3 language code passed to the OCR engine (e.g. "eng", "deu",
    /// or a combined "eng+deu").
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

/// PDF extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfConfig {
    /// Scale factor applied when rasterizing a page for OCR. The default 2.0
    /// upscale improves recognition accuracy on scanned pages.
    #[serde(default = "default_render_scale")]
    pub render_scale: f32,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            render_scale: default_render_scale(),
        }
    }
}

fn default_language() -> String {
    "eng".to_string()
}

fn default_render_scale() -> f32 {
    2.0
}

impl ExtractionConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| ExtractError::validation_with_source("invalid TOML configuration", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    /// Validate field values.
    pub fn validate(&self) -> Result<()> {
        if !self.pdf.render_scale.is_finite() || self.pdf.render_scale <= 0.0 {
            return Err(ExtractError::validation(format!(
                "pdf.render_scale must be a positive number, got {}",
                self.pdf.render_scale
            )));
        }

        let language = self.ocr.language.trim();
        if language.is_empty() {
            return Err(ExtractError::validation(
                "ocr.language must not be empty (e.g. \"eng\")",
            ));
        }
        if !language.chars().all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '_') {
            return Err(ExtractError::validation(format!(
                "ocr.language contains invalid characters: {language:?}"
            )));
        }

        Ok(())
    }
}
