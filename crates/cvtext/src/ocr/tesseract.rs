//! Native Tesseract OCR backend.

use super::OcrBackend;
use crate::error::{ExtractError, Result};
use async_trait::async_trait;
use kreuzberg_tesseract::TesseractAPI;
use std::env;
use std::path::{Path, PathBuf};

/// Well-known tessdata locations probed when `TESSDATA_PREFIX` is unset.
const TESSDATA_FALLBACK_PATHS: [&str; 6] = [
    "/opt/homebrew/share/tessdata",
    "/usr/share/tesseract-ocr/5/tessdata",
    "/usr/share/tesseract-ocr/4/tessdata",
    "/usr/share/tessdata",
    "/usr/local/share/tessdata",
    r#"C:\Program Files\Tesseract-OCR\tessdata"#,
];

/// OCR backend over the bundled Tesseract engine.
///
/// Recognition is CPU-bound and runs on the blocking thread pool.
pub struct TesseractOcrBackend {
    tessdata_dir: Option<PathBuf>,
}

impl TesseractOcrBackend {
    /// Create a backend that resolves tessdata from `TESSDATA_PREFIX` or
    /// well-known install locations.
    pub fn new() -> Self {
        Self { tessdata_dir: None }
    }

    /// Create a backend with an explicit tessdata directory.
    pub fn with_tessdata_dir(tessdata_dir: impl Into<PathBuf>) -> Self {
        Self {
            tessdata_dir: Some(tessdata_dir.into()),
        }
    }

    fn resolve_tessdata(&self) -> String {
        if let Some(dir) = &self.tessdata_dir {
            return dir.display().to_string();
        }
        env::var("TESSDATA_PREFIX")
            .ok()
            .or_else(|| {
                TESSDATA_FALLBACK_PATHS
                    .iter()
                    .find(|path| Path::new(path).exists())
                    .map(|path| (*path).to_string())
            })
            .unwrap_or_default()
    }
}

impl Default for TesseractOcrBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn recognize_blocking(image_bytes: &[u8], language: &str, tessdata_path: &str) -> Result<String> {
    let img = image::load_from_memory(image_bytes)
        .map_err(|e| ExtractError::ocr_with_source("failed to decode image for recognition", e))?;

    let rgb_image = img.to_rgb8();
    let (width, height) = rgb_image.dimensions();
    let bytes_per_pixel = 3;
    let bytes_per_line = width * bytes_per_pixel;

    let api = TesseractAPI::new();
    api.init(tessdata_path, language)
        .map_err(|e| ExtractError::ocr(format!("failed to initialize language '{language}': {e}")))?;

    api.set_image(
        rgb_image.as_raw(),
        width as i32,
        height as i32,
        bytes_per_pixel as i32,
        bytes_per_line as i32,
    )
    .map_err(|e| ExtractError::ocr(format!("failed to set image: {e}")))?;

    api.recognize()
        .map_err(|e| ExtractError::ocr(format!("recognition failed: {e}")))?;

    api.get_utf8_text()
        .map_err(|e| ExtractError::ocr(format!("failed to read recognized text: {e}")))
}

#[async_trait]
impl OcrBackend for TesseractOcrBackend {
    async fn recognize(&self, image: &[u8], language: &str) -> Result<String> {
        let image = image.to_vec();
        let language = language.to_string();
        let tessdata_path = self.resolve_tessdata();

        tokio::task::spawn_blocking(move || recognize_blocking(&image, &language, &tessdata_path))
            .await
            .map_err(|e| ExtractError::ocr(format!("recognition task panicked: {e}")))?
    }

    fn name(&self) -> &str {
        "tesseract"
    }
}
