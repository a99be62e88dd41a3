//! Batch front end for the cvtext extraction pipeline.
//!
//! Files are processed sequentially; one file's failure is reported inline and
//! does not block the rest of the batch.

use anyhow::Context;
use clap::Parser;
use cvtext::ocr::OcrBackend;
use cvtext::{ExtractError, ExtractionConfig, Extractor, UNSUPPORTED_FORMAT_MESSAGE};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cvtext", version, about = "Extract normalized text from resume files (txt, pdf, jpg, jpeg, png)")]
struct Cli {
    /// Files to extract.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// TOML configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// OCR language code (overrides the configuration file).
    #[arg(long, value_name = "CODE")]
    lang: Option<String>,
}

#[cfg(feature = "tesseract")]
fn ocr_backend() -> Arc<dyn OcrBackend> {
    Arc::new(cvtext::ocr::TesseractOcrBackend::new())
}

#[cfg(not(feature = "tesseract"))]
fn ocr_backend() -> Arc<dyn OcrBackend> {
    Arc::new(cvtext::ocr::UnavailableOcrBackend)
}

fn failure_message(err: &ExtractError) -> String {
    match err {
        ExtractError::UnsupportedFormat(_) => UNSUPPORTED_FORMAT_MESSAGE.to_string(),
        other => other.to_string(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ExtractionConfig::from_file(path).with_context(|| format!("loading {}", path.display()))?,
        None => ExtractionConfig::default(),
    };
    if let Some(lang) = cli.lang {
        config.ocr.language = lang;
    }

    let backend = ocr_backend();
    debug!(backend = backend.name(), "initializing extractor");
    let extractor = Extractor::new(config, backend).context("invalid configuration")?;

    let mut failed = 0usize;
    for path in &cli.files {
        match extractor.extract_path(path).await {
            Ok(text) => {
                println!("==> {}", path.display());
                println!("{text}");
            }
            Err(err) => {
                error!(file = %path.display(), %err, "extraction failed");
                eprintln!("==> {}: analysis failed: {}", path.display(), failure_message(&err));
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
