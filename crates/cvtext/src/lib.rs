//! cvtext - Resume Text-Extraction Pipeline
//!
//! cvtext converts heterogeneous resume uploads (plain text, searchable PDFs,
//! scanned PDFs, raw images) into one normalized text stream for downstream
//! scoring.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use cvtext::ocr::UnavailableOcrBackend;
//! use cvtext::{ExtractionConfig, Extractor, SourceFile};
//! use std::sync::Arc;
//!
//! # async fn example() -> cvtext::Result<()> {
//! let extractor = Extractor::new(ExtractionConfig::default(), Arc::new(UnavailableOcrBackend))?;
//! let file = SourceFile::from_path("resume.pdf").await?;
//! let text = extractor.extract(&file).await?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Dispatcher** ([`Extractor`]): routes a file to exactly one strategy by
//!   extension - direct text read, PDF structural walk, or whole-image OCR.
//! - **PDF walk** (`pdf`): per page, either the embedded text layer or a
//!   rasterized buffer for OCR, in strict page order, all-or-nothing.
//! - **OCR seam** (`ocr`): [`ocr::OcrBackend`] trait; the built-in Tesseract
//!   backend is behind the `tesseract` cargo feature.

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod extractor;
pub mod ocr;
pub mod pdf;
pub mod source;

pub use config::{ExtractionConfig, OcrConfig, PdfConfig};
pub use error::{ExtractError, Result, UNSUPPORTED_FORMAT_MESSAGE};
pub use extractor::Extractor;
pub use pdf::{PageRasterizer, PageUnit, PdfiumRasterizer};
pub use source::{SourceFile, SourceFormat};
