//! Error types for cvtext.
//!
//! All fallible operations in the crate return [`Result`]. Every failure class
//! is a tagged variant of [`ExtractError`], including unsupported formats: the
//! original pipeline returned a plain sentinel string for unrecognized
//! extensions while throwing for everything else, and that asymmetry is
//! deliberately collapsed here so callers handle failures through one channel.
//!
//! System errors (`Io`) always bubble up unchanged. Application errors carry a
//! message plus an optional boxed source for debugging.
use thiserror::Error;

/// User-facing message for files with an unrecognized extension.
///
/// Display layers render this for [`ExtractError::UnsupportedFormat`]; the
/// library itself reports the offending extension in the error value.
pub const UNSUPPORTED_FORMAT_MESSAGE: &str = "Unsupported file format. Please upload a .pdf or .txt file.";

/// Result type alias using `ExtractError`.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Main error type for all cvtext operations.
///
/// # Variants
///
/// - `Io` - File system and I/O errors (always bubble up)
/// - `Read` - Raw file read/decode failures on the plain-text path
/// - `Parsing` - PDF open, page parse, or page render failures
/// - `Ocr` - OCR recognition failures
/// - `Validation` - Invalid configuration or parameters
/// - `MissingDependency` - A required backend is not compiled in or installed
/// - `UnsupportedFormat` - File extension outside the recognized set
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Read error: {message}")]
    Read {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Parsing error: {message}")]
    Parsing {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("OCR error: {message}")]
    Ocr {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Missing dependency: {0}")]
    MissingDependency(String),

    #[error("Unsupported format: .{0}")]
    UnsupportedFormat(String),
}

macro_rules! error_constructor {
    ($name:ident, $with_source:ident, $variant:ident) => {
        #[doc = concat!("Create a `", stringify!($variant), "` error.")]
        pub fn $name<S: Into<String>>(message: S) -> Self {
            Self::$variant {
                message: message.into(),
                source: None,
            }
        }

        #[doc = concat!("Create a `", stringify!($variant), "` error with source.")]
        pub fn $with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
            message: S,
            source: E,
        ) -> Self {
            Self::$variant {
                message: message.into(),
                source: Some(Box::new(source)),
            }
        }
    };
}

impl ExtractError {
    error_constructor!(read, read_with_source, Read);
    error_constructor!(parsing, parsing_with_source, Parsing);
    error_constructor!(ocr, ocr_with_source, Ocr);
    error_constructor!(validation, validation_with_source, Validation);
}

impl From<crate::pdf::error::PdfError> for ExtractError {
    fn from(err: crate::pdf::error::PdfError) -> Self {
        ExtractError::Parsing {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
