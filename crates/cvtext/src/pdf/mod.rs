//! PDF structural extraction.
//!
//! The walk visits pages strictly in order and classifies each one exactly
//! once: a page whose content stream shows text yields its embedded text
//! layer, and an image-only page yields a rasterized pixel buffer for the OCR
//! fallback. Results accumulate into an ordered sequence indexed by page
//! position, so the final concatenation never depends on incidental iteration
//! scheduling. Any page failure aborts the whole walk; partial results are
//! never returned.

pub mod error;
pub mod operators;
pub mod rendering;

use crate::config::PdfConfig;
use error::{PdfError, Result};
use lopdf::Document;
use tracing::debug;

pub use rendering::{PageRasterizer, PdfiumRasterizer};

/// One page of a document, transient within a single extraction call.
///
/// Carries either the page's embedded text run or its rasterized pixel buffer,
/// never both.
#[derive(Debug, Clone)]
pub enum PageUnit {
    /// Embedded text layer, fragments joined with single spaces.
    Text(String),
    /// PNG-encoded page raster awaiting OCR.
    Raster(Vec<u8>),
}

/// Walk all pages of a PDF in page order and produce one [`PageUnit`] each.
///
/// The rasterizer is only invoked for image-only pages, so fully-searchable
/// documents never touch a render engine.
pub fn collect_page_units(
    pdf_bytes: &[u8],
    config: &PdfConfig,
    rasterizer: &dyn PageRasterizer,
) -> Result<Vec<PageUnit>> {
    let document = Document::load_mem(pdf_bytes).map_err(|e| PdfError::InvalidPdf(e.to_string()))?;

    let pages = document.get_pages();
    let mut units = Vec::with_capacity(pages.len());

    for (&page_number, &page_id) in &pages {
        if operators::page_has_text_operators(&document, page_id)? {
            let raw = document
                .extract_text(&[page_number])
                .map_err(|e| PdfError::TextExtractionFailed(format!("page {page_number}: {e}")))?;

            debug!(page = page_number, "embedded text layer found");
            units.push(PageUnit::Text(join_fragments(&raw)));
        } else {
            debug!(page = page_number, "no text-showing operators, rasterizing for OCR");

            let png = rasterizer.rasterize(pdf_bytes, page_number as usize - 1, config.render_scale)?;
            units.push(PageUnit::Raster(png));
        }
    }

    Ok(units)
}

/// Join a page's text fragments with single spaces.
fn join_fragments(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
