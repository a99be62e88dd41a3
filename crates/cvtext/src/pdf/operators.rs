//! Content-stream operator inspection.
//!
//! A page is treated as having an embedded text layer when any text-showing
//! operator appears in its content stream. Presence alone decides: there is no
//! minimum-length heuristic, so a scanned page with a sparse text overlay is
//! still extracted as text rather than OCRed.

use super::error::Result;
use lopdf::Document;
use lopdf::content::Content;

/// The PDF text-showing operators (PDF 32000-1:2008, table 107).
const TEXT_SHOWING_OPERATORS: [&str; 4] = ["Tj", "TJ", "'", "\""];

/// Report whether the page's content stream contains any text-showing operator.
pub fn page_has_text_operators(document: &Document, page_id: lopdf::ObjectId) -> Result<bool> {
    let content_data = document.get_page_content(page_id)?;
    let content = Content::decode(&content_data)?;

    Ok(content
        .operations
        .iter()
        .any(|op| TEXT_SHOWING_OPERATORS.contains(&op.operator.as_str())))
}
