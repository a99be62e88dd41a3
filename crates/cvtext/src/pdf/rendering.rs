//! Page rasterization for OCR fallback.

use super::error::{PdfError, Result};
use image::ImageEncoder;
use image::codecs::png::PngEncoder;
use pdfium_render::prelude::*;
use std::io::Cursor;

/// Renders one page of a PDF to an encoded image buffer.
///
/// The page walk only calls this for pages with no text-showing operators, so
/// an implementation backed by a native render engine is never touched for
/// fully-searchable documents. Tests substitute a scripted implementation.
pub trait PageRasterizer: Send + Sync {
    fn rasterize(&self, pdf_bytes: &[u8], page_index: usize, scale: f32) -> Result<Vec<u8>>;
}

/// pdfium-backed [`PageRasterizer`].
///
/// The pdfium library is bound on each call; there is no shared global engine
/// state, and failing to locate the library surfaces as a rendering error on
/// the first image-only page rather than at startup.
pub struct PdfiumRasterizer;

impl PageRasterizer for PdfiumRasterizer {
    fn rasterize(&self, pdf_bytes: &[u8], page_index: usize, scale: f32) -> Result<Vec<u8>> {
        PdfRenderer::new()?.render_page_to_png(pdf_bytes, page_index, scale)
    }
}

/// Renders PDF pages to PNG-encoded pixel buffers via pdfium.
///
/// A renderer binds to the pdfium library when constructed and is scoped to
/// one rasterize call.
pub struct PdfRenderer {
    pdfium: Pdfium,
}

impl PdfRenderer {
    pub fn new() -> Result<Self> {
        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library())
            .map_err(|e| PdfError::RenderingFailed(format!("failed to initialize pdfium: {e}")))?;

        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }

    /// Render one page (0-indexed) at a fixed scale factor and return it as
    /// PNG bytes suitable for an OCR engine.
    pub fn render_page_to_png(&self, pdf_bytes: &[u8], page_index: usize, scale: f32) -> Result<Vec<u8>> {
        let document = self
            .pdfium
            .load_pdf_from_byte_slice(pdf_bytes, None)
            .map_err(|e| PdfError::InvalidPdf(e.to_string()))?;

        let page = document
            .pages()
            .get(page_index as u16)
            .map_err(|_| PdfError::PageNotFound(page_index + 1))?;

        let width_points = page.width().value;
        let height_points = page.height().value;

        let config = PdfRenderConfig::new()
            .set_target_width(((width_points * scale) as i32).max(1))
            .set_target_height(((height_points * scale) as i32).max(1))
            .rotate_if_landscape(PdfPageRenderRotation::None, false);

        let bitmap = page
            .render_with_config(&config)
            .map_err(|e| PdfError::RenderingFailed(format!("failed to render page {}: {e}", page_index + 1)))?;

        let rgb_image = bitmap.as_image().into_rgb8();
        let (width, height) = rgb_image.dimensions();

        let mut png_bytes = Cursor::new(Vec::new());
        let encoder = PngEncoder::new(&mut png_bytes);
        encoder
            .write_image(&rgb_image, width, height, image::ColorType::Rgb8.into())
            .map_err(|e| PdfError::RenderingFailed(format!("failed to encode page {} raster: {e}", page_index + 1)))?;

        Ok(png_bytes.into_inner())
    }
}
