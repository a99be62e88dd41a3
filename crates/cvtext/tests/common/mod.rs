//! Shared fixtures: a scripted OCR backend and synthetic PDF builders.

#![allow(dead_code)]

use async_trait::async_trait;
use cvtext::Result;
use cvtext::ocr::OcrBackend;
use cvtext::pdf::PageRasterizer;
use cvtext::pdf::error::{PdfError, Result as PdfResult};
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use std::sync::Mutex;

/// One recorded call to [`ScriptedOcr::recognize`].
#[derive(Debug, Clone)]
pub struct RecognizeCall {
    pub image_len: usize,
    pub language: String,
}

/// OCR backend that returns a scripted reply and records every call.
pub struct ScriptedOcr {
    reply: String,
    pub calls: Mutex<Vec<RecognizeCall>>,
}

impl ScriptedOcr {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl OcrBackend for ScriptedOcr {
    async fn recognize(&self, image: &[u8], language: &str) -> Result<String> {
        self.calls.lock().unwrap().push(RecognizeCall {
            image_len: image.len(),
            language: language.to_string(),
        });
        Ok(self.reply.clone())
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// One recorded call to [`ScriptedRasterizer::rasterize`].
#[derive(Debug, Clone)]
pub struct RasterizeCall {
    pub page_index: usize,
    pub scale: f32,
}

/// Rasterizer that returns a scripted buffer (or failure) and records every
/// call, so raster-path tests run without a native render engine.
pub struct ScriptedRasterizer {
    reply: PdfResult<Vec<u8>>,
    pub calls: Mutex<Vec<RasterizeCall>>,
}

impl ScriptedRasterizer {
    pub fn new(png: &[u8]) -> Self {
        Self {
            reply: Ok(png.to_vec()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(PdfError::RenderingFailed(message.to_string())),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl PageRasterizer for ScriptedRasterizer {
    fn rasterize(&self, _pdf_bytes: &[u8], page_index: usize, scale: f32) -> PdfResult<Vec<u8>> {
        self.calls.lock().unwrap().push(RasterizeCall { page_index, scale });
        self.reply.clone()
    }
}

/// Per-page content for [`build_pdf`].
pub enum PageSpec<'a> {
    /// A page drawing the given string with a single `Tj`.
    Text(&'a str),
    /// A page with drawing operators but no text-showing operator.
    ImageOnly,
    /// A page that classifies as text but whose text layer cannot be decoded:
    /// the `Tf` ahead of the `Tj` is missing its font operand.
    CorruptText,
}

/// Build a PDF with one page per spec, in order.
pub fn build_pdf(pages: &[PageSpec<'_>]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for spec in pages {
        let contents: Object = match spec {
            PageSpec::Text(text) => {
                let content = Content {
                    operations: vec![
                        Operation::new("BT", vec![]),
                        Operation::new("Tf", vec!["F1".into(), 12.into()]),
                        Operation::new("Td", vec![50.into(), 700.into()]),
                        Operation::new("Tj", vec![Object::string_literal(*text)]),
                        Operation::new("ET", vec![]),
                    ],
                };
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap())).into()
            }
            PageSpec::ImageOnly => {
                let content = Content {
                    operations: vec![
                        Operation::new("re", vec![0.into(), 0.into(), 612.into(), 792.into()]),
                        Operation::new("f", vec![]),
                    ],
                };
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap())).into()
            }
            PageSpec::CorruptText => {
                let content = Content {
                    operations: vec![
                        Operation::new("BT", vec![]),
                        Operation::new("Tf", vec![]),
                        Operation::new("Tj", vec![Object::string_literal("x")]),
                        Operation::new("ET", vec![]),
                    ],
                };
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap())).into()
            }
        };

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => contents,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}
