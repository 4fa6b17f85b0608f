//! Text Extractor — turns an uploaded PDF into one normalized text blob.
//!
//! Pages are independent, so each page's fragments are fetched on its own
//! blocking task. Handles are awaited in page order: the joined output follows
//! page index, never completion order.

pub mod lopdf_backend;

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

pub use lopdf_backend::LopdfBackend;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("PDF buffer is empty")]
    Empty,

    #[error("Not a readable PDF: {0}")]
    Unreadable(String),

    #[error("PDF is encrypted")]
    Encrypted,

    #[error("PDF has no pages")]
    NoPages,

    #[error("Failed to read text from page {page}: {message}")]
    Page { page: u32, message: String },

    #[error("Extraction task failed: {0}")]
    Task(String),
}

/// A decoded PDF as seen by the extractor. Page indices are 0-based here;
/// backends map them onto whatever numbering the decoder uses.
pub trait PdfDocument: Send + Sync {
    fn page_count(&self) -> u32;

    /// Text fragments of one page, in reading order as the decoder reports them.
    fn page_fragments(&self, index: u32) -> Result<Vec<String>, ExtractionError>;
}

/// External PDF decode backend.
pub trait PdfBackend: Send + Sync {
    fn open(&self, bytes: &[u8]) -> Result<Arc<dyn PdfDocument>, ExtractionError>;
}

/// Output of a successful extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedDocument {
    pub text: String,
    pub page_count: u32,
}

/// Extracts the normalized document text: fragments joined by single spaces
/// per page, pages joined by newlines, the whole thing trimmed.
///
/// An image-only PDF yields an empty string, not an error.
pub async fn extract_text(
    backend: Arc<dyn PdfBackend>,
    bytes: bytes::Bytes,
) -> Result<ExtractedDocument, ExtractionError> {
    if bytes.is_empty() {
        return Err(ExtractionError::Empty);
    }

    let document = tokio::task::spawn_blocking(move || backend.open(&bytes))
        .await
        .map_err(|e| ExtractionError::Task(e.to_string()))??;

    let page_count = document.page_count();
    if page_count == 0 {
        return Err(ExtractionError::NoPages);
    }

    let handles: Vec<_> = (0..page_count)
        .map(|index| {
            let document = Arc::clone(&document);
            tokio::task::spawn_blocking(move || {
                document
                    .page_fragments(index)
                    .map(|fragments| fragments.join(" "))
            })
        })
        .collect();

    let mut pages = Vec::with_capacity(handles.len());
    for handle in handles {
        let page = handle
            .await
            .map_err(|e| ExtractionError::Task(e.to_string()))??;
        pages.push(page);
    }

    let text = pages.join("\n").trim().to_string();
    debug!("Extracted {} chars from {} page(s)", text.len(), page_count);

    Ok(ExtractedDocument { text, page_count })
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! In-memory PDFs for tests, built with lopdf.

    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// One page per entry; each line becomes its own text block on the page.
    /// An empty entry produces a page without any text.
    pub fn pdf_with_pages(pages: &[&[&str]]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids = Vec::new();
        for lines in pages {
            let mut operations = Vec::new();
            if lines.is_empty() {
                operations.push(Operation::new(
                    "re",
                    vec![10.into(), 10.into(), 50.into(), 50.into()],
                ));
                operations.push(Operation::new("f", vec![]));
            }
            for (i, line) in lines.iter().enumerate() {
                let y = 750 - (i as i64) * 20;
                operations.push(Operation::new("BT", vec![]));
                operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
                operations.push(Operation::new("Td", vec![72.into(), y.into()]));
                operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
                operations.push(Operation::new("ET", vec![]));
            }
            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                content.encode().expect("encode content"),
            ));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            });
            kids.push(Object::from(page_id));
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

        let mut buf = Vec::new();
        doc.save_to(&mut buf).expect("save pdf");
        buf
    }
}
