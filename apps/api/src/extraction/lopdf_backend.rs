use std::sync::Arc;

use lopdf::Document;
use tracing::warn;

use super::{ExtractionError, PdfBackend, PdfDocument};

/// Default PDF backend: pure-Rust decoding via `lopdf`.
pub struct LopdfBackend;

impl PdfBackend for LopdfBackend {
    fn open(&self, bytes: &[u8]) -> Result<Arc<dyn PdfDocument>, ExtractionError> {
        let mut doc =
            Document::load_mem(bytes).map_err(|e| ExtractionError::Unreadable(e.to_string()))?;

        // Owner-password-only files open with the empty user password.
        if doc.is_encrypted() {
            doc.decrypt("").map_err(|e| {
                warn!("lopdf could not open encrypted document: {e}");
                ExtractionError::Encrypted
            })?;
        }

        // lopdf numbers pages from 1; keep them sorted so index 0 is page 1.
        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();

        Ok(Arc::new(LopdfDocument { doc, page_numbers }))
    }
}

struct LopdfDocument {
    doc: Document,
    page_numbers: Vec<u32>,
}

impl PdfDocument for LopdfDocument {
    fn page_count(&self) -> u32 {
        self.page_numbers.len() as u32
    }

    fn page_fragments(&self, index: u32) -> Result<Vec<String>, ExtractionError> {
        let page = *self
            .page_numbers
            .get(index as usize)
            .ok_or_else(|| ExtractionError::Page {
                page: index + 1,
                message: "page index out of range".to_string(),
            })?;

        let text = self.doc.extract_text(&[page]).map_err(|e| {
            warn!("lopdf could not decode page {page}: {e}");
            ExtractionError::Page {
                page,
                message: e.to_string(),
            }
        })?;

        Ok(split_fragments(&text))
    }
}

/// Splits decoded page text into fragments: one per non-blank line.
fn split_fragments(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
