//! Text extraction from uploaded resume documents.

use thiserror::Error;

/// Error produced when a document cannot be read as a PDF at all.
/// A page with no extractable text is not an error; it contributes an
/// empty fragment to the output.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ExtractionError(pub String);

/// Converts an uploaded document into plain text.
///
/// Carried in `AppState` as `Arc<dyn TextExtractor>` so handlers can be
/// tested with a deterministic substitute.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError>;
}

/// PDF text extraction backed by `pdf-extract`. Pages are extracted
/// individually and concatenated in order with no separator.
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| ExtractionError(e.to_string()))?;
        Ok(pages.concat())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_are_rejected() {
        assert!(PdfExtractor.extract(b"definitely not a pdf").is_err());
    }

    #[test]
    fn test_truncated_pdf_is_rejected() {
        assert!(PdfExtractor.extract(b"%PDF-1.7\n1 0 obj\n<<").is_err());
    }
}
