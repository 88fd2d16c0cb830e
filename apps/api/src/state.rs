use std::sync::Arc;

use crate::extract::TextExtractor;
use crate::inference::InferenceClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Resume text extraction. Production: `PdfExtractor`.
    pub extractor: Arc<dyn TextExtractor>,
    /// Model access. Production: `GeminiClient`; tests substitute stubs.
    pub inference: Arc<dyn InferenceClient>,
}
