use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::extract::Extractor;
use crate::hash;
use crate::recognizer::{OcrBackend, OcrError};
use crate::types::ExtractionResult;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("OCR recognition failed: {0}")]
    Ocr(#[from] OcrError),
    #[error("OCR returned no readable text; try a clearer photo")]
    EmptyText,
}

/// The result of a single receipt scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    /// SHA-256 hex digest of the uploaded bytes.
    pub content_hash: String,
    /// OCR text exactly as the backend returned it.
    pub raw_text: String,
    /// Structured fields extracted from the OCR text.
    pub extracted: ExtractionResult,
}

/// Orchestrates: hash → OCR → blank-text check → extract.
pub struct ReceiptPipeline<R: OcrBackend> {
    recognizer: R,
}

impl<R: OcrBackend> ReceiptPipeline<R> {
    pub fn new(recognizer: R) -> Self {
        Self { recognizer }
    }

    /// Scan a photo on disk.
    pub async fn process_file(&self, path: &Path) -> Result<ScanResult, PipelineError> {
        let bytes = tokio::fs::read(path).await?;
        debug!(path = %path.display(), bytes = bytes.len(), "read receipt image");
        self.process_bytes(&bytes)
    }

    /// Scan raw image bytes (camera capture or upload body).
    pub fn process_bytes(&self, data: &[u8]) -> Result<ScanResult, PipelineError> {
        let content_hash = hash::content_key(data);

        let raw_text = self.recognizer.recognize(data).map_err(|e| {
            warn!(hash = %content_hash, error = %e, "OCR backend failed");
            e
        })?;

        // Blank output means an unreadable photo, not a receipt with no fields.
        if raw_text.trim().is_empty() {
            warn!(hash = %content_hash, "OCR returned blank text");
            return Err(PipelineError::EmptyText);
        }

        let extracted = Extractor::extract(&raw_text);
        info!(
            hash = %content_hash,
            found = extracted.found_count(),
            "receipt scanned"
        );

        Ok(ScanResult { content_hash, raw_text, extracted })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognizer::MockRecognizer;
    use resit_core::{Money, PaymentMethod};

    const PHOTO: &[u8] = b"\xff\xd8\xff\xe0 not really a jpeg";

    #[test]
    fn process_bytes_extracts_fields() {
        let pipeline = ReceiptPipeline::new(MockRecognizer::new(
            "STARBUCKS KL\n12/05/2024\nTOTAL RM 15.00\nCASH RM 20.00",
        ));

        let result = pipeline.process_bytes(PHOTO).unwrap();

        assert_eq!(result.content_hash.len(), 64);
        assert_eq!(result.raw_text, "STARBUCKS KL\n12/05/2024\nTOTAL RM 15.00\nCASH RM 20.00");
        assert_eq!(result.extracted.total, Some(Money::from_cents(1500)));
        assert_eq!(result.extracted.payment_method, Some(PaymentMethod::Cash));
    }

    #[test]
    fn blank_ocr_text_short_circuits() {
        for blank in ["", "   ", "\n\r\n\t"] {
            let pipeline = ReceiptPipeline::new(MockRecognizer::new(blank));
            let err = pipeline.process_bytes(PHOTO).unwrap_err();
            assert!(matches!(err, PipelineError::EmptyText), "input {blank:?}");
        }
    }

    #[test]
    fn ocr_failure_is_propagated() {
        let pipeline = ReceiptPipeline::new(MockRecognizer::failing("timeout"));
        let err = pipeline.process_bytes(PHOTO).unwrap_err();
        assert!(matches!(err, PipelineError::Ocr(OcrError::Engine(_))));
    }

    #[test]
    fn same_bytes_same_hash() {
        let pipeline = ReceiptPipeline::new(MockRecognizer::new("irrelevant"));
        let r1 = pipeline.process_bytes(PHOTO).unwrap();
        let r2 = pipeline.process_bytes(PHOTO).unwrap();
        assert_eq!(r1.content_hash, r2.content_hash);
    }

    #[tokio::test]
    async fn process_file_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("receipt.jpg");
        std::fs::write(&path, PHOTO).unwrap();

        let pipeline = ReceiptPipeline::new(MockRecognizer::new("AEON BIG\nTotal 9.90"));
        let result = pipeline.process_file(&path).await.unwrap();

        assert_eq!(result.content_hash, hash::content_key(PHOTO));
        assert_eq!(result.extracted.vendor.as_deref(), Some("AEON BIG"));
    }

    #[tokio::test]
    async fn process_file_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = ReceiptPipeline::new(MockRecognizer::new("x"));
        let err = pipeline.process_file(&dir.path().join("nope.png")).await.unwrap_err();
        assert!(matches!(err, PipelineError::Io(_)));
    }
}
