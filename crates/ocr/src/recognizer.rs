use thiserror::Error;

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("Image decode error: {0}")]
    ImageDecode(String),
    #[error("OCR engine error: {0}")]
    Engine(String),
    #[error("Tesseract not available, build with the `tesseract` feature")]
    NotAvailable,
}

/// The text-detection service a receipt photo is sent to.
///
/// Implementations take the uploaded image bytes as-is and return whatever
/// text they recognised. Empty text is a valid answer for an unreadable
/// photo; deciding what to do about it is the caller's job.
pub trait OcrBackend: Send + Sync {
    fn recognize(&self, image_bytes: &[u8]) -> Result<String, OcrError>;
}

impl<T: OcrBackend + ?Sized> OcrBackend for Box<T> {
    fn recognize(&self, image_bytes: &[u8]) -> Result<String, OcrError> {
        (**self).recognize(image_bytes)
    }
}

// ── Mock backend (always available, used for tests and dry runs) ──────────────

/// Answers every request with a preset text, or a preset engine failure.
pub struct MockRecognizer {
    outcome: Result<String, String>,
}

impl MockRecognizer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { outcome: Ok(text.into()) }
    }

    /// A backend that fails every call with `OcrError::Engine(message)`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self { outcome: Err(message.into()) }
    }
}

impl OcrBackend for MockRecognizer {
    fn recognize(&self, _image_bytes: &[u8]) -> Result<String, OcrError> {
        self.outcome.clone().map_err(OcrError::Engine)
    }
}

// ── Tesseract backend (optional, gated behind `tesseract` feature) ────────────

#[cfg(feature = "tesseract")]
pub mod tesseract_backend {
    use super::{OcrBackend, OcrError};
    use leptess::LepTess;

    pub struct TesseractRecognizer {
        data_path: Option<String>,
        lang: String,
    }

    impl TesseractRecognizer {
        pub fn new(data_path: Option<String>, lang: &str) -> Self {
            Self { data_path, lang: lang.to_string() }
        }
    }

    impl OcrBackend for TesseractRecognizer {
        fn recognize(&self, image_bytes: &[u8]) -> Result<String, OcrError> {
            // LepTess is not Sync; a fresh engine per call keeps the backend shareable.
            let mut lt = LepTess::new(self.data_path.as_deref(), &self.lang)
                .map_err(|e| OcrError::Engine(e.to_string()))?;
            lt.set_image_from_mem(image_bytes)
                .map_err(|e| OcrError::ImageDecode(e.to_string()))?;
            lt.get_utf8_text().map_err(|e| OcrError::Engine(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_returns_preset_text_for_any_image() {
        let r = MockRecognizer::new("STARBUCKS\nTOTAL 5.50\nCASH");
        assert_eq!(r.recognize(b"fake image data").unwrap(), "STARBUCKS\nTOTAL 5.50\nCASH");
        assert_eq!(r.recognize(b"").unwrap(), "STARBUCKS\nTOTAL 5.50\nCASH");
    }

    #[test]
    fn failing_mock_reports_engine_error() {
        let r = MockRecognizer::failing("quota exceeded");
        let err = r.recognize(b"img").unwrap_err();
        assert!(matches!(err, OcrError::Engine(ref m) if m == "quota exceeded"));
        assert_eq!(err.to_string(), "OCR engine error: quota exceeded");
    }

    #[test]
    fn boxed_backend_delegates() {
        let r: Box<dyn OcrBackend> = Box::new(MockRecognizer::new("hello"));
        assert_eq!(r.recognize(b"x").unwrap(), "hello");
    }
}
