//! Receipt OCR intake and field extraction.
//!
//! Raw OCR text goes through [`normalize`] and then five independent
//! extractors (vendor, date, total, category, payment method). Every
//! extractor returns `Option`: absence means "not found", never an error.

// Compiled once per process, shared by every extractor.
macro_rules! re {
    ($name:ident, $pat:expr) => {
        fn $name() -> &'static ::regex::Regex {
            static R: ::std::sync::OnceLock<::regex::Regex> = ::std::sync::OnceLock::new();
            R.get_or_init(|| ::regex::Regex::new($pat).expect("invalid regex"))
        }
    };
}

pub mod classify;
pub mod date;
pub mod extract;
pub mod hash;
pub mod normalize;
pub mod pipeline;
pub mod recognizer;
pub mod total;
pub mod types;
pub mod vendor;

pub use classify::{extract_category, extract_payment_method};
pub use date::extract_date;
pub use extract::Extractor;
pub use hash::{content_key, sha256_bytes, to_hex};
pub use normalize::normalize;
pub use pipeline::{PipelineError, ReceiptPipeline, ScanResult};
pub use recognizer::{MockRecognizer, OcrBackend, OcrError};
pub use total::extract_total;
pub use types::ExtractionResult;
pub use vendor::extract_vendor;
