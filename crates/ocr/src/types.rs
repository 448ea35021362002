use chrono::NaiveDate;
use resit_core::{Category, Money, PaymentMethod, ReceiptDraft};
use serde::{Deserialize, Serialize};

/// Structured fields recovered from one receipt's OCR text.
///
/// Every field is independent; `None` means the extractor found nothing it
/// trusted. Serialized dates use the canonical `YYYY-MM-DD` form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub vendor: Option<String>,
    pub date: Option<NaiveDate>,
    pub total: Option<Money>,
    pub category: Option<Category>,
    pub payment_method: Option<PaymentMethod>,
}

impl ExtractionResult {
    /// How many of the five fields were found.
    pub fn found_count(&self) -> usize {
        [
            self.vendor.is_some(),
            self.date.is_some(),
            self.total.is_some(),
            self.category.is_some(),
            self.payment_method.is_some(),
        ]
        .into_iter()
        .filter(|found| *found)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.found_count() == 0
    }
}

impl From<ExtractionResult> for ReceiptDraft {
    fn from(r: ExtractionResult) -> Self {
        ReceiptDraft {
            vendor: r.vendor,
            date: r.date,
            total: r.total,
            category: r.category,
            payment_method: r.payment_method,
            remark: None,
        }
    }
}
