use tracing::debug;

use crate::classify::{extract_category, extract_payment_method};
use crate::date::extract_date;
use crate::normalize::normalize;
use crate::total::extract_total;
use crate::types::ExtractionResult;
use crate::vendor::extract_vendor;

// ── Public extraction API ─────────────────────────────────────────────────────

pub struct Extractor;

impl Extractor {
    /// Normalize raw OCR text and extract every field from it.
    ///
    /// Callers should not pass blank OCR output here; see
    /// [`crate::pipeline::ReceiptPipeline`], which rejects it first.
    pub fn extract(raw_text: &str) -> ExtractionResult {
        Self::extract_normalized(&normalize(raw_text))
    }

    /// Extract from text that has already been through [`normalize`].
    pub fn extract_normalized(text: &str) -> ExtractionResult {
        let result = ExtractionResult {
            vendor: extract_vendor(text),
            date: extract_date(text),
            total: extract_total(text),
            category: extract_category(text),
            payment_method: extract_payment_method(text),
        };

        debug!(
            vendor = ?result.vendor,
            date = ?result.date,
            total = ?result.total,
            category = ?result.category,
            payment_method = ?result.payment_method,
            "extracted {}/5 receipt fields",
            result.found_count()
        );

        result
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use resit_core::{Category, Money, PaymentMethod};

    #[test]
    fn end_to_end_coffee_receipt() {
        let text = "Welcome\nSTARBUCKS KL\n12/05/2024\nLatte 15.00\nTOTAL RM 15.00\nCASH RM 20.00\nCHANGE RM 5.00";
        let r = Extractor::extract(text);
        assert_eq!(r.vendor.as_deref(), Some("STARBUCKS KL"));
        assert_eq!(r.date, NaiveDate::from_ymd_opt(2024, 5, 12));
        assert_eq!(r.total, Some(Money::from_cents(1500)));
        assert!(r.category.is_none() || r.category == Some(Category::Food));
        assert_eq!(r.payment_method, Some(PaymentMethod::Cash));
    }

    #[test]
    fn end_to_end_grocery_receipt_with_noise() {
        let text = "\u{feff}TAX INVOICE\r\n\r\n99 SPEEDMART SDN BHD\r\nCo. Reg 201501012345\r\n\
                    Date: 03 Mar 2024 18:22\r\n\r\nMilo 1kg 18.90\r\nRoti 3.20\r\n\
                    Sub-Total 22.10\r\nRounding 0.00\r\nVisa Card 22.10\r\nThank you\u{2122}";
        let r = Extractor::extract(text);
        assert_eq!(r.vendor.as_deref(), Some("99 SPEEDMART SDN BHD"));
        assert_eq!(r.date, NaiveDate::from_ymd_opt(2024, 3, 3));
        assert_eq!(r.total, Some(Money::from_cents(2210)));
        assert_eq!(r.category, Some(Category::Groceries));
        assert_eq!(r.payment_method, Some(PaymentMethod::Card));
    }

    #[test]
    fn raw_and_normalized_entry_points_agree() {
        let raw = "GRAB\r\n\r\n01/06/2024\r\nFare 23.50\r\nPaid with GrabPay";
        assert_eq!(Extractor::extract(raw), Extractor::extract_normalized(&normalize(raw)));
    }

    #[test]
    fn empty_text_yields_all_absent() {
        let r = Extractor::extract("");
        assert!(r.is_empty());
    }

    #[test]
    fn noise_only_text_yields_all_absent() {
        let r = Extractor::extract("\u{1F9FE}\u{1F9FE}\r\n\t\u{0}");
        assert_eq!(r, ExtractionResult::default());
    }

    #[test]
    fn no_panic_on_garbage_input() {
        let _ = Extractor::extract("!@#$%^&*()\n\0\x01\x02 31/31/31 .. 9.9.9 total");
    }

    #[test]
    fn extraction_is_deterministic() {
        let text = "AEON BIG\nHotel shuttle 10/10/10\nTotal 9.90\nTNG eWallet";
        let first = Extractor::extract(text);
        for _ in 0..5 {
            assert_eq!(Extractor::extract(text), first);
        }
    }
}
