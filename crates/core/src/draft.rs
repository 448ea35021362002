use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::category::Category;
use crate::money::Money;
use crate::payment::PaymentMethod;

/// A form field the reviewer has to fill before a receipt can be saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    Vendor,
    Date,
    Total,
    Category,
    PaymentMethod,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftField::Vendor => write!(f, "vendor"),
            DraftField::Date => write!(f, "date"),
            DraftField::Total => write!(f, "total"),
            DraftField::Category => write!(f, "category"),
            DraftField::PaymentMethod => write!(f, "payment_method"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<DraftField>),
    #[error("Total cannot be negative: {0}")]
    NegativeTotal(Money),
}

fn join_fields(fields: &[DraftField]) -> String {
    fields.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

/// The editable record shown to the user after a scan. Extracted values
/// pre-fill it; anything the extractor could not find starts out empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptDraft {
    pub vendor: Option<String>,
    pub date: Option<NaiveDate>,
    pub total: Option<Money>,
    pub category: Option<Category>,
    pub payment_method: Option<PaymentMethod>,
    /// Free-text note; never required.
    pub remark: Option<String>,
}

impl ReceiptDraft {
    /// Required fields that are still empty, in form order.
    pub fn missing_fields(&self) -> Vec<DraftField> {
        let mut missing = Vec::new();
        if self.vendor.as_deref().map_or(true, |v| v.trim().is_empty()) {
            missing.push(DraftField::Vendor);
        }
        if self.date.is_none() {
            missing.push(DraftField::Date);
        }
        if self.total.is_none() {
            missing.push(DraftField::Total);
        }
        if self.category.is_none() {
            missing.push(DraftField::Category);
        }
        if self.payment_method.is_none() {
            missing.push(DraftField::PaymentMethod);
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(DraftError::MissingFields(missing));
        }
        match self.total {
            Some(total) if total.is_negative() => Err(DraftError::NegativeTotal(total)),
            _ => Ok(()),
        }
    }
}
