//! Reference lists: the (id, label) options the review form offers for
//! categories and payment methods.
//!
//! Classifiers emit canonical lowercase keys (`grabpay`, `food`), while the
//! option lists are external data with their own ids and human spelling
//! ("Grab Pay", "Food & Drinks"). `ReferenceList::resolve` bridges the two.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::category::Category;
use crate::payment::PaymentMethod;

#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("Failed to parse reference list: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Duplicate option id: '{0}'")]
    DuplicateId(String),
    #[error("Option '{0}' has an empty label")]
    EmptyLabel(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceOption {
    pub id: String,
    pub label: String,
}

impl ReferenceOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self { id: id.into(), label: label.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReferenceList {
    #[serde(rename = "option")]
    options: Vec<ReferenceOption>,
}

#[derive(Deserialize)]
struct ReferenceFile {
    #[serde(default)]
    option: Vec<ReferenceOption>,
}

impl ReferenceList {
    pub fn new(options: Vec<ReferenceOption>) -> Result<Self, ReferenceError> {
        let mut seen = HashSet::new();
        for opt in &options {
            if opt.label.trim().is_empty() {
                return Err(ReferenceError::EmptyLabel(opt.id.clone()));
            }
            if !seen.insert(opt.id.clone()) {
                return Err(ReferenceError::DuplicateId(opt.id.clone()));
            }
        }
        Ok(Self { options })
    }

    /// Parse a list written as `[[option]]` tables.
    pub fn from_toml(toml_content: &str) -> Result<Self, ReferenceError> {
        let file: ReferenceFile = toml::from_str(toml_content)?;
        Self::new(file.option)
    }

    /// Built-in category options, one per canonical key.
    pub fn categories() -> Self {
        Self {
            options: Category::ALL
                .into_iter()
                .map(|c| ReferenceOption::new(c.as_str(), c.display_name()))
                .collect(),
        }
    }

    /// Built-in payment method options, one per canonical key.
    pub fn payment_methods() -> Self {
        Self {
            options: PaymentMethod::ALL
                .into_iter()
                .map(|m| ReferenceOption::new(m.as_str(), m.display_name()))
                .collect(),
        }
    }

    pub fn options(&self) -> &[ReferenceOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Find the option a canonical key refers to. Ids are tried before
    /// labels; both sides are compared lowercase with punctuation and
    /// spacing dropped.
    pub fn resolve(&self, key: &str) -> Option<&ReferenceOption> {
        let wanted = fold_key(key);
        if wanted.is_empty() {
            return None;
        }
        self.options
            .iter()
            .find(|o| fold_key(&o.id) == wanted)
            .or_else(|| self.options.iter().find(|o| fold_key(&o.label) == wanted))
    }
}

fn fold_key(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
