use serde::{Deserialize, Serialize};
use std::fmt;

/// Spending category a receipt is filed under.
///
/// Variant order is classification priority: when a receipt mentions words
/// from several categories, the one listed first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Utilities,
    Travel,
    Food,
    Groceries,
    Transport,
    Health,
    Clothing,
    Household,
    Personal,
    Entertainment,
    Education,
    Office,
    Electronics,
    Charity,
}

impl Category {
    pub const ALL: [Category; 14] = [
        Category::Utilities,
        Category::Travel,
        Category::Food,
        Category::Groceries,
        Category::Transport,
        Category::Health,
        Category::Clothing,
        Category::Household,
        Category::Personal,
        Category::Entertainment,
        Category::Education,
        Category::Office,
        Category::Electronics,
        Category::Charity,
    ];

    /// Canonical lowercase key.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Utilities => "utilities",
            Category::Travel => "travel",
            Category::Food => "food",
            Category::Groceries => "groceries",
            Category::Transport => "transport",
            Category::Health => "health",
            Category::Clothing => "clothing",
            Category::Household => "household",
            Category::Personal => "personal",
            Category::Entertainment => "entertainment",
            Category::Education => "education",
            Category::Office => "office",
            Category::Electronics => "electronics",
            Category::Charity => "charity",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Category::Utilities => "Utilities",
            Category::Travel => "Travel",
            Category::Food => "Food",
            Category::Groceries => "Groceries",
            Category::Transport => "Transport",
            Category::Health => "Health",
            Category::Clothing => "Clothing",
            Category::Household => "Household",
            Category::Personal => "Personal",
            Category::Entertainment => "Entertainment",
            Category::Education => "Education",
            Category::Office => "Office",
            Category::Electronics => "Electronics",
            Category::Charity => "Charity",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == key)
            .ok_or_else(|| format!("Unknown category: '{s}'"))
    }
}
