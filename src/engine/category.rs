use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Coarse bucket a transaction amount falls into.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "Large Income")]
    LargeIncome,
    #[serde(rename = "Medium Income")]
    MediumIncome,
    #[serde(rename = "Major Expense")]
    MajorExpense,
    #[serde(rename = "Small Income")]
    SmallIncome,
    #[serde(rename = "Small Expense")]
    SmallExpense,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CategoryError {
    #[error("Unknown category label: {0:?}")]
    Unknown(String),
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::LargeIncome,
        Category::MediumIncome,
        Category::MajorExpense,
        Category::SmallIncome,
        Category::SmallExpense,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::LargeIncome => "Large Income",
            Category::MediumIncome => "Medium Income",
            Category::MajorExpense => "Major Expense",
            Category::SmallIncome => "Small Income",
            Category::SmallExpense => "Small Expense",
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(
            self,
            Category::LargeIncome | Category::MediumIncome | Category::SmallIncome
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    /// Labels must match exactly, surrounding whitespace aside.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| CategoryError::Unknown(s.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::{Category, CategoryError};
    use std::str::FromStr;

    #[test]
    fn test_that_every_label_parses_back() {
        for category in Category::ALL {
            let parsed = Category::from_str(category.label());
            assert_eq!(parsed, Ok(category));
        }

        let parsed = Category::from_str("  Small Expense ");
        assert_eq!(parsed, Ok(Category::SmallExpense));
    }

    #[test]
    fn test_that_unknown_label_returns_error() {
        let parsed = Category::from_str("large income");
        assert!(matches!(parsed, Err(CategoryError::Unknown(_))));

        let parsed = Category::from_str("");
        assert_eq!(parsed, Err(CategoryError::Unknown(String::new())));
    }

    #[test]
    fn test_that_display_prints_label() {
        assert_eq!(Category::MajorExpense.to_string(), "Major Expense");
        assert_eq!(format!("{}", Category::SmallIncome), "Small Income");
    }

    #[test]
    fn test_income_split() {
        assert!(Category::LargeIncome.is_income());
        assert!(Category::SmallIncome.is_income());
        assert!(!Category::MajorExpense.is_income());
        assert!(!Category::SmallExpense.is_income());
    }
}
