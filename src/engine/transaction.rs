use serde::{Deserialize, Serialize};
use std::fmt;

use crate::engine::categorize_transaction;

/// A single recorded money movement.
/// Nothing is validated: `category` is free text and `date` is kept as given.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Transaction {
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub date: String,
}

impl Transaction {
    pub fn new(
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Transaction {
            amount,
            category: category.into(),
            description: description.into(),
            date: date.into(),
        }
    }

    /// Build a transaction whose category is the default categorizer's label for `amount`.
    pub fn categorized(
        amount: f64,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Transaction::new(amount, categorize_transaction(amount), description, date)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Rounded for display only
        write!(
            f,
            "{} - {}: ${:.2} ({})",
            self.date, self.category, self.amount, self.description
        )
    }
}
