use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::engine::Category;

/// Which value of an amount is compared against the thresholds.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AmountBasis {
    /// Compare the signed amount. Large negative amounts end up as "Small Expense".
    #[default]
    Signed,
    /// Compare `amount.abs()`, so large negative amounts become "Major Expense".
    Magnitude,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CategorizerConfig {
    pub large_threshold: f64,
    pub medium_threshold: f64,
    pub basis: AmountBasis,
}

const DEFAULT_CONFIG: CategorizerConfig = CategorizerConfig {
    large_threshold: 1000.0,
    medium_threshold: 100.0,
    basis: AmountBasis::Signed,
};

impl Default for CategorizerConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

impl CategorizerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("large_threshold", self.large_threshold),
            ("medium_threshold", self.medium_threshold),
        ] {
            if !value.is_finite() {
                Err(ConfigError::NonFiniteThreshold { name, value })?
            }
        }

        if self.medium_threshold > self.large_threshold {
            Err(ConfigError::ThresholdOrder {
                medium: self.medium_threshold,
                large: self.large_threshold,
            })?
        }

        Ok(())
    }
}

/// Buckets amounts by threshold. Checks run largest first and the first match wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Categorizer {
    config: CategorizerConfig,
}

impl Default for Categorizer {
    fn default() -> Self {
        Categorizer {
            config: DEFAULT_CONFIG,
        }
    }
}

impl Categorizer {
    pub fn new(config: CategorizerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        log::debug!("Categorizer configured: {config:?}");
        Ok(Categorizer { config })
    }

    pub fn config(&self) -> &CategorizerConfig {
        &self.config
    }

    pub fn categorize(&self, amount: f64) -> Category {
        let measured = match self.config.basis {
            AmountBasis::Signed => amount,
            AmountBasis::Magnitude => amount.abs(),
        };
        // Sign decides income vs expense regardless of basis
        let is_income = amount > 0.0;

        let category = if measured > self.config.large_threshold {
            if is_income {
                Category::LargeIncome
            } else {
                Category::MajorExpense
            }
        } else if measured > self.config.medium_threshold {
            if is_income {
                Category::MediumIncome
            } else {
                Category::MajorExpense
            }
        } else if is_income {
            Category::SmallIncome
        } else {
            Category::SmallExpense
        };

        log::trace!("Categorized amount={amount} as {category}");
        category
    }
}

/// Categorize with the default signed rule.
pub fn categorize(amount: f64) -> Category {
    Categorizer::default().categorize(amount)
}

/// Label of the category `amount` falls into under the default signed rule.
pub fn categorize_transaction(amount: f64) -> &'static str {
    categorize(amount).label()
}
