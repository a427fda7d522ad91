use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::{Categorizer, CategorizerConfig};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Threshold {name} must be finite, got {value}")]
    NonFiniteThreshold { name: &'static str, value: f64 },

    #[error("Medium threshold {medium} is above large threshold {large}")]
    ThresholdOrder { medium: f64, large: f64 },
}

/// Application wide settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Settings {
    pub app_name: String,
    pub version: u32,
    pub initial_balance: f64,
    pub is_active: bool,
    pub categorizer: CategorizerConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            app_name: String::from("Personal Finance Manager"),
            version: 1,
            initial_balance: 0.0,
            is_active: true,
            categorizer: CategorizerConfig::default(),
        }
    }
}

impl Settings {
    pub fn categorizer(&self) -> Result<Categorizer, ConfigError> {
        Categorizer::new(self.categorizer)
    }
}
