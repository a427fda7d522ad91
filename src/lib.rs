pub mod config;
pub mod engine;

pub use config::{ConfigError, Settings};
pub use engine::{
    AmountBasis, Categorizer, CategorizerConfig, Category, CategoryError, Transaction, categorize,
    categorize_transaction,
};
