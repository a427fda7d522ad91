mod categorizer;
mod category;
mod transaction;

pub use categorizer::{AmountBasis, Categorizer, CategorizerConfig, categorize, categorize_transaction};
pub use category::{Category, CategoryError};
pub use transaction::Transaction;
