//! gofin-core: transaction and balance models plus the locale-aware formatting pipeline

pub mod balance;
pub mod file_size;
pub mod locale;
pub mod money;
pub mod transaction;

pub use balance::{Balance, BalanceFormatter, FormattedBalance};
pub use file_size::readable_size;
pub use locale::Locale;
pub use money::ValueFormatter;
pub use transaction::{
    Category, FormattedTransaction, Transaction, TransactionFormatter, TransactionType,
};
