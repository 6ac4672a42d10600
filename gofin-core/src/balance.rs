//! Aggregate balances computed by the backend.

use serde::{Deserialize, Serialize};

use crate::money::ValueFormatter;

/// Sums over the whole transaction set. Never recomputed client-side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Balance {
    pub income: f64,
    pub outcome: f64,
    pub total: f64,
}

/// The three balance cards, all formatted from the same [`Balance`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormattedBalance {
    pub income: String,
    pub outcome: String,
    pub total: String,
}

pub struct BalanceFormatter;

impl BalanceFormatter {
    pub fn format(formatter: &ValueFormatter, balance: &Balance) -> FormattedBalance {
        FormattedBalance {
            income: formatter.format(balance.income),
            outcome: formatter.format(balance.outcome),
            total: formatter.format(balance.total),
        }
    }
}
