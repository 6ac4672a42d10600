//! Transaction records as the backend sends them, and their display projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::ValueFormatter;

/// Direction of a transaction. The stored value is always a magnitude.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Outcome,
}

impl TransactionType {
    /// Marker shown before the value in the transaction table
    pub fn sign_marker(&self) -> &'static str {
        match self {
            TransactionType::Income => "",
            TransactionType::Outcome => "- ",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub title: String,
}

/// A single recorded monetary movement, read-only on the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub title: String,
    pub value: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: Category,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn is_outcome(&self) -> bool {
        self.kind == TransactionType::Outcome
    }
}

/// A transaction plus its display strings. The raw fields stay available.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FormattedTransaction {
    #[serde(flatten)]
    pub transaction: Transaction,
    #[serde(rename = "formattedValue")]
    pub formatted_value: String,
    #[serde(rename = "formattedDate")]
    pub formatted_date: String,
}

impl FormattedTransaction {
    /// Text for the price column: outcome values carry a leading `- `.
    pub fn display_value(&self) -> String {
        format!("{}{}", self.transaction.kind.sign_marker(), self.formatted_value)
    }
}

/// Augments raw transactions with their formatted value and date.
pub struct TransactionFormatter;

impl TransactionFormatter {
    /// Same length, same order as the input. Nothing is sorted, merged or dropped.
    pub fn format(formatter: &ValueFormatter, txns: Vec<Transaction>) -> Vec<FormattedTransaction> {
        txns.into_iter()
            .map(|transaction| FormattedTransaction {
                formatted_value: formatter.format(transaction.value),
                formatted_date: formatter.format_date(transaction.created_at),
                transaction,
            })
            .collect()
    }
}
