//! Plain-data snapshot of an account
//!
//! This is the shape the account takes on disk. Field names follow the
//! ledger file format (`created_date`, `transaction_type`, `date`) and amounts
//! are written as decimal units.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use super::ids::TransactionId;
use super::money::{as_units, Money};
use super::transaction::{Transaction, TransactionKind};

/// Serializable account state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub owner_name: String,

    /// Balance at the time of saving; informational only
    #[serde(with = "as_units")]
    pub balance: Money,

    /// Opening balance; older files without it start from zero
    #[serde(default, with = "as_units")]
    pub initial_balance: Money,

    #[serde(rename = "created_date")]
    pub created_at: NaiveDateTime,

    #[serde(default)]
    pub transactions: Vec<TransactionRecord>,
}

/// Serializable transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(deserialize_with = "deserialize_transaction_id")]
    pub id: TransactionId,

    #[serde(with = "as_units")]
    pub amount: Money,

    #[serde(default)]
    pub description: String,

    #[serde(rename = "transaction_type")]
    pub kind: TransactionKind,

    #[serde(default)]
    pub category: String,

    #[serde(rename = "date")]
    pub timestamp: NaiveDateTime,
}

impl TransactionRecord {
    pub(crate) fn into_transaction(self) -> Transaction {
        Transaction::restore(
            self.id,
            self.amount,
            self.description,
            self.kind,
            self.category,
            self.timestamp,
        )
    }
}

impl From<&Transaction> for TransactionRecord {
    fn from(txn: &Transaction) -> Self {
        Self {
            id: txn.id(),
            amount: txn.amount(),
            description: txn.description().to_string(),
            kind: txn.kind(),
            category: txn.category().to_string(),
            timestamp: txn.timestamp(),
        }
    }
}

/// Accept both UUID strings and the numeric ids written by older versions
fn deserialize_transaction_id<'de, D>(deserializer: D) -> Result<TransactionId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(n) => Ok(TransactionId::from_legacy(n)),
        RawId::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}
