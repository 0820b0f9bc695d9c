//! Transaction model
//!
//! A transaction records one monetary movement into or out of the account.
//! Transactions are immutable once created: the amount is always positive and
//! the direction lives in [`TransactionKind`].

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Parse a kind from user input ("income", "in", "expense", "out")
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" | "inflow" => Some(Self::Income),
            "expense" | "out" | "outflow" => Some(Self::Expense),
            _ => None,
        }
    }

    /// The lowercase name used in the ledger file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Amount with its effect on the balance (positive for income)
    pub fn signed(&self, amount: Money) -> Money {
        match self {
            Self::Income => amount,
            Self::Expense => -amount,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    id: TransactionId,
    amount: Money,
    description: String,
    kind: TransactionKind,
    category: String,
    timestamp: NaiveDateTime,
}

impl Transaction {
    /// Create a transaction stamped with the current local time
    pub(crate) fn new(
        amount: Money,
        description: impl Into<String>,
        kind: TransactionKind,
        category: impl Into<String>,
    ) -> Self {
        Self::restore(
            TransactionId::new(),
            amount,
            description,
            kind,
            category,
            Local::now().naive_local(),
        )
    }

    /// Rebuild a transaction from persisted fields
    ///
    /// The category is trimmed, matching how budgets store theirs.
    pub(crate) fn restore(
        id: TransactionId,
        amount: Money,
        description: impl Into<String>,
        kind: TransactionKind,
        category: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            amount,
            description: description.into(),
            kind,
            category: category.into().trim().to_string(),
            timestamp,
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    /// The (always positive) amount
    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Effect of this transaction on the balance
    pub fn signed_amount(&self) -> Money {
        self.kind.signed(self.amount)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}: {} - {}",
            self.timestamp.format("%Y-%m-%d %H:%M"),
            self.kind,
            self.description,
            self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(
            Money::from_units(50_000),
            "Lunch",
            TransactionKind::Expense,
            "Food",
        );
        assert_eq!(txn.amount(), Money::from_units(50_000));
        assert_eq!(txn.category(), "Food");
        assert!(txn.is_expense());
        assert!(!txn.is_income());
    }

    #[test]
    fn test_new_transactions_get_distinct_ids() {
        let a = Transaction::new(Money::from_units(1), "a", TransactionKind::Income, "x");
        let b = Transaction::new(Money::from_units(1), "a", TransactionKind::Income, "x");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_signed_amount() {
        let income = Transaction::new(Money::from_units(10), "", TransactionKind::Income, "");
        let expense = Transaction::new(Money::from_units(10), "", TransactionKind::Expense, "");
        assert_eq!(income.signed_amount(), Money::from_units(10));
        assert_eq!(expense.signed_amount(), Money::from_units(-10));
    }

    #[test]
    fn test_kind_parse_and_serde() {
        assert_eq!(TransactionKind::parse("Income"), Some(TransactionKind::Income));
        assert_eq!(TransactionKind::parse("out"), Some(TransactionKind::Expense));
        assert_eq!(TransactionKind::parse("transfer"), None);

        let json = serde_json::to_string(&TransactionKind::Expense).unwrap();
        assert_eq!(json, "\"expense\"");
    }

    #[test]
    fn test_display() {
        let txn = Transaction::restore(
            TransactionId::new(),
            Money::from_units(500_000),
            "salary",
            TransactionKind::Income,
            "Salary",
            fixed_time(),
        );
        assert_eq!(
            txn.to_string(),
            "2025-01-15 10:30 - Income: salary - 500,000.00"
        );
    }
}
