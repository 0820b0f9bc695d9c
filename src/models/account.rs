//! Account model
//!
//! The account owns the ledger: an append-only, chronologically ordered list
//! of transactions plus a cached balance. The balance always equals the
//! initial balance plus all income minus all expenses, and never drops below
//! zero. The transaction list can only grow through [`Account::add_income`]
//! and [`Account::add_expense`], or be rebuilt wholesale from a snapshot.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use tracing::{info, warn};

use super::ids::TransactionId;
use super::money::Money;
use super::period::MonthPeriod;
use super::snapshot::{AccountSnapshot, TransactionRecord};
use super::transaction::{Transaction, TransactionKind};
use crate::error::{PocketbookError, PocketbookResult};

/// Income and expense totals for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlySummary {
    pub period: MonthPeriod,
    pub total_income: Money,
    pub total_expense: Money,
    /// Income minus expense (may be negative)
    pub net_income: Money,
    pub transaction_count: usize,
}

/// Per-category totals across the whole history
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    pub income: Money,
    pub expense: Money,
    pub count: usize,
}

/// A transaction together with the balance right after it was applied
#[derive(Debug, Clone, Copy)]
pub struct RegisterLine<'a> {
    pub transaction: &'a Transaction,
    pub balance: Money,
}

/// Optional filters for browsing the history
#[derive(Debug, Clone, Default)]
pub struct HistoryFilter {
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
    /// Keep only the last N matching transactions
    pub limit: Option<usize>,
}

/// The single-owner ledger account
#[derive(Debug, Clone)]
pub struct Account {
    owner_name: String,
    initial_balance: Money,
    balance: Money,
    transactions: Vec<Transaction>,
    created_at: NaiveDateTime,
}

impl Account {
    /// Open a new account
    pub fn new(owner_name: &str, initial_balance: Money) -> PocketbookResult<Self> {
        let owner_name = validate_owner_name(owner_name)?;

        if initial_balance.is_negative() {
            return Err(PocketbookError::Validation(
                "Initial balance cannot be negative".into(),
            ));
        }

        Ok(Self {
            owner_name,
            initial_balance,
            balance: initial_balance,
            transactions: Vec::new(),
            created_at: Local::now().naive_local(),
        })
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    /// Rename the account owner
    pub fn set_owner_name(&mut self, name: &str) -> PocketbookResult<()> {
        self.owner_name = validate_owner_name(name)?;
        Ok(())
    }

    pub fn initial_balance(&self) -> Money {
        self.initial_balance
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// Record money coming in
    pub fn add_income(
        &mut self,
        amount: Money,
        description: &str,
        category: &str,
    ) -> PocketbookResult<TransactionId> {
        ensure_positive(amount, "Income amount")?;

        let new_balance = self.balance.checked_add(amount).ok_or_else(|| {
            warn!(%amount, balance = %self.balance, "income rejected: balance would overflow");
            PocketbookError::Validation(format!(
                "Income of {} would take the balance past the largest supported amount",
                amount
            ))
        })?;

        let txn = Transaction::new(amount, description, TransactionKind::Income, category);
        let id = txn.id();
        self.transactions.push(txn);
        self.balance = new_balance;

        info!(%id, %amount, category, "recorded income");
        Ok(id)
    }

    /// Record money going out
    ///
    /// Rejected without any effect when the amount exceeds the balance.
    pub fn add_expense(
        &mut self,
        amount: Money,
        description: &str,
        category: &str,
    ) -> PocketbookResult<TransactionId> {
        ensure_positive(amount, "Expense amount")?;

        if amount > self.balance {
            warn!(%amount, balance = %self.balance, "expense rejected: insufficient funds");
            return Err(PocketbookError::InsufficientFunds {
                needed: amount,
                available: self.balance,
            });
        }

        let txn = Transaction::new(amount, description, TransactionKind::Expense, category);
        let id = txn.id();
        self.transactions.push(txn);
        self.balance -= amount;

        info!(%id, %amount, category, "recorded expense");
        Ok(id)
    }

    /// Current balance
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// The whole history, or only the last `limit` transactions, oldest first
    ///
    /// A limit of zero means no limit.
    pub fn history(&self, limit: Option<usize>) -> &[Transaction] {
        match limit {
            Some(limit) if limit > 0 => {
                let start = self.transactions.len().saturating_sub(limit);
                &self.transactions[start..]
            }
            _ => &self.transactions,
        }
    }

    /// History narrowed by kind and/or category, then limited to the most
    /// recent matches
    pub fn filtered_history(&self, filter: &HistoryFilter) -> Vec<&Transaction> {
        let matches: Vec<&Transaction> = self
            .transactions
            .iter()
            .filter(|t| filter.kind.map_or(true, |k| t.kind() == k))
            .filter(|t| {
                filter
                    .category
                    .as_deref()
                    .map_or(true, |c| t.category() == c)
            })
            .collect();

        match filter.limit {
            Some(limit) if limit > 0 => {
                let start = matches.len().saturating_sub(limit);
                matches[start..].to_vec()
            }
            _ => matches,
        }
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn find_transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id() == id)
    }

    /// Distinct categories in order of first use
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.transactions
            .iter()
            .map(|t| t.category())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Income and expense totals for a calendar month
    pub fn monthly_summary(&self, period: MonthPeriod) -> MonthlySummary {
        let mut total_income = Money::zero();
        let mut total_expense = Money::zero();
        let mut transaction_count = 0;

        for txn in self
            .transactions
            .iter()
            .filter(|t| period.contains(&t.timestamp()))
        {
            match txn.kind() {
                TransactionKind::Income => total_income += txn.amount(),
                TransactionKind::Expense => total_expense += txn.amount(),
            }
            transaction_count += 1;
        }

        MonthlySummary {
            period,
            total_income,
            total_expense,
            net_income: total_income - total_expense,
            transaction_count,
        }
    }

    /// Totals per category over the whole history
    ///
    /// Categories that were never used are absent.
    pub fn category_summary(&self) -> BTreeMap<String, CategoryTotals> {
        let mut summary: BTreeMap<String, CategoryTotals> = BTreeMap::new();

        for txn in &self.transactions {
            let entry = summary.entry(txn.category().to_string()).or_default();
            match txn.kind() {
                TransactionKind::Income => entry.income += txn.amount(),
                TransactionKind::Expense => entry.expense += txn.amount(),
            }
            entry.count += 1;
        }

        summary
    }

    /// Every transaction paired with the running balance after it
    pub fn running_balances(&self) -> Vec<RegisterLine<'_>> {
        let mut balance = self.initial_balance;
        self.transactions
            .iter()
            .map(|transaction| {
                balance += transaction.signed_amount();
                RegisterLine {
                    transaction,
                    balance,
                }
            })
            .collect()
    }

    /// End-of-day balances for the `days` days ending on `last_day`
    pub fn daily_balances(&self, last_day: NaiveDate, days: u32) -> Vec<(NaiveDate, Money)> {
        if days == 0 {
            return Vec::new();
        }

        let first_day = last_day - Duration::days(i64::from(days) - 1);
        let mut balance = self.initial_balance;
        let mut txns = self.transactions.iter().peekable();

        // Fold everything before the window
        while let Some(txn) = txns.next_if(|t| t.timestamp().date() < first_day) {
            balance += txn.signed_amount();
        }

        first_day
            .iter_days()
            .take(days as usize)
            .map(|day| {
                while let Some(txn) = txns.next_if(|t| t.timestamp().date() <= day) {
                    balance += txn.signed_amount();
                }
                (day, balance)
            })
            .collect()
    }

    /// Plain data snapshot for persistence
    pub fn to_snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            owner_name: self.owner_name.clone(),
            balance: self.balance,
            initial_balance: self.initial_balance,
            created_at: self.created_at,
            transactions: self
                .transactions
                .iter()
                .map(TransactionRecord::from)
                .collect(),
        }
    }

    /// Rebuild an account from a snapshot
    ///
    /// The stored balance is ignored; the balance is recomputed by folding the
    /// transactions in order from the initial balance. A snapshot that would
    /// break the ledger rules (non-positive amounts, repeated ids, a balance
    /// that dips below zero) is rejected as malformed.
    pub fn from_snapshot(snapshot: AccountSnapshot) -> PocketbookResult<Self> {
        let owner_name = validate_owner_name(&snapshot.owner_name)
            .map_err(|e| PocketbookError::LedgerMalformed(e.to_string()))?;

        if snapshot.initial_balance.is_negative() {
            return Err(PocketbookError::LedgerMalformed(
                "initial balance is negative".into(),
            ));
        }

        let mut balance = snapshot.initial_balance;
        let mut seen = HashSet::with_capacity(snapshot.transactions.len());
        let mut transactions = Vec::with_capacity(snapshot.transactions.len());

        for (index, record) in snapshot.transactions.into_iter().enumerate() {
            if !record.amount.is_positive() {
                return Err(PocketbookError::LedgerMalformed(format!(
                    "transaction #{} has a non-positive amount ({})",
                    index + 1,
                    record.amount
                )));
            }

            if !seen.insert(record.id) {
                return Err(PocketbookError::LedgerMalformed(format!(
                    "transaction id {} appears more than once",
                    record.id
                )));
            }

            balance = balance
                .checked_add(record.kind.signed(record.amount))
                .ok_or_else(|| {
                    PocketbookError::LedgerMalformed(format!(
                        "balance overflows at transaction #{}",
                        index + 1
                    ))
                })?;
            if balance.is_negative() {
                return Err(PocketbookError::LedgerMalformed(format!(
                    "balance goes negative at transaction #{}",
                    index + 1
                )));
            }

            transactions.push(record.into_transaction());
        }

        if balance != snapshot.balance {
            warn!(
                stored = %snapshot.balance,
                recomputed = %balance,
                "stored balance differs from transaction history; using recomputed value"
            );
        }

        Ok(Self {
            owner_name,
            initial_balance: snapshot.initial_balance,
            balance,
            transactions,
            created_at: snapshot.created_at,
        })
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account: {} | Balance: {} | Transactions: {}",
            self.owner_name,
            self.balance,
            self.transactions.len()
        )
    }
}

fn validate_owner_name(name: &str) -> PocketbookResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(PocketbookError::Validation(
            "Owner name cannot be empty".into(),
        ));
    }
    Ok(name.to_string())
}

fn ensure_positive(amount: Money, what: &str) -> PocketbookResult<()> {
    if !amount.is_positive() {
        warn!(%amount, "{} rejected: must be greater than zero", what);
        return Err(PocketbookError::Validation(format!(
            "{} must be greater than zero",
            what
        )));
    }
    Ok(())
}
