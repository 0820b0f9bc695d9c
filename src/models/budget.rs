//! Monthly budget model
//!
//! A budget caps spending in one category per calendar month. Usage is always
//! derived from the account's history, never stored.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::account::Account;
use super::money::{as_units, Money};
use super::period::MonthPeriod;

/// Usage percentage at which a budget starts warning
pub const WARNING_THRESHOLD: f64 = 80.0;

/// A monthly spending limit for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub category: String,

    #[serde(with = "as_units")]
    pub monthly_limit: Money,

    #[serde(rename = "created_date")]
    pub created_at: NaiveDateTime,
}

/// Spending against a budget for one month
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetUsage {
    pub category: String,
    pub period: MonthPeriod,
    pub limit: Money,
    pub spent: Money,
    /// May be negative when over budget
    pub remaining: Money,
    pub usage_percentage: f64,
    pub is_over_budget: bool,
}

impl BudgetUsage {
    /// At or above the warning threshold but not over the limit
    pub fn is_near_limit(&self) -> bool {
        !self.is_over_budget && self.usage_percentage >= WARNING_THRESHOLD
    }
}

impl Budget {
    /// Create a budget, validating the inputs
    pub fn new(category: &str, monthly_limit: Money) -> Result<Self, BudgetValidationError> {
        let budget = Self {
            category: category.trim().to_string(),
            monthly_limit,
            created_at: Local::now().naive_local(),
        };
        budget.validate()?;
        Ok(budget)
    }

    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.category.trim().is_empty() {
            return Err(BudgetValidationError::EmptyCategory);
        }
        if !self.monthly_limit.is_positive() {
            return Err(BudgetValidationError::NonPositiveLimit(self.monthly_limit));
        }
        Ok(())
    }

    /// Spending in this budget's category during `period`
    ///
    /// Only expenses with an exact category match count.
    pub fn check_usage(&self, account: &Account, period: MonthPeriod) -> BudgetUsage {
        let spent: Money = account
            .history(None)
            .iter()
            .filter(|t| t.is_expense())
            .filter(|t| t.category() == self.category)
            .filter(|t| period.contains(&t.timestamp()))
            .map(|t| t.amount())
            .sum();

        let usage_percentage = if self.monthly_limit.is_positive() {
            spent.cents() as f64 * 100.0 / self.monthly_limit.cents() as f64
        } else {
            0.0
        };

        BudgetUsage {
            category: self.category.clone(),
            period,
            limit: self.monthly_limit,
            spent,
            remaining: self.monthly_limit - spent,
            usage_percentage,
            is_over_budget: spent > self.monthly_limit,
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} / month", self.category, self.monthly_limit)
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    EmptyCategory,
    NonPositiveLimit(Money),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Budget category cannot be empty"),
            Self::NonPositiveLimit(limit) => {
                write!(f, "Monthly limit must be greater than zero (got {})", limit)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::snapshot::{AccountSnapshot, TransactionRecord};
    use crate::models::{TransactionId, TransactionKind};
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn expense(units: i64, category: &str, when: NaiveDateTime) -> TransactionRecord {
        TransactionRecord {
            id: TransactionId::new(),
            amount: Money::from_units(units),
            description: String::new(),
            kind: TransactionKind::Expense,
            category: category.into(),
            timestamp: when,
        }
    }

    fn account(records: Vec<TransactionRecord>) -> Account {
        Account::from_snapshot(AccountSnapshot {
            owner_name: "Budi".into(),
            balance: Money::zero(),
            initial_balance: Money::from_units(1_000_000),
            created_at: at(2025, 1, 1),
            transactions: records,
        })
        .unwrap()
    }

    #[test]
    fn test_new_budget_validation() {
        assert_eq!(
            Budget::new("  ", Money::from_units(10)),
            Err(BudgetValidationError::EmptyCategory)
        );
        assert!(matches!(
            Budget::new("Food", Money::zero()),
            Err(BudgetValidationError::NonPositiveLimit(_))
        ));
        assert_eq!(Budget::new(" Food ", Money::from_units(10)).unwrap().category, "Food");
    }

    #[test]
    fn test_usage_counts_only_matching_month_and_category() {
        let acct = account(vec![
            expense(30_000, "Makanan", at(2025, 3, 2)),
            expense(50_000, "Makanan", at(2025, 3, 20)),
            expense(99_000, "Makanan", at(2025, 2, 28)),
            expense(10_000, "makanan", at(2025, 3, 5)),
            expense(7_000, "Transport", at(2025, 3, 5)),
        ]);
        let budget = Budget::new("Makanan", Money::from_units(100_000)).unwrap();

        let usage = budget.check_usage(&acct, MonthPeriod::new(2025, 3).unwrap());
        assert_eq!(usage.spent, Money::from_units(80_000));
        assert_eq!(usage.remaining, Money::from_units(20_000));
        assert_eq!(usage.usage_percentage, 80.0);
        assert!(!usage.is_over_budget);
        assert!(usage.is_near_limit());
    }

    #[test]
    fn test_usage_over_budget() {
        let acct = account(vec![expense(120_000, "Makanan", at(2025, 3, 2))]);
        let budget = Budget::new("Makanan", Money::from_units(100_000)).unwrap();

        let usage = budget.check_usage(&acct, MonthPeriod::new(2025, 3).unwrap());
        assert!(usage.is_over_budget);
        assert!(!usage.is_near_limit());
        assert_eq!(usage.remaining, Money::from_units(-20_000));
        assert_eq!(usage.usage_percentage, 120.0);
    }

    #[test]
    fn test_spending_exactly_the_limit_is_not_over() {
        let acct = account(vec![expense(100, "Food", at(2025, 3, 2))]);
        let budget = Budget::new("Food", Money::from_units(100)).unwrap();

        let usage = budget.check_usage(&acct, MonthPeriod::new(2025, 3).unwrap());
        assert!(!usage.is_over_budget);
        assert_eq!(usage.remaining, Money::zero());
    }

    #[test]
    fn test_unused_budget() {
        let acct = account(Vec::new());
        let budget = Budget::new("Food", Money::from_units(100)).unwrap();

        let usage = budget.check_usage(&acct, MonthPeriod::new(2025, 3).unwrap());
        assert_eq!(usage.spent, Money::zero());
        assert_eq!(usage.usage_percentage, 0.0);
        assert!(!usage.is_near_limit());
    }
}
