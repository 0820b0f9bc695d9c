//! Financial goal model

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::{as_units, Money};

/// A named savings target with a deadline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialGoal {
    #[serde(default)]
    pub id: GoalId,

    pub name: String,

    #[serde(with = "as_units")]
    pub target_amount: Money,

    pub target_date: NaiveDate,

    #[serde(default, with = "as_units")]
    pub saved_amount: Money,

    #[serde(rename = "created_date")]
    pub created_at: NaiveDateTime,
}

/// Derived view of how a goal is going
#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
    pub goal_id: GoalId,
    pub name: String,
    pub target_amount: Money,
    pub saved_amount: Money,
    /// Negative once the goal has been overshot
    pub remaining_amount: Money,
    /// Not capped; may exceed 100
    pub progress_percentage: f64,
    /// Whole days until the target date, never below zero
    pub days_remaining: i64,
    pub daily_savings_needed: Money,
    pub is_achieved: bool,
}

impl FinancialGoal {
    /// Create a goal, requiring a target date strictly after `today`
    pub fn new(
        name: &str,
        target_amount: Money,
        target_date: NaiveDate,
        today: NaiveDate,
    ) -> Result<Self, GoalValidationError> {
        let goal = Self {
            id: GoalId::new(),
            name: name.trim().to_string(),
            target_amount,
            target_date,
            saved_amount: Money::zero(),
            created_at: Local::now().naive_local(),
        };
        goal.validate()?;

        if target_date <= today {
            return Err(GoalValidationError::TargetDateNotInFuture(target_date));
        }

        Ok(goal)
    }

    /// Structural checks that hold for stored goals as well as new ones
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }
        if !self.target_amount.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget(self.target_amount));
        }
        if self.saved_amount.is_negative() {
            return Err(GoalValidationError::NegativeSaved(self.saved_amount));
        }
        Ok(())
    }

    /// Add to the saved amount; the amount must be positive
    pub fn add_savings(&mut self, amount: Money) -> Result<(), GoalValidationError> {
        if !amount.is_positive() {
            return Err(GoalValidationError::NonPositiveSavings(amount));
        }
        self.saved_amount += amount;
        Ok(())
    }

    pub fn is_achieved(&self) -> bool {
        self.saved_amount >= self.target_amount
    }

    /// Progress as of today's local date
    pub fn progress(&self) -> GoalProgress {
        self.progress_on(Local::now().date_naive())
    }

    /// Progress as of `today`
    pub fn progress_on(&self, today: NaiveDate) -> GoalProgress {
        let remaining_amount = self.target_amount - self.saved_amount;
        let days_remaining = (self.target_date - today).num_days().max(0);

        let daily_savings_needed = if days_remaining > 0 {
            Money::from_f64(remaining_amount.as_f64() / days_remaining as f64)
        } else {
            Money::zero()
        };

        let progress_percentage = if self.target_amount.is_positive() {
            self.saved_amount.cents() as f64 * 100.0 / self.target_amount.cents() as f64
        } else {
            0.0
        };

        GoalProgress {
            goal_id: self.id,
            name: self.name.clone(),
            target_amount: self.target_amount,
            saved_amount: self.saved_amount,
            remaining_amount,
            progress_percentage,
            days_remaining,
            daily_savings_needed,
            is_achieved: self.is_achieved(),
        }
    }
}

impl fmt::Display for FinancialGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {} by {}",
            self.name, self.saved_amount, self.target_amount, self.target_date
        )
    }
}

/// Validation errors for goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NonPositiveTarget(Money),
    NegativeSaved(Money),
    NonPositiveSavings(Money),
    TargetDateNotInFuture(NaiveDate),
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NonPositiveTarget(amount) => {
                write!(f, "Target amount must be greater than zero (got {})", amount)
            }
            Self::NegativeSaved(amount) => {
                write!(f, "Saved amount cannot be negative (got {})", amount)
            }
            Self::NonPositiveSavings(amount) => {
                write!(f, "Savings amount must be greater than zero (got {})", amount)
            }
            Self::TargetDateNotInFuture(date) => {
                write!(f, "Target date {} must be in the future", date)
            }
        }
    }
}

impl std::error::Error for GoalValidationError {}
