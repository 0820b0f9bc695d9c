//! Budget manager
//!
//! Owns the monthly budgets (one per category) and the savings goals, and
//! couples goal funding to the account: saving toward a goal is an expense in
//! the "Savings" category, and the goal only moves when that expense goes
//! through.

use chrono::{Local, NaiveDate};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{info, warn};

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::category::SAVINGS_CATEGORY;
use crate::models::{
    Account, Budget, BudgetUsage, FinancialGoal, GoalId, GoalProgress, Money, MonthPeriod,
    TransactionId,
};

/// A budget that needs attention this month
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetAlert {
    /// Spending went past the limit
    OverBudget { category: String, over_by: Money },
    /// Spending reached the warning threshold
    Warning {
        category: String,
        usage_percentage: f64,
    },
}

impl BudgetAlert {
    pub fn category(&self) -> &str {
        match self {
            Self::OverBudget { category, .. } | Self::Warning { category, .. } => category,
        }
    }

    pub fn is_over_budget(&self) -> bool {
        matches!(self, Self::OverBudget { .. })
    }
}

impl fmt::Display for BudgetAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OverBudget { category, over_by } => {
                write!(f, "Over budget: {} exceeded its limit by {}", category, over_by)
            }
            Self::Warning {
                category,
                usage_percentage,
            } => write!(
                f,
                "Warning: {} has used {:.1}% of its monthly limit",
                category, usage_percentage
            ),
        }
    }
}

/// Budgets keyed by category plus goals in creation order
#[derive(Debug, Clone, Default)]
pub struct BudgetManager {
    budgets: BTreeMap<String, Budget>,
    goals: Vec<FinancialGoal>,
}

impl BudgetManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from persisted budgets and goals
    ///
    /// Later budgets for the same category replace earlier ones. Goals that
    /// fail validation or repeat a name make the whole ledger malformed.
    pub fn from_parts(budgets: Vec<Budget>, goals: Vec<FinancialGoal>) -> PocketbookResult<Self> {
        let mut manager = Self::new();

        for budget in budgets {
            budget.validate().map_err(|e| {
                PocketbookError::LedgerMalformed(format!("budget '{}': {}", budget.category, e))
            })?;
            manager.budgets.insert(budget.category.clone(), budget);
        }

        for goal in goals {
            goal.validate().map_err(|e| {
                PocketbookError::LedgerMalformed(format!("goal '{}': {}", goal.name, e))
            })?;
            if manager.goal(&goal.name).is_some() {
                return Err(PocketbookError::LedgerMalformed(format!(
                    "goal '{}' appears more than once",
                    goal.name
                )));
            }
            manager.goals.push(goal);
        }

        Ok(manager)
    }

    /// Budgets in category order
    pub fn budgets(&self) -> impl Iterator<Item = &Budget> {
        self.budgets.values()
    }

    pub fn budget(&self, category: &str) -> Option<&Budget> {
        self.budgets.get(category.trim())
    }

    /// Goals in creation order
    pub fn goals(&self) -> &[FinancialGoal] {
        &self.goals
    }

    /// Look up a goal by exact name
    pub fn goal(&self, name: &str) -> Option<&FinancialGoal> {
        self.goals.iter().find(|g| g.name == name)
    }

    pub fn goal_by_id(&self, id: GoalId) -> Option<&FinancialGoal> {
        self.goals.iter().find(|g| g.id == id)
    }

    /// Set the monthly limit for a category, replacing any existing budget
    pub fn add_budget(&mut self, category: &str, monthly_limit: Money) -> PocketbookResult<()> {
        let budget = Budget::new(category, monthly_limit)
            .map_err(|e| PocketbookError::Validation(e.to_string()))?;

        if self.budgets.contains_key(&budget.category) {
            info!(category = %budget.category, %monthly_limit, "replacing budget");
        } else {
            info!(category = %budget.category, %monthly_limit, "added budget");
        }

        self.budgets.insert(budget.category.clone(), budget);
        Ok(())
    }

    /// Create a goal whose target date is after today
    pub fn add_financial_goal(
        &mut self,
        name: &str,
        target_amount: Money,
        target_date: NaiveDate,
    ) -> PocketbookResult<GoalId> {
        self.add_financial_goal_on(name, target_amount, target_date, Local::now().date_naive())
    }

    /// Create a goal, judging the target date against `today`
    pub fn add_financial_goal_on(
        &mut self,
        name: &str,
        target_amount: Money,
        target_date: NaiveDate,
        today: NaiveDate,
    ) -> PocketbookResult<GoalId> {
        let goal = FinancialGoal::new(name, target_amount, target_date, today)
            .map_err(|e| PocketbookError::Validation(e.to_string()))?;

        if self.goal(&goal.name).is_some() {
            return Err(PocketbookError::Duplicate {
                entity_type: "Financial goal",
                identifier: goal.name,
            });
        }

        let id = goal.id;
        info!(%id, name = %goal.name, %target_amount, %target_date, "added financial goal");
        self.goals.push(goal);
        Ok(id)
    }

    /// Usage of every budget for `period`, in category order
    pub fn check_all_budgets(&self, account: &Account, period: MonthPeriod) -> Vec<BudgetUsage> {
        self.budgets
            .values()
            .map(|b| b.check_usage(account, period))
            .collect()
    }

    /// Budgets that are over their limit or near it
    ///
    /// A budget produces at most one alert; being over the limit wins over the
    /// warning.
    pub fn budget_alerts(&self, account: &Account, period: MonthPeriod) -> Vec<BudgetAlert> {
        self.check_all_budgets(account, period)
            .into_iter()
            .filter_map(|usage| {
                if usage.is_over_budget {
                    Some(BudgetAlert::OverBudget {
                        category: usage.category,
                        over_by: -usage.remaining,
                    })
                } else if usage.is_near_limit() {
                    Some(BudgetAlert::Warning {
                        category: usage.category,
                        usage_percentage: usage.usage_percentage,
                    })
                } else {
                    None
                }
            })
            .collect()
    }

    /// Move money from the account toward a goal
    ///
    /// Records an expense in the savings category and then credits the goal.
    /// If the expense is rejected neither side changes.
    pub fn save_for_goal(
        &mut self,
        goal_name: &str,
        amount: Money,
        account: &mut Account,
        description: Option<&str>,
    ) -> PocketbookResult<TransactionId> {
        let index = self
            .goals
            .iter()
            .position(|g| g.name == goal_name)
            .ok_or_else(|| {
                warn!(goal = goal_name, "save rejected: no such goal");
                PocketbookError::goal_not_found(goal_name)
            })?;

        // Checked here too so a bad amount never reaches the ledger
        if !amount.is_positive() {
            return Err(PocketbookError::Validation(
                "Savings amount must be greater than zero".into(),
            ));
        }

        let description = match description {
            Some(d) if !d.trim().is_empty() => d.to_string(),
            _ => format!("Savings for {}", goal_name),
        };

        let txn_id = account.add_expense(amount, &description, SAVINGS_CATEGORY)?;

        let goal = &mut self.goals[index];
        goal.add_savings(amount)
            .map_err(|e| PocketbookError::Validation(e.to_string()))?;

        info!(goal = goal_name, %amount, saved = %goal.saved_amount, "saved toward goal");
        Ok(txn_id)
    }

    /// Progress of every goal as of today, in creation order
    pub fn all_goals_progress(&self) -> Vec<GoalProgress> {
        self.all_goals_progress_on(Local::now().date_naive())
    }

    pub fn all_goals_progress_on(&self, today: NaiveDate) -> Vec<GoalProgress> {
        self.goals.iter().map(|g| g.progress_on(today)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountSnapshot, TransactionKind, TransactionRecord};
    use chrono::NaiveDateTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(10, 0, 0).unwrap()
    }

    fn account_with_expenses(expenses: &[(i64, &str)]) -> Account {
        let transactions = expenses
            .iter()
            .map(|(units, category)| TransactionRecord {
                id: TransactionId::new(),
                amount: Money::from_units(*units),
                description: String::new(),
                kind: TransactionKind::Expense,
                category: category.to_string(),
                timestamp: at(2025, 3, 10),
            })
            .collect();

        Account::from_snapshot(AccountSnapshot {
            owner_name: "Budi".into(),
            balance: Money::zero(),
            initial_balance: Money::from_units(10_000_000),
            created_at: at(2025, 1, 1),
            transactions,
        })
        .unwrap()
    }

    fn march() -> MonthPeriod {
        MonthPeriod::new(2025, 3).unwrap()
    }

    #[test]
    fn test_add_budget_validation_and_replace() {
        let mut manager = BudgetManager::new();

        assert!(manager.add_budget("Food", Money::zero()).unwrap_err().is_validation());
        assert!(manager.add_budget(" ", Money::from_units(1)).unwrap_err().is_validation());

        manager.add_budget("Food", Money::from_units(100)).unwrap();
        manager.add_budget("Food", Money::from_units(250)).unwrap();

        assert_eq!(manager.budgets().count(), 1);
        assert_eq!(manager.budget("Food").unwrap().monthly_limit, Money::from_units(250));
    }

    #[test]
    fn test_check_all_budgets_in_category_order() {
        let mut manager = BudgetManager::new();
        manager.add_budget("Transport", Money::from_units(50)).unwrap();
        manager.add_budget("Bills", Money::from_units(50)).unwrap();
        manager.add_budget("Food", Money::from_units(50)).unwrap();

        let account = account_with_expenses(&[]);
        let categories: Vec<String> = manager
            .check_all_budgets(&account, march())
            .into_iter()
            .map(|u| u.category)
            .collect();
        assert_eq!(categories, vec!["Bills", "Food", "Transport"]);
    }

    #[test]
    fn test_alert_thresholds() {
        let mut manager = BudgetManager::new();
        manager.add_budget("AtEighty", Money::from_units(1_000)).unwrap();
        manager.add_budget("Below", Money::from_units(1_000)).unwrap();
        manager.add_budget("Over", Money::from_units(1_000)).unwrap();
        manager.add_budget("Quiet", Money::from_units(1_000)).unwrap();

        let account = account_with_expenses(&[(800, "AtEighty"), (1_200, "Over"), (500, "Below")]);

        let alerts = manager.budget_alerts(&account, march());
        assert_eq!(
            alerts,
            vec![
                BudgetAlert::Warning {
                    category: "AtEighty".into(),
                    usage_percentage: 80.0,
                },
                BudgetAlert::OverBudget {
                    category: "Over".into(),
                    over_by: Money::from_units(200),
                },
            ]
        );
    }

    #[test]
    fn test_below_threshold_does_not_warn() {
        let mut manager = BudgetManager::new();
        manager.add_budget("Food", Money::from_units(1_000)).unwrap();

        let account = account_with_expenses(&[(799, "Food")]);

        assert_eq!(
            manager.check_all_budgets(&account, march())[0].usage_percentage,
            79.9
        );
        assert!(manager.budget_alerts(&account, march()).is_empty());
    }

    #[test]
    fn test_padded_category_matches_budget() {
        let mut manager = BudgetManager::new();
        manager.add_budget(" Food ", Money::from_units(1_000)).unwrap();

        let account = account_with_expenses(&[(300, " Food ")]);

        let usage = manager.check_all_budgets(&account, march());
        assert_eq!(usage[0].category, "Food");
        assert_eq!(usage[0].spent, Money::from_units(300));
        assert!(manager.budget(" Food ").is_some());
    }

    #[test]
    fn test_alert_display() {
        let over = BudgetAlert::OverBudget {
            category: "Food".into(),
            over_by: Money::from_units(20_000),
        };
        assert_eq!(
            over.to_string(),
            "Over budget: Food exceeded its limit by 20,000.00"
        );

        let warning = BudgetAlert::Warning {
            category: "Food".into(),
            usage_percentage: 85.0,
        };
        assert_eq!(
            warning.to_string(),
            "Warning: Food has used 85.0% of its monthly limit"
        );
    }

    #[test]
    fn test_goal_creation_rules() {
        let mut manager = BudgetManager::new();
        let today = date(2025, 1, 1);

        let id = manager
            .add_financial_goal_on("Laptop", Money::from_units(100), date(2025, 6, 1), today)
            .unwrap();
        assert_eq!(manager.goal("Laptop").unwrap().id, id);
        assert_eq!(manager.goal_by_id(id).unwrap().name, "Laptop");

        let dup = manager
            .add_financial_goal_on("Laptop", Money::from_units(5), date(2025, 7, 1), today)
            .unwrap_err();
        assert!(matches!(dup, PocketbookError::Duplicate { .. }));

        assert!(manager
            .add_financial_goal_on("Trip", Money::from_units(5), today, today)
            .unwrap_err()
            .is_validation());
        assert!(manager
            .add_financial_goal_on("Trip", Money::zero(), date(2025, 7, 1), today)
            .unwrap_err()
            .is_validation());

        assert_eq!(manager.goals().len(), 1);
    }

    #[test]
    fn test_save_for_goal_moves_money() {
        let mut manager = BudgetManager::new();
        let mut account = Account::new("Budi", Money::from_units(1_000_000)).unwrap();
        manager
            .add_financial_goal("Laptop", Money::from_units(8_000_000), date(2999, 12, 31))
            .unwrap();

        let txn_id = manager
            .save_for_goal("Laptop", Money::from_units(250_000), &mut account, None)
            .unwrap();

        assert_eq!(account.balance(), Money::from_units(750_000));
        assert_eq!(manager.goal("Laptop").unwrap().saved_amount, Money::from_units(250_000));

        let txn = account.find_transaction(txn_id).unwrap();
        assert_eq!(txn.category(), "Savings");
        assert_eq!(txn.description(), "Savings for Laptop");
        assert!(txn.is_expense());
    }

    #[test]
    fn test_save_for_goal_rejections_leave_state_untouched() {
        let mut manager = BudgetManager::new();
        let mut account = Account::new("Budi", Money::from_units(100)).unwrap();
        manager
            .add_financial_goal("Laptop", Money::from_units(8_000), date(2999, 12, 31))
            .unwrap();

        let err = manager
            .save_for_goal("Laptop", Money::from_units(500), &mut account, Some("too much"))
            .unwrap_err();
        assert!(err.is_insufficient_funds());

        let err = manager
            .save_for_goal("Phone", Money::from_units(5), &mut account, None)
            .unwrap_err();
        assert!(err.is_not_found());

        assert_eq!(account.balance(), Money::from_units(100));
        assert_eq!(account.transaction_count(), 0);
        assert_eq!(manager.goal("Laptop").unwrap().saved_amount, Money::zero());
    }

    #[test]
    fn test_all_goals_progress_in_creation_order() {
        let mut manager = BudgetManager::new();
        let today = date(2025, 1, 1);
        manager
            .add_financial_goal_on("Zebra", Money::from_units(10), date(2025, 2, 1), today)
            .unwrap();
        manager
            .add_financial_goal_on("Apple", Money::from_units(10), date(2025, 2, 1), today)
            .unwrap();

        let names: Vec<String> = manager
            .all_goals_progress_on(today)
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Zebra", "Apple"]);
    }

    #[test]
    fn test_from_parts_rejects_duplicate_goal_names() {
        let today = date(2025, 1, 1);
        let goal = FinancialGoal::new("Laptop", Money::from_units(10), date(2025, 2, 1), today)
            .unwrap();

        let result = BudgetManager::from_parts(Vec::new(), vec![goal.clone(), goal]);
        assert!(matches!(result, Err(PocketbookError::LedgerMalformed(_))));
    }
}
