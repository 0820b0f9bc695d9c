//! The ledger document
//!
//! Everything Pocketbook persists lives in one JSON document: the account
//! snapshot, the budgets and the goals.

use serde::{Deserialize, Serialize};

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Account, AccountSnapshot, Budget, FinancialGoal, Money};
use crate::services::BudgetManager;

/// Current ledger file schema version
pub const SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// On-disk shape of `ledger.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerFile {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    pub account: AccountSnapshot,

    #[serde(default)]
    pub budgets: Vec<Budget>,

    #[serde(default)]
    pub goals: Vec<FinancialGoal>,
}

/// The live state behind one ledger file
#[derive(Debug, Clone)]
pub struct Ledger {
    pub account: Account,
    pub manager: BudgetManager,
}

impl Ledger {
    /// A fresh ledger with no transactions, budgets or goals
    pub fn open(owner_name: &str, initial_balance: Money) -> PocketbookResult<Self> {
        Ok(Self {
            account: Account::new(owner_name, initial_balance)?,
            manager: BudgetManager::new(),
        })
    }

    pub fn to_file(&self) -> LedgerFile {
        LedgerFile {
            schema_version: SCHEMA_VERSION,
            account: self.account.to_snapshot(),
            budgets: self.manager.budgets().cloned().collect(),
            goals: self.manager.goals().to_vec(),
        }
    }

    pub fn from_file(file: LedgerFile) -> PocketbookResult<Self> {
        if file.schema_version > SCHEMA_VERSION {
            return Err(PocketbookError::LedgerMalformed(format!(
                "schema version {} is newer than supported version {}",
                file.schema_version, SCHEMA_VERSION
            )));
        }

        Ok(Self {
            account: Account::from_snapshot(file.account)?,
            manager: BudgetManager::from_parts(file.budgets, file.goals)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_round_trip_through_file() {
        let mut ledger = Ledger::open("Budi", Money::from_units(50)).unwrap();
        ledger
            .account
            .add_income(Money::from_units(500_000), "salary", "Salary")
            .unwrap();
        ledger.manager.add_budget("Food", Money::from_units(100_000)).unwrap();
        ledger
            .manager
            .add_financial_goal(
                "Laptop",
                Money::from_units(8_000_000),
                NaiveDate::from_ymd_opt(2999, 1, 1).unwrap(),
            )
            .unwrap();
        ledger
            .manager
            .save_for_goal("Laptop", Money::from_units(1_000), &mut ledger.account, None)
            .unwrap();

        let json = serde_json::to_string(&ledger.to_file()).unwrap();
        let file: LedgerFile = serde_json::from_str(&json).unwrap();
        let restored = Ledger::from_file(file).unwrap();

        assert_eq!(restored.account.balance(), ledger.account.balance());
        assert_eq!(
            restored.account.history(None),
            ledger.account.history(None)
        );
        assert_eq!(
            restored.manager.budget("Food").unwrap().monthly_limit,
            Money::from_units(100_000)
        );
        assert_eq!(
            restored.manager.goal("Laptop").unwrap().saved_amount,
            Money::from_units(1_000)
        );
    }

    #[test]
    fn test_file_without_budgets_or_goals() {
        let json = r#"{
            "account": {
                "owner_name": "Budi",
                "balance": 0.0,
                "created_date": "2025-01-01T08:00:00",
                "transactions": []
            }
        }"#;
        let file: LedgerFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.schema_version, SCHEMA_VERSION);

        let ledger = Ledger::from_file(file).unwrap();
        assert_eq!(ledger.manager.budgets().count(), 0);
        assert!(ledger.manager.goals().is_empty());
    }

    #[test]
    fn test_newer_schema_is_rejected() {
        let mut file = Ledger::open("Budi", Money::zero()).unwrap().to_file();
        file.schema_version = SCHEMA_VERSION + 1;
        assert!(matches!(
            Ledger::from_file(file),
            Err(PocketbookError::LedgerMalformed(_))
        ));
    }
}
