//! CSV export
//!
//! Writes the transaction register (with a running balance) and the monthly
//! budget report as spreadsheet-friendly CSV.

use std::io::Write;

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Account, MonthPeriod};
use crate::services::BudgetManager;

fn csv_error(e: csv::Error) -> PocketbookError {
    PocketbookError::Export(e.to_string())
}

/// Export every transaction, oldest first
///
/// Columns: Date, Type, Category, Description, Amount, Balance. Amount carries
/// a sign (`+` income, `-` expense) and Balance is the balance after the row.
pub fn export_transactions_csv<W: Write>(
    account: &Account,
    date_format: &str,
    writer: W,
) -> PocketbookResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Date", "Type", "Category", "Description", "Amount", "Balance"])
        .map_err(csv_error)?;

    for line in account.running_balances() {
        let txn = line.transaction;
        csv_writer
            .write_record([
                txn.timestamp().format(date_format).to_string(),
                txn.kind().to_string(),
                txn.category().to_string(),
                txn.description().to_string(),
                format!("{:+.2}", txn.signed_amount().as_f64()),
                format!("{:.2}", line.balance.as_f64()),
            ])
            .map_err(csv_error)?;
    }

    csv_writer
        .flush()
        .map_err(|e| PocketbookError::Export(e.to_string()))?;
    Ok(())
}

/// Export budget usage for one month
pub fn export_budgets_csv<W: Write>(
    account: &Account,
    manager: &BudgetManager,
    period: MonthPeriod,
    writer: W,
) -> PocketbookResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "Month",
            "Category",
            "Limit",
            "Spent",
            "Remaining",
            "Usage %",
            "Over Budget",
        ])
        .map_err(csv_error)?;

    for usage in manager.check_all_budgets(account, period) {
        csv_writer
            .write_record([
                period.to_string(),
                usage.category.clone(),
                format!("{:.2}", usage.limit.as_f64()),
                format!("{:.2}", usage.spent.as_f64()),
                format!("{:.2}", usage.remaining.as_f64()),
                format!("{:.1}", usage.usage_percentage),
                usage.is_over_budget.to_string(),
            ])
            .map_err(csv_error)?;
    }

    csv_writer
        .flush()
        .map_err(|e| PocketbookError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountSnapshot, Money, TransactionId, TransactionKind, TransactionRecord};
    use chrono::NaiveDate;

    fn export_to_string(account: &Account) -> String {
        let mut buf = Vec::new();
        export_transactions_csv(account, "%d/%m/%Y %H:%M", &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_transactions_csv() {
        let mut account = Account::new("Budi", Money::from_units(100)).unwrap();
        account
            .add_income(Money::from_units(500_000), "salary", "Gaji")
            .unwrap();
        account
            .add_expense(Money::from_units(200_000), "rent, March", "Tagihan")
            .unwrap();

        let output = export_to_string(&account);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Date,Type,Category,Description,Amount,Balance");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].ends_with(",Income,Gaji,salary,+500000.00,500100.00"));
        assert!(lines[2].ends_with(",Expense,Tagihan,\"rent, March\",-200000.00,300100.00"));
    }

    #[test]
    fn test_empty_account_has_header_only() {
        let account = Account::new("Budi", Money::zero()).unwrap();
        assert_eq!(
            export_to_string(&account),
            "Date,Type,Category,Description,Amount,Balance\n"
        );
    }

    #[test]
    fn test_budgets_csv() {
        let lunch = NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        let account = Account::from_snapshot(AccountSnapshot {
            owner_name: "Budi".into(),
            balance: Money::from_units(920),
            initial_balance: Money::from_units(1_000),
            created_at: lunch,
            transactions: vec![TransactionRecord {
                id: TransactionId::new(),
                amount: Money::from_units(80),
                description: "lunch".into(),
                kind: TransactionKind::Expense,
                category: "Food".into(),
                timestamp: lunch,
            }],
        })
        .unwrap();

        let mut manager = BudgetManager::new();
        manager.add_budget("Food", Money::from_units(100)).unwrap();

        let mut buf = Vec::new();
        let march = MonthPeriod::new(2025, 3).unwrap();
        export_budgets_csv(&account, &manager, march, &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();

        let row = output.lines().nth(1).unwrap();
        assert_eq!(row, "2025-03,Food,100.00,80.00,20.00,80.0,false");
    }
}
