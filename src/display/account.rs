//! Account and history display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{Account, Transaction};

use super::report::truncate;

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format the account overview shown by `status` and `account show`
pub fn format_account_details(account: &Account, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account: {}\n", account.owner_name()));
    output.push_str(&format!(
        "  Balance:          {}\n",
        settings.format_money(account.balance())
    ));
    output.push_str(&format!(
        "  Initial Balance:  {}\n",
        settings.format_money(account.initial_balance())
    ));
    output.push_str(&format!(
        "  Transactions:     {}\n",
        account.transaction_count()
    ));
    output.push_str(&format!(
        "  Created:          {}\n",
        account.created_at().format(&settings.date_format)
    ));

    output
}

/// Format transactions as a table, oldest first
pub fn format_history(transactions: &[&Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions found.".to_string();
    }

    let rows: Vec<HistoryRow> = transactions
        .iter()
        .map(|txn| HistoryRow {
            date: txn.timestamp().format(&settings.date_format).to_string(),
            kind: txn.kind().to_string(),
            category: truncate(txn.category(), 20),
            description: truncate(txn.description(), 32),
            amount: signed_with_symbol(txn, settings),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

fn signed_with_symbol(txn: &Transaction, settings: &Settings) -> String {
    let sign = if txn.is_income() { "+" } else { "-" };
    format!("{}{}", sign, settings.format_money(txn.amount()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_format_account_details() {
        let mut account = Account::new("Budi", Money::zero()).unwrap();
        account
            .add_income(Money::from_units(500_000), "salary", "Gaji")
            .unwrap();

        let output = format_account_details(&account, &Settings::default());
        assert!(output.contains("Account: Budi"));
        assert!(output.contains("Rp 500,000.00"));
        assert!(output.contains("Transactions:     1"));
    }

    #[test]
    fn test_format_history() {
        let mut account = Account::new("Budi", Money::zero()).unwrap();
        account
            .add_income(Money::from_units(500_000), "salary", "Gaji")
            .unwrap();
        account
            .add_expense(Money::from_units(200_000), "rent", "Tagihan")
            .unwrap();

        let txns: Vec<&Transaction> = account.history(None).iter().collect();
        let output = format_history(&txns, &Settings::default());

        assert!(output.contains("Description"));
        assert!(output.contains("+Rp 500,000.00"));
        assert!(output.contains("-Rp 200,000.00"));
        assert!(output.contains("Tagihan"));
    }

    #[test]
    fn test_format_empty_history() {
        assert_eq!(
            format_history(&[], &Settings::default()),
            "No transactions found."
        );
    }
}
