//! Monthly and per-category report formatting

use std::collections::BTreeMap;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{CategoryTotals, Money, MonthlySummary};

use super::report::{format_bar, separator};

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expense")]
    expense: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Share of spending")]
    share: String,
}

/// Format a monthly income/expense summary
pub fn format_monthly_summary(summary: &MonthlySummary, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Monthly Report: {}\n", summary.period.label()));
    output.push_str(&separator(40));
    output.push('\n');
    output.push_str(&format!(
        "  Income:        {}\n",
        settings.format_money(summary.total_income)
    ));
    output.push_str(&format!(
        "  Expense:       {}\n",
        settings.format_money(summary.total_expense)
    ));
    output.push_str(&format!(
        "  Net:           {}\n",
        settings.format_money(summary.net_income)
    ));
    output.push_str(&format!(
        "  Transactions:  {}\n",
        summary.transaction_count
    ));

    output
}

/// Format per-category totals with a bar for each category's share of spending
pub fn format_category_summary(
    summary: &BTreeMap<String, CategoryTotals>,
    settings: &Settings,
) -> String {
    if summary.is_empty() {
        return "No transactions recorded yet.".to_string();
    }

    let total_expense: Money = summary.values().map(|t| t.expense).sum();

    let rows: Vec<CategoryRow> = summary
        .iter()
        .map(|(category, totals)| CategoryRow {
            category: category.clone(),
            income: settings.format_money(totals.income),
            expense: settings.format_money(totals.expense),
            count: totals.count,
            share: format_bar(
                totals.expense.as_f64(),
                total_expense.as_f64(),
                15,
            ),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}
