//! Budget and goal display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{BudgetUsage, GoalProgress};
use crate::services::BudgetAlert;

use super::report::format_progress_bar;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Usage")]
    usage: String,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "Goal")]
    name: String,
    #[tabled(rename = "Saved")]
    saved: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Days Left")]
    days: i64,
    #[tabled(rename = "Per Day")]
    per_day: String,
}

fn usage_status(usage: &BudgetUsage) -> &'static str {
    if usage.is_over_budget {
        "OVER"
    } else if usage.is_near_limit() {
        "Warning"
    } else {
        "OK"
    }
}

/// Format budget usage for one month
pub fn format_budget_usage(usages: &[BudgetUsage], settings: &Settings) -> String {
    if usages.is_empty() {
        return "No budgets set. Use 'pocketbook budget set <CATEGORY> <LIMIT>'.".to_string();
    }

    let rows: Vec<BudgetRow> = usages
        .iter()
        .map(|u| BudgetRow {
            category: u.category.clone(),
            limit: settings.format_money(u.limit),
            spent: settings.format_money(u.spent),
            remaining: settings.format_money(u.remaining),
            usage: format_progress_bar(u.usage_percentage, 10),
            status: usage_status(u).to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Format budget alerts one per line
pub fn format_alerts(alerts: &[BudgetAlert]) -> String {
    if alerts.is_empty() {
        return "All budgets are within their limits.".to_string();
    }

    alerts
        .iter()
        .map(|a| {
            let marker = if a.is_over_budget() { "!!" } else { " !" };
            format!("{} {}", marker, a)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format progress for every goal
pub fn format_goal_progress(goals: &[GoalProgress], settings: &Settings) -> String {
    if goals.is_empty() {
        return "No financial goals yet. Use 'pocketbook goal add'.".to_string();
    }

    let rows: Vec<GoalRow> = goals
        .iter()
        .map(|g| GoalRow {
            name: if g.is_achieved {
                format!("{} ✓", g.name)
            } else {
                g.name.clone()
            },
            saved: settings.format_money(g.saved_amount),
            target: settings.format_money(g.target_amount),
            progress: format_progress_bar(g.progress_percentage, 10),
            days: g.days_remaining,
            per_day: settings.format_money(g.daily_savings_needed),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GoalId, Money, MonthPeriod};

    fn usage(spent: i64, limit: i64) -> BudgetUsage {
        let spent = Money::from_units(spent);
        let limit = Money::from_units(limit);
        BudgetUsage {
            category: "Food".into(),
            period: MonthPeriod::new(2025, 3).unwrap(),
            limit,
            spent,
            remaining: limit - spent,
            usage_percentage: spent.as_f64() * 100.0 / limit.as_f64(),
            is_over_budget: spent > limit,
        }
    }

    #[test]
    fn test_usage_status() {
        assert_eq!(usage_status(&usage(10, 100)), "OK");
        assert_eq!(usage_status(&usage(80, 100)), "Warning");
        assert_eq!(usage_status(&usage(120, 100)), "OVER");
    }

    #[test]
    fn test_format_budget_usage() {
        let output = format_budget_usage(&[usage(80, 100)], &Settings::default());
        assert!(output.contains("Food"));
        assert!(output.contains("80.0%"));
        assert!(output.contains("Warning"));
    }

    #[test]
    fn test_format_alerts() {
        let alerts = vec![
            BudgetAlert::OverBudget {
                category: "Food".into(),
                over_by: Money::from_units(20),
            },
            BudgetAlert::Warning {
                category: "Bills".into(),
                usage_percentage: 90.0,
            },
        ];
        let output = format_alerts(&alerts);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("!! Over budget: Food"));
        assert!(lines[1].contains("90.0%"));

        assert_eq!(format_alerts(&[]), "All budgets are within their limits.");
    }

    #[test]
    fn test_format_goal_progress() {
        let progress = GoalProgress {
            goal_id: GoalId::new(),
            name: "Laptop".into(),
            target_amount: Money::from_units(1_000),
            saved_amount: Money::from_units(250),
            remaining_amount: Money::from_units(750),
            progress_percentage: 25.0,
            days_remaining: 30,
            daily_savings_needed: Money::from_units(25),
            is_achieved: false,
        };

        let output = format_goal_progress(&[progress], &Settings::default());
        assert!(output.contains("Laptop"));
        assert!(output.contains("25.0%"));
        assert!(output.contains("Rp 25.00"));
    }
}
