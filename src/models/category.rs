//! Suggested categories
//!
//! Categories on transactions are free text. These lists only help with input:
//! they are offered by `pocketbook categories` and used to guess a category
//! from the description when none is given.

use super::transaction::TransactionKind;

/// Category used when saving toward a goal
pub const SAVINGS_CATEGORY: &str = "Savings";

/// Fallback when no keyword matches
pub const OTHER_CATEGORY: &str = "Other";

pub const DEFAULT_INCOME_CATEGORIES: &[&str] = &[
    "Salary",
    "Bonus",
    "Freelance",
    "Investment",
    "Gift",
    OTHER_CATEGORY,
];

pub const DEFAULT_EXPENSE_CATEGORIES: &[&str] = &[
    "Food & Drink",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Bills",
    "Health",
    "Education",
    "Investment",
    SAVINGS_CATEGORY,
    "Emergency",
    OTHER_CATEGORY,
];

const INCOME_KEYWORDS: &[(&str, &[&str])] = &[
    ("Salary", &["salary", "gaji", "upah", "payroll", "wage"]),
    ("Bonus", &["bonus", "tunjangan", "allowance"]),
    ("Freelance", &["freelance", "project", "kontrak", "contract", "invoice"]),
];

const EXPENSE_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Food & Drink",
        &["makan", "minum", "food", "lunch", "dinner", "restaurant", "cafe", "coffee"],
    ),
    (
        "Transportation",
        &["bensin", "fuel", "ojek", "grab", "gojek", "taxi", "parkir", "parking", "tol", "bus"],
    ),
    (
        "Shopping",
        &["beli", "belanja", "shopping", "baju", "clothes", "sepatu", "shoes"],
    ),
    (
        "Bills",
        &["listrik", "electric", "water", "internet", "pulsa", "phone", "tagihan", "bill", "rent"],
    ),
    (
        "Health",
        &["obat", "medicine", "dokter", "doctor", "hospital", "rumah sakit", "pharmacy"],
    ),
    (
        "Entertainment",
        &["bioskop", "cinema", "movie", "game", "karaoke", "concert", "hiburan"],
    ),
];

/// Default categories for a transaction kind
pub fn default_categories(kind: TransactionKind) -> &'static [&'static str] {
    match kind {
        TransactionKind::Income => DEFAULT_INCOME_CATEGORIES,
        TransactionKind::Expense => DEFAULT_EXPENSE_CATEGORIES,
    }
}

/// Guess a category from a free-text description
///
/// Matching is case-insensitive substring search; the first keyword group
/// that hits wins. Falls back to [`OTHER_CATEGORY`].
pub fn suggest_category(description: &str, kind: TransactionKind) -> &'static str {
    let description = description.to_lowercase();
    let table = match kind {
        TransactionKind::Income => INCOME_KEYWORDS,
        TransactionKind::Expense => EXPENSE_KEYWORDS,
    };

    table
        .iter()
        .find(|(_, words)| words.iter().any(|w| description.contains(w)))
        .map(|(category, _)| *category)
        .unwrap_or(OTHER_CATEGORY)
}
