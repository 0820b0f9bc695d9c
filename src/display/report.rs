//! Report formatting utilities for terminal output

/// Format a percentage with one decimal place
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Progress bar with the percentage after it, e.g. `[█████░░░░░] 50.0%`
///
/// The bar is clamped to its width; the percentage is shown as is.
pub fn format_progress_bar(pct: f64, width: usize) -> String {
    format!("[{}] {}", format_bar(pct, 100.0, width), format_percentage(pct))
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).floor() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
