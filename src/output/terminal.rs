//! Terminal output utilities.
//!
//! Provides formatting helpers for the report table.

use colored::{ColoredString, Colorize};

/// Left-align a label in a column of `width` characters.
///
/// # Arguments
/// * `label` - The row label
/// * `width` - The minimum width of the column
pub fn pad_label(label: &str, width: usize) -> String {
    format!("{label:<width$}")
}

/// Format one `label value` row of the report table.
pub fn format_row<T: ToString>(label: &str, value: T, width: usize) -> String {
    format!("{} {}", pad_label(label, width).bold(), value.to_string())
}

/// Green `yes` or red `no`.
pub fn format_member(member: bool) -> ColoredString {
    if member {
        "yes".green()
    } else {
        "no".red()
    }
}
