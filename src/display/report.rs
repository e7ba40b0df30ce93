//! Summary and history formatting for terminal output

use std::fmt::Write;

use chrono::NaiveDate;

use crate::audit::AuditEntry;
use crate::config::Settings;
use crate::models::Money;

/// Format the all-time total
pub fn format_summary(total: Money, settings: &Settings) -> String {
    format!(
        "Total expenses: {}",
        total.format_with_symbol(&settings.currency_symbol)
    )
}

/// Format the total for one calendar month, optionally pinned to a year
pub fn format_monthly_summary(
    total: Money,
    month: u32,
    year: Option<i32>,
    settings: &Settings,
) -> String {
    let amount = total.format_with_symbol(&settings.currency_symbol);
    let month_name = month_name(month);

    match year {
        Some(year) => format!("Total expenses for {} {}: {}", month_name, year, amount),
        None => format!("Total expenses for {}: {}", month_name, amount),
    }
}

/// Format audit entries, one block per entry
pub fn format_history(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No history recorded.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&entry.format_human_readable());
        output.push('\n');
    }
    output
}

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

fn month_name(month: u32) -> String {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index as usize))
        .map(|name| name.to_string())
        .unwrap_or_else(|| month.to_string())
}

/// Format a date using the configured strftime pattern
///
/// An invalid pattern falls back to ISO `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate, settings: &Settings) -> String {
    let mut out = String::new();
    match write!(out, "{}", date.format(&settings.date_format)) {
        Ok(()) => out,
        Err(_) => date.format("%Y-%m-%d").to_string(),
    }
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_summary() {
        let settings = Settings::default();
        assert_eq!(
            format_summary(Money::from_cents(1250), &settings),
            "Total expenses: $12.50"
        );
    }

    #[test]
    fn test_format_monthly_summary() {
        let settings = Settings::default();
        assert_eq!(
            format_monthly_summary(Money::from_cents(300), 4, None, &settings),
            "Total expenses for April: $3.00"
        );
        assert_eq!(
            format_monthly_summary(Money::zero(), 12, Some(2024), &settings),
            "Total expenses for December 2024: $0.00"
        );
    }

    #[test]
    fn test_format_date_uses_settings() {
        let mut settings = Settings::default();
        let date = NaiveDate::from_ymd_opt(2024, 4, 5).unwrap();
        assert_eq!(format_date(date, &settings), "2024-04-05");

        settings.date_format = "%d/%m/%Y".into();
        assert_eq!(format_date(date, &settings), "05/04/2024");

        settings.date_format = "%Q".into();
        assert_eq!(format_date(date, &settings), "2024-04-05");
    }

    #[test]
    fn test_format_history() {
        assert!(format_history(&[]).contains("No history"));

        let entry = AuditEntry::create("1", Some("Coffee".into()), &json!({"id": 1}));
        let output = format_history(&[entry]);
        assert!(output.contains("CREATE Expense 1 (Coffee)"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Café au lait", 6), "Caf...");
    }
}
