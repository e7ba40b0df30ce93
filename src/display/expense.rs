//! Expense display formatting
//!
//! Formats expenses for terminal output in table and detail views. Timestamps
//! are cut down to their date.

use crate::config::Settings;
use crate::models::{Expense, Money};

use super::report::{format_date, separator, truncate};

const DESCRIPTION_WIDTH: usize = 40;

/// Format a list of expenses as a table with a total row
pub fn format_expense_list(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let desc_width = expenses
        .iter()
        .map(|e| e.description.chars().count())
        .max()
        .unwrap_or(11)
        .clamp(11, DESCRIPTION_WIDTH);

    let date_width = expenses
        .iter()
        .map(|e| format_date(e.created_at.date_naive(), settings).len())
        .max()
        .unwrap_or(10)
        .max(10);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:<date_width$}  {:<date_width$}  {:<desc_width$}  {:>12}\n",
        "ID",
        "Date",
        "Updated",
        "Description",
        "Amount",
        date_width = date_width,
        desc_width = desc_width,
    ));

    let row_width = 4 + 2 + date_width + 2 + date_width + 2 + desc_width + 2 + 12;
    output.push_str(&separator(row_width));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format!(
            "{:>4}  {:<date_width$}  {:<date_width$}  {:<desc_width$}  {:>12}\n",
            expense.id,
            format_date(expense.created_at.date_naive(), settings),
            format_date(expense.updated_at.date_naive(), settings),
            truncate(&expense.description, desc_width),
            expense.amount.format_with_symbol(&settings.currency_symbol),
            date_width = date_width,
            desc_width = desc_width,
        ));
    }

    let total = match Money::checked_sum(expenses.iter().map(|e| e.amount)) {
        Some(total) => total.format_with_symbol(&settings.currency_symbol),
        None => "too large to display".to_string(),
    };
    output.push_str(&separator(row_width));
    output.push('\n');
    output.push_str(&format!(
        "{:>width$}\n",
        format!("Total: {}", total),
        width = row_width,
    ));

    output
}

/// Format a single expense in full
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("ID:          {}\n", expense.id));
    output.push_str(&format!("Description: {}\n", expense.description));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!(
        "Created At:  {}\n",
        format_date(expense.created_at.date_naive(), settings)
    ));
    output.push_str(&format!(
        "Updated At:  {}\n",
        format_date(expense.updated_at.date_naive(), settings)
    ));

    output
}
