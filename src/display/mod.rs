//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses, summaries, and audit history
//! for terminal display.

pub mod expense;
pub mod report;

pub use expense::{format_expense_details, format_expense_list};
pub use report::{format_history, format_monthly_summary, format_summary};
