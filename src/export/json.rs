//! JSON Export functionality

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Export expenses as a pretty-printed JSON array, matching the store format
pub fn export_expenses_json<W: Write>(expenses: &[Expense], mut writer: W) -> ExpenseResult<()> {
    serde_json::to_writer_pretty(&mut writer, expenses)
        .map_err(|e| ExpenseError::Export(format!("Failed to serialize expenses: {}", e)))?;
    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;
    writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    Ok(())
}
