//! CLI command for data export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_expenses_csv, export_expenses_json};
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV, one row per expense
    Csv,
    /// JSON array in the store's own format
    Json,
}

/// Export every expense to `output`, or stdout when no path is given
pub fn handle_export_command(
    storage: &Storage,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> ExpenseResult<()> {
    let expenses = ExpenseService::new(storage).list()?;

    let writer: Box<dyn Write> = match &output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    match format {
        ExportFormat::Csv => export_expenses_csv(&expenses, writer)?,
        ExportFormat::Json => export_expenses_json(&expenses, writer)?,
    }

    if let Some(path) = output {
        println!("Exported {} expenses to: {}", expenses.len(), path.display());
    }

    Ok(())
}
