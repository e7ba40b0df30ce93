//! Export module for the expense tracker
//!
//! - CSV: spreadsheet-compatible rows, one per expense
//! - JSON: the same array shape as `expenses.json`

pub mod csv;
pub mod json;

pub use self::csv::export_expenses_csv;
pub use self::json::export_expenses_json;
