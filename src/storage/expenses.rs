//! Expense repository for JSON storage
//!
//! Manages loading and saving the expense list to expenses.json. The file is
//! a bare JSON array; every save rewrites it whole.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::ExpenseError;
use crate::models::Expense;

use super::file_io::{read_json, write_json_atomic};

/// Repository for expense persistence
///
/// Holds no records between calls; each operation reads the file fresh.
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    /// Create a new expense repository backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load expenses from disk
    ///
    /// A missing or blank file is an empty store. Unparseable content is a
    /// [`ExpenseError::StorageRead`].
    pub fn load(&self) -> Result<Vec<Expense>, ExpenseError> {
        let expenses: Vec<Expense> = read_json(&self.path)?;
        debug!(path = %self.path.display(), count = expenses.len(), "loaded expenses");
        Ok(expenses)
    }

    /// Load expenses, treating an unreadable file as an empty store
    ///
    /// The read failure is logged, not returned. The next save overwrites the
    /// unreadable content.
    pub fn load_or_empty(&self) -> Result<Vec<Expense>, ExpenseError> {
        match self.load() {
            Ok(expenses) => Ok(expenses),
            Err(ExpenseError::StorageRead(reason)) => {
                warn!(
                    path = %self.path.display(),
                    %reason,
                    "something went wrong while reading expenses file; using an empty list"
                );
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Overwrite the file with the given expenses, in order
    pub fn save(&self, expenses: &[Expense]) -> Result<(), ExpenseError> {
        write_json_atomic(&self.path, expenses)?;
        debug!(path = %self.path.display(), count = expenses.len(), "saved expenses");
        Ok(())
    }
}
