//! Path management for the expense tracker
//!
//! Provides XDG-compliant path resolution for the store, settings, and audit log.
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_TRACKER_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/expense-tracker` or `~/.config/expense-tracker`
//! 3. Windows: `%APPDATA%\expense-tracker`
//!
//! When none of these resolve but an explicit expenses file was given, the
//! file's own directory holds the settings and audit log.

use std::path::{Path, PathBuf};

use crate::error::ExpenseError;

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// Base directory for all expense tracker data
    base_dir: PathBuf,
    /// Explicit store location, overriding `<base>/expenses.json`
    expenses_file: Option<PathBuf>,
}

impl ExpensePaths {
    /// Create a new ExpensePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ExpenseError> {
        Self::resolve(None)
    }

    /// Resolve paths, optionally with an explicit expenses file
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined and no
    /// expenses file was given.
    pub fn resolve(expenses_file: Option<PathBuf>) -> Result<Self, ExpenseError> {
        let configured = match std::env::var("EXPENSE_TRACKER_DATA_DIR") {
            Ok(custom) => Ok(PathBuf::from(custom)),
            Err(_) => resolve_default_path(),
        };
        let paths = Self::with_base_dir(base_dir_or_file_parent(
            configured,
            expenses_file.as_deref(),
        )?);

        Ok(match expenses_file {
            Some(file) => paths.with_expenses_file(file),
            None => paths,
        })
    }

    /// Create ExpensePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            expenses_file: None,
        }
    }

    /// Point the store at an explicit file instead of `<base>/expenses.json`
    pub fn with_expenses_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.expenses_file = Some(path.into());
        self
    }

    /// Get the base directory (~/.config/expense-tracker/ or equivalent)
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.expenses_file
            .clone()
            .unwrap_or_else(|| self.base_dir.join("expenses.json"))
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create base directory: {}", e)))?;

        Ok(())
    }
}

fn base_dir_or_file_parent(
    configured: Result<PathBuf, ExpenseError>,
    expenses_file: Option<&Path>,
) -> Result<PathBuf, ExpenseError> {
    match (configured, expenses_file) {
        (Ok(base_dir), _) => Ok(base_dir),
        (Err(_), Some(file)) => Ok(file
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))),
        (Err(e), None) => Err(e),
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, ExpenseError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("expense-tracker"));
    }

    let home = std::env::var("HOME")
        .map_err(|_| ExpenseError::Config("HOME environment variable not set".into()))?;
    Ok(PathBuf::from(home).join(".config").join("expense-tracker"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, ExpenseError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| ExpenseError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("expense-tracker"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(
            paths.expenses_file(),
            temp_dir.path().join("expenses.json")
        );
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }

    #[test]
    fn test_explicit_expenses_file() {
        let temp_dir = TempDir::new().unwrap();
        let custom = temp_dir.path().join("elsewhere").join("mine.json");
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf())
            .with_expenses_file(&custom);

        assert_eq!(paths.expenses_file(), custom);
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var("EXPENSE_TRACKER_DATA_DIR", custom_path);

        let paths = ExpensePaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var("EXPENSE_TRACKER_DATA_DIR");
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_expenses_file_stands_in_for_missing_home() {
        let missing = || Err(ExpenseError::Config("HOME environment variable not set".into()));

        let base = base_dir_or_file_parent(missing(), Some(Path::new("/data/mine.json"))).unwrap();
        assert_eq!(base, PathBuf::from("/data"));

        let base = base_dir_or_file_parent(missing(), Some(Path::new("mine.json"))).unwrap();
        assert_eq!(base, PathBuf::from("."));

        let err = base_dir_or_file_parent(missing(), None).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));

        let base =
            base_dir_or_file_parent(Ok(PathBuf::from("/home/me")), Some(Path::new("/data/x.json")))
                .unwrap();
        assert_eq!(base, PathBuf::from("/home/me"));
    }
}
