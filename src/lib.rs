//! Expense Tracker - personal expenses from the command line
//!
//! This library provides the core functionality for the `expense` binary:
//! a small store of expense records kept in one JSON file, plus the commands
//! that read and change it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Expense and money types
//! - `storage`: JSON file storage layer
//! - `services`: Store operations (add, update, delete, totals)
//! - `audit`: Audit logging of every change
//! - `display`: Terminal formatting
//! - `export`: CSV and JSON export
//! - `cli`: clap command definitions and handlers
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::config::{ExpensePaths, Settings};
//! use expense_tracker::services::ExpenseService;
//! use expense_tracker::storage::Storage;
//!
//! # fn main() -> Result<(), expense_tracker::ExpenseError> {
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//!
//! let service = ExpenseService::new(&storage);
//! service.add("Coffee", "3.50")?;
//! println!("{}", service.total()?);
//! # Ok(())
//! # }
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
