//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, ID assignment, and aggregate queries.

pub mod expense;

pub use expense::{next_id, parse_amount, validate_month, ExpenseService};
