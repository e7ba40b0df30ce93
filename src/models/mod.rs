//! Core data models for the expense tracker

pub mod expense;
pub mod money;

pub use expense::{Expense, ExpenseId, ExpenseValidationError};
pub use money::{Money, MoneyParseError};
