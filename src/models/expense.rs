//! Expense model
//!
//! A single recorded expense with a store-assigned numeric ID and
//! creation/modification timestamps.

use chrono::{DateTime, Datelike, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Numeric expense identifier, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u32);

impl ExpenseId {
    /// The lowest ID a store ever hands out
    pub const FIRST: ExpenseId = ExpenseId(1);

    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn get(&self) -> u32 {
        self.0
    }

    /// The ID after this one
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A recorded expense
///
/// Field order here is the field order in `expenses.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier within the store
    pub id: ExpenseId,

    /// What the money was spent on
    pub description: String,

    /// Amount spent, always positive
    pub amount: Money,

    /// When the expense was recorded; never changes
    pub created_at: DateTime<Utc>,

    /// When the description or amount last changed
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense stamped with the current time
    pub fn new(id: ExpenseId, description: impl Into<String>, amount: Money) -> Self {
        Self::with_timestamp(id, description, amount, Utc::now())
    }

    /// Create a new expense with an explicit creation time
    pub fn with_timestamp(
        id: ExpenseId,
        description: impl Into<String>,
        amount: Money,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            created_at,
            updated_at: created_at,
        }
    }

    /// Replace the description and refresh `updated_at`
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        self.updated_at = Utc::now();
    }

    /// Replace the amount and refresh `updated_at`
    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
        self.updated_at = Utc::now();
    }

    /// Calendar month (1-12) of the creation time, in local time
    pub fn created_month(&self) -> u32 {
        self.created_at.with_timezone(&Local).month()
    }

    /// Calendar year of the creation time, in local time
    pub fn created_year(&self) -> i32 {
        self.created_at.with_timezone(&Local).year()
    }

    /// Validate the expense before it is stored
    ///
    /// Amounts are checked when parsed, before the store is read; this
    /// covers what can only be checked on the record itself.
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} ({})", self.id, self.description, self.amount)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "description must not be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_expense() {
        let expense = Expense::new(ExpenseId::FIRST, "Coffee", Money::from_cents(350));
        assert_eq!(expense.id.get(), 1);
        assert_eq!(expense.description, "Coffee");
        assert_eq!(expense.created_at, expense.updated_at);
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_setters_refresh_updated_at_only() {
        let created = Utc.with_ymd_and_hms(2024, 4, 15, 12, 0, 0).unwrap();
        let mut expense =
            Expense::with_timestamp(ExpenseId::new(3), "Lunch", Money::from_cents(1200), created);

        expense.set_description("Dinner");
        assert_eq!(expense.description, "Dinner");
        assert_eq!(expense.created_at, created);
        assert!(expense.updated_at > created);

        expense.set_amount(Money::from_cents(2500));
        assert_eq!(expense.amount.cents(), 2500);
        assert_eq!(expense.created_at, created);
    }

    #[test]
    fn test_validation() {
        let mut expense = Expense::new(ExpenseId::FIRST, "  ", Money::from_cents(100));
        assert_eq!(
            expense.validate(),
            Err(ExpenseValidationError::EmptyDescription)
        );

        expense.set_description("Taxi");
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_created_month_mid_month() {
        let created = Utc.with_ymd_and_hms(2023, 4, 15, 12, 0, 0).unwrap();
        let expense =
            Expense::with_timestamp(ExpenseId::FIRST, "Rent", Money::from_cents(100), created);
        assert_eq!(expense.created_month(), 4);
        assert_eq!(expense.created_year(), 2023);
    }

    #[test]
    fn test_json_field_names() {
        let created = Utc.with_ymd_and_hms(2024, 4, 15, 12, 0, 0).unwrap();
        let expense =
            Expense::with_timestamp(ExpenseId::new(2), "Coffee", Money::from_cents(350), created);

        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["id"], 2);
        assert_eq!(json["description"], "Coffee");
        assert_eq!(json["amount"], 3.5);
        assert!(json["createdAt"].as_str().unwrap().starts_with("2024-04-15T12:00:00"));
        assert!(json["updatedAt"].is_string());
    }

    #[test]
    fn test_reads_iso_strings_with_millis() {
        let json = r#"{
            "id": 1,
            "description": "Book",
            "amount": 20,
            "createdAt": "2024-04-02T09:30:00.123Z",
            "updatedAt": "2024-04-03T10:00:00.000Z"
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.amount.cents(), 2000);
        assert_eq!(expense.created_at.month(), 4);
    }

    #[test]
    fn test_id_next() {
        assert_eq!(ExpenseId::FIRST.next(), ExpenseId::new(2));
    }
}
