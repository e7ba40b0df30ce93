//! Expense service
//!
//! The store operations: every call loads the expense file fresh, applies one
//! change or query in memory, and (for mutations) rewrites the whole file.

use tracing::{debug, info};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, Money, MoneyParseError};
use crate::storage::Storage;

const INVALID_AMOUNT: &str = "amount must be a positive number";

/// Parse and validate a user-supplied amount
///
/// Anything that isn't a number, isn't strictly greater than zero, or is
/// larger than [`Money::MAX`] is a validation error.
pub fn parse_amount(input: &str) -> ExpenseResult<Money> {
    match Money::parse(input) {
        Ok(amount) if amount.is_positive() => Ok(amount),
        Err(MoneyParseError::OutOfRange(_)) => Err(ExpenseError::Validation(format!(
            "amount must not exceed {}",
            Money::MAX
        ))),
        _ => Err(ExpenseError::Validation(INVALID_AMOUNT.into())),
    }
}

/// Check that a month number is a calendar month
pub fn validate_month(month: u32) -> ExpenseResult<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(ExpenseError::Validation(
            "month must be between 1 and 12".into(),
        ))
    }
}

/// Smallest positive ID not used by any expense
///
/// Probes upward from 1, so IDs freed by deletes are handed out again.
pub fn next_id(expenses: &[Expense]) -> ExpenseId {
    let mut candidate = ExpenseId::FIRST;
    while expenses.iter().any(|e| e.id == candidate) {
        candidate = candidate.next();
    }
    candidate
}

fn sum_amounts<'e>(expenses: impl IntoIterator<Item = &'e Expense>) -> ExpenseResult<Money> {
    Money::checked_sum(expenses.into_iter().map(|e| e.amount))
        .ok_or_else(|| ExpenseError::Validation("total is too large to compute".into()))
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Load all expenses; an unreadable file reads as empty
    pub fn load(&self) -> ExpenseResult<Vec<Expense>> {
        self.storage.expenses.load_or_empty()
    }

    /// Overwrite the store with `expenses`
    pub fn save(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        self.storage.expenses.save(expenses)
    }

    /// Record a new expense
    pub fn add(&self, description: &str, amount: &str) -> ExpenseResult<Expense> {
        let amount = parse_amount(amount)?;

        let mut expenses = self.load()?;
        let expense = Expense::new(next_id(&expenses), description, amount);
        expense.validate()?;

        expenses.push(expense.clone());
        self.save(&expenses)?;

        info!(id = %expense.id, amount = %expense.amount, "added expense");
        self.storage.log_create(
            expense.id.to_string(),
            Some(expense.description.clone()),
            &expense,
        );

        Ok(expense)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        Ok(self.load()?.into_iter().find(|e| e.id == id))
    }

    /// Remove an expense
    ///
    /// The store is rewritten whether or not the ID existed. Returns the
    /// removed expense, if any.
    pub fn delete(&self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        let mut expenses = self.load()?;

        let removed = expenses
            .iter()
            .position(|e| e.id == id)
            .map(|index| expenses.remove(index));

        self.save(&expenses)?;

        match &removed {
            Some(expense) => {
                info!(id = %id, "deleted expense");
                self.storage.log_delete(
                    expense.id.to_string(),
                    Some(expense.description.clone()),
                    expense,
                );
            }
            None => debug!(id = %id, "delete of unknown expense id"),
        }

        Ok(removed)
    }

    /// Replace an expense's description
    pub fn update_description(&self, id: ExpenseId, description: &str) -> ExpenseResult<Expense> {
        self.modify(id, |expense| {
            expense.set_description(description);
            Ok(expense.validate()?)
        })
    }

    /// Replace an expense's amount
    ///
    /// The amount is validated before the store is even read.
    pub fn update_amount(&self, id: ExpenseId, amount: &str) -> ExpenseResult<Expense> {
        let amount = parse_amount(amount)?;
        self.modify(id, |expense| {
            expense.set_amount(amount);
            Ok(())
        })
    }

    fn modify<F>(&self, id: ExpenseId, apply: F) -> ExpenseResult<Expense>
    where
        F: FnOnce(&mut Expense) -> ExpenseResult<()>,
    {
        let mut expenses = self.load()?;

        let expense = expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ExpenseError::expense_not_found(id))?;

        let before = expense.clone();
        apply(expense)?;
        let after = expense.clone();

        self.save(&expenses)?;

        info!(id = %id, "updated expense");
        self.storage.log_update(
            after.id.to_string(),
            Some(after.description.clone()),
            &before,
            &after,
        );

        Ok(after)
    }

    /// All expenses in stored order
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        self.load()
    }

    /// Sum of all expense amounts
    pub fn total(&self) -> ExpenseResult<Money> {
        sum_amounts(&self.load()?)
    }

    /// Sum of expenses created in `month` (1-12)
    ///
    /// Without `year`, matching months from every year are included.
    pub fn monthly_total(&self, month: u32, year: Option<i32>) -> ExpenseResult<Money> {
        validate_month(month)?;

        let expenses = self.load()?;
        sum_amounts(
            expenses
                .iter()
                .filter(|e| e.created_month() == month)
                .filter(|e| year.map_or(true, |y| e.created_year() == y)),
        )
    }
}
