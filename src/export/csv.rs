//! CSV Export functionality

use std::io::Write;

use serde::Serialize;

use crate::error::ExpenseResult;
use crate::models::Expense;

/// One exported CSV row
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExpenseRow<'a> {
    id: u32,
    description: &'a str,
    amount: String,
    created_at: String,
    updated_at: String,
}

impl<'a> From<&'a Expense> for ExpenseRow<'a> {
    fn from(expense: &'a Expense) -> Self {
        Self {
            id: expense.id.get(),
            description: &expense.description,
            amount: expense.amount.format_with_symbol(""),
            created_at: expense.created_at.to_rfc3339(),
            updated_at: expense.updated_at.to_rfc3339(),
        }
    }
}

/// Export expenses to CSV with a header row
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    if expenses.is_empty() {
        csv_writer.write_record(["id", "description", "amount", "createdAt", "updatedAt"])?;
    }

    for expense in expenses {
        csv_writer.serialize(ExpenseRow::from(expense))?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_export_csv() {
        let created = Utc.with_ymd_and_hms(2024, 4, 15, 12, 0, 0).unwrap();
        let expenses = vec![
            Expense::with_timestamp(ExpenseId::new(1), "Coffee", Money::from_cents(350), created),
            Expense::with_timestamp(
                ExpenseId::new(2),
                "Dinner, with \"friends\"",
                Money::from_cents(4200),
                created,
            ),
        ];

        let mut buffer = Vec::new();
        export_expenses_csv(&expenses, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        let mut lines = output.lines();
        assert_eq!(
            lines.next(),
            Some("id,description,amount,createdAt,updatedAt")
        );
        assert_eq!(
            lines.next(),
            Some("1,Coffee,3.50,2024-04-15T12:00:00+00:00,2024-04-15T12:00:00+00:00")
        );
        assert!(lines
            .next()
            .unwrap()
            .starts_with("2,\"Dinner, with \"\"friends\"\"\",42.00,"));
    }

    #[test]
    fn test_export_large_amount_is_exact() {
        let created = Utc.with_ymd_and_hms(2024, 4, 15, 12, 0, 0).unwrap();
        let expenses = vec![Expense::with_timestamp(
            ExpenseId::new(1),
            "Car",
            Money::MAX,
            created,
        )];

        let mut buffer = Vec::new();
        export_expenses_csv(&expenses, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.contains("1,Car,9999999999999.99,"));
    }

    #[test]
    fn test_export_empty_has_header() {
        let mut buffer = Vec::new();
        export_expenses_csv(&[], &mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "id,description,amount,createdAt,updatedAt\n"
        );
    }
}
