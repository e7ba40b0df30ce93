//! Expense CLI commands
//!
//! Implements the record-keeping commands: add, update, delete, list, and
//! the summaries.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_list, format_monthly_summary, format_summary};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseId;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// Description of the expense
        #[arg(long)]
        description: String,
        /// Expense amount (e.g. 12.50)
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
    },

    /// Change the description of an expense
    UpdateDescription {
        /// Expense ID
        #[arg(long)]
        id: u32,
        /// New description
        #[arg(long)]
        description: String,
    },

    /// Change the amount of an expense
    UpdateAmount {
        /// Expense ID
        #[arg(long)]
        id: u32,
        /// New amount
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        #[arg(long)]
        id: u32,
    },

    /// List all expenses
    #[command(alias = "ls")]
    List,

    /// Show a single expense
    Show {
        /// Expense ID
        #[arg(long)]
        id: u32,
    },

    /// Show the total of all expenses
    Summary,

    /// Show the total of expenses created in a given month
    SummaryMonth {
        /// Month number (1-12)
        #[arg(long)]
        month: u32,
        /// Only count expenses from this year
        #[arg(long)]
        year: Option<i32>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
        } => {
            let expense = service.add(&description, &amount)?;
            println!(
                "Added expense #{}: {} with amount {}",
                expense.id,
                expense.description,
                expense.amount.format_with_symbol(&settings.currency_symbol)
            );
        }

        ExpenseCommands::UpdateDescription { id, description } => {
            let expense = service.update_description(ExpenseId::new(id), &description)?;
            println!(
                "Updated expense #{} description to: {}",
                expense.id, expense.description
            );
        }

        ExpenseCommands::UpdateAmount { id, amount } => {
            let expense = service.update_amount(ExpenseId::new(id), &amount)?;
            println!(
                "Updated expense #{} amount to: {}",
                expense.id,
                expense.amount.format_with_symbol(&settings.currency_symbol)
            );
        }

        ExpenseCommands::Delete { id } => match service.delete(ExpenseId::new(id))? {
            Some(expense) => println!("Deleted expense #{}: {}", expense.id, expense.description),
            None => println!("No expense with ID {}; nothing deleted.", id),
        },

        ExpenseCommands::List => {
            let expenses = service.list()?;
            print!("{}", format_expense_list(&expenses, settings));
        }

        ExpenseCommands::Show { id } => {
            let expense = service
                .get(ExpenseId::new(id))?
                .ok_or_else(|| ExpenseError::expense_not_found(id))?;
            print!("{}", format_expense_details(&expense, settings));
        }

        ExpenseCommands::Summary => {
            let total = service.total()?;
            println!("{}", format_summary(total, settings));
        }

        ExpenseCommands::SummaryMonth { month, year } => {
            let total = service.monthly_total(month, year)?;
            println!("{}", format_monthly_summary(total, month, year, settings));
        }
    }

    Ok(())
}
