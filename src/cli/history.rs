//! Audit history CLI command

use crate::display::format_history;
use crate::error::ExpenseResult;
use crate::storage::Storage;

/// Print the most recent audit entries, oldest first
pub fn handle_history_command(storage: &Storage, limit: usize) -> ExpenseResult<()> {
    let Some(logger) = storage.audit() else {
        println!("Audit logging is disabled (set \"audit_enabled\": true in config.json).");
        return Ok(());
    };

    let entries = logger.read_recent(limit)?;
    print!("{}", format_history(&entries));
    Ok(())
}
