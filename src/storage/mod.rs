//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic writes and the audit trail that
//! records every mutation.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};

use serde::Serialize;
use tracing::warn;

use crate::audit::{generate_diff, AuditEntry, AuditLogger};
use crate::config::{paths::ExpensePaths, settings::Settings};
use crate::error::ExpenseError;

/// Main storage coordinator
pub struct Storage {
    pub expenses: ExpenseRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance
    ///
    /// Nothing is created on disk here; directories appear with the first
    /// write that needs them.
    pub fn new(paths: ExpensePaths, settings: &Settings) -> Result<Self, ExpenseError> {
        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            audit,
        })
    }

    /// The audit logger, when auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Record a create in the audit log
    pub fn log_create<T: Serialize>(&self, entity_id: String, entity_name: Option<String>, entity: &T) {
        self.write_audit(AuditEntry::create(entity_id, entity_name, entity));
    }

    /// Record an update in the audit log, with a field-level diff
    pub fn log_update<T: Serialize>(
        &self,
        entity_id: String,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) {
        let diff = match (serde_json::to_value(before), serde_json::to_value(after)) {
            (Ok(b), Ok(a)) => generate_diff(&b, &a),
            _ => None,
        };
        self.write_audit(AuditEntry::update(entity_id, entity_name, before, after, diff));
    }

    /// Record a delete in the audit log
    pub fn log_delete<T: Serialize>(&self, entity_id: String, entity_name: Option<String>, entity: &T) {
        self.write_audit(AuditEntry::delete(entity_id, entity_name, entity));
    }

    fn write_audit(&self, entry: AuditEntry) {
        let Some(logger) = &self.audit else {
            return;
        };

        // The mutation is already saved; a broken audit log must not undo it
        if let Err(e) = logger.log(&entry) {
            warn!(error = %e, operation = %entry.operation, "failed to write audit entry");
        }
    }
}
