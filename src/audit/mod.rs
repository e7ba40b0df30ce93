//! Audit trail for the expense tracker
//!
//! Records every create, update, and delete with before/after snapshots in an
//! append-only, line-delimited JSON log.
//!
//! - `AuditEntry`: one logged operation with timestamp, expense id, and
//!   optional before/after values.
//! - `AuditLogger`: appends entries to `audit.log` and reads them back.
//! - `generate_diff`: field-level summary of what an update changed.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
