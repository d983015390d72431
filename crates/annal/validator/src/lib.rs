//! Annal audit engine
//!
//! Validates the commit-command history attached to versioned entity
//! snapshots:
//!
//! - [`ChangeDomainResolver`] — picks the schema set governing a record,
//!   by category or by entity-id prefix for polymorphic categories
//! - [`validate_commit_cmds`] — checks each command against the resolved
//!   schema set, emitting one [`ValidationError`] per offending command
//! - [`ModelAuditOptions`] / [`audit_model`] — record-level audits
//!   (id shape, timestamps, stale deletion, commit status)
//! - [`AuditRegistry`] — explicit startup-built category → resolver map
//! - [`audit_record`] / [`audit_batch`] — per-record and batch drivers that
//!   wrap violations into record-tagged [`AuditFinding`]s
//!
//! Every step is a pure, synchronous computation over already-materialized
//! data. Records validate independently: the registry and schema sets are
//! read-only after startup, so any number of workers can audit records
//! concurrently without locking, and a [`ResolutionError`] on one record
//! never disturbs the others.
//!
//! [`ValidationError`]: annal_types::ValidationError

#![deny(unsafe_code)]

pub mod commit_cmds;
pub mod error;
pub mod model_audits;
pub mod registry;
pub mod report;
pub mod resolver;

pub use commit_cmds::validate_commit_cmds;
pub use error::ResolutionError;
pub use model_audits::{audit_model, ModelAuditOptions};
pub use registry::{AuditEntry, AuditRegistry};
pub use report::{audit_batch, audit_record, AuditFinding, AuditReport, ResolutionFailure};
pub use resolver::ChangeDomainResolver;
