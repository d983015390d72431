//! Annal command schemas
//!
//! Declarative rules for commit commands:
//!
//! - [`CommandSchema`] — required/optional attribute sets and enumerated
//!   value constraints for one command type
//! - [`SchemaSet`] — the full collection of schemas for one change domain,
//!   with read-only [`SchemaSet::lookup`]
//! - [`catalog`] — the built-in schema sets for the entity families the
//!   system ships with, expressed as configuration data
//!
//! Schema sets are fixed configuration: built once at process start and
//! never mutated afterwards, which makes them safe to share across any
//! number of audit workers.

#![deny(unsafe_code)]

pub mod catalog;
pub mod command_schema;
pub mod schema_set;

pub use command_schema::CommandSchema;
pub use schema_set::SchemaSet;
