//! Annal domain types
//!
//! Value types shared by the schema and validator crates:
//!
//! - [`EntityCategory`] — names the entity family a record belongs to
//! - [`EntityRecord`] — immutable snapshot of a versioned entity
//! - [`CommitCmd`] — one recorded change command, a `cmd`-keyed attribute map
//! - [`ValidationError`] — a single violation found while auditing a record
//!
//! Everything here is plain data: no I/O, no interior mutability. Records
//! are produced by the persistence layer and only ever read by the engine.

#![deny(unsafe_code)]

pub mod category;
pub mod error;
pub mod record;

pub use category::EntityCategory;
pub use error::ValidationError;
pub use record::{CommitCmd, EntityRecord, CMD_KEY};
