//! Record-level audits
//!
//! Checks on the snapshot itself rather than its commit commands: id
//! shape, timestamp consistency, stale deletion markers, and commit-status
//! coherence. Deleted records receive only the stale-deletion audit;
//! everything else applies to live records.

use annal_types::{EntityRecord, ValidationError};
use chrono::{DateTime, Duration, Utc};
use regex::Regex;

/// Id pattern every stock entity id must match.
const DEFAULT_ID_PATTERN: &str = "^[A-Za-z0-9-_]{1,12}$";

/// Tolerated disagreement, in seconds, between the snapshot's clocks and
/// the audit clock.
const DEFAULT_MAX_CLOCK_SKEW_SECS: i64 = 1;

/// How long a model may stay marked as deleted before it counts as stale.
const DEFAULT_DELETION_RETENTION_WEEKS: i64 = 8;

/// Configuration for the record-level audits.
///
/// Built once at startup and shared read-only by every worker; there is no
/// runtime mutation.
#[derive(Clone, Debug)]
pub struct ModelAuditOptions {
    id_regex: Regex,
    max_clock_skew: Duration,
    deletion_retention: Duration,
}

impl ModelAuditOptions {
    /// Options with a custom id pattern and windows.
    pub fn new(
        id_pattern: &str,
        max_clock_skew: Duration,
        deletion_retention: Duration,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            id_regex: Regex::new(id_pattern)?,
            max_clock_skew,
            deletion_retention,
        })
    }

    /// Stock windows with a family-specific id pattern.
    pub fn with_id_pattern(id_pattern: &str) -> Result<Self, regex::Error> {
        Self::new(
            id_pattern,
            Duration::seconds(DEFAULT_MAX_CLOCK_SKEW_SECS),
            Duration::weeks(DEFAULT_DELETION_RETENTION_WEEKS),
        )
    }

    /// The stock configuration.
    pub fn standard() -> Self {
        Self::new(
            DEFAULT_ID_PATTERN,
            Duration::seconds(DEFAULT_MAX_CLOCK_SKEW_SECS),
            Duration::weeks(DEFAULT_DELETION_RETENTION_WEEKS),
        )
        .expect("built-in id pattern compiles")
    }

    pub fn id_pattern(&self) -> &str {
        self.id_regex.as_str()
    }
}

impl Default for ModelAuditOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Run the record-level audits against one snapshot.
///
/// `now` is the audit clock, captured once per batch so repeated runs over
/// the same input stay deterministic.
pub fn audit_model(
    record: &EntityRecord,
    options: &ModelAuditOptions,
    now: DateTime<Utc>,
) -> Vec<ValidationError> {
    if record.deleted {
        return audit_deleted_model(record, options, now);
    }

    let mut errors = Vec::new();

    if !options.id_regex.is_match(&record.id) {
        errors.push(ValidationError::for_record(format!(
            "entity id {} does not match the expected id pattern {}",
            record.id,
            options.id_regex.as_str()
        )));
    }

    if record.created_on > record.last_updated + options.max_clock_skew {
        errors.push(ValidationError::for_record(format!(
            "created_on {} is later than last_updated {}",
            record.created_on, record.last_updated
        )));
    }
    if record.last_updated - options.max_clock_skew > now {
        errors.push(ValidationError::for_record(format!(
            "last_updated {} is ahead of the audit clock {}",
            record.last_updated, now
        )));
    }

    if let (Some(status), Some(is_private)) =
        (record.post_commit_status.as_deref(), record.post_commit_is_private)
    {
        let expected_private = status == "private";
        if is_private != expected_private {
            errors.push(ValidationError::for_record(format!(
                "post_commit_is_private is {} but post_commit_status is {}",
                is_private, status
            )));
        }
    }

    errors
}

fn audit_deleted_model(
    record: &EntityRecord,
    options: &ModelAuditOptions,
    now: DateTime<Utc>,
) -> Vec<ValidationError> {
    if record.last_updated < now - options.deletion_retention {
        vec![ValidationError::for_record(
            "model marked as deleted has exceeded the deletion retention period".to_string(),
        )]
    } else {
        Vec::new()
    }
}
