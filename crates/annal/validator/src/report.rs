//! Error emission and batch reporting
//!
//! The adapter layer between the pure validators and the surrounding
//! batch pipeline: violations are wrapped with the identity of the record
//! they were found on, and resolution failures are surfaced distinctly
//! instead of being folded into the findings.

use crate::commit_cmds::validate_commit_cmds;
use crate::error::ResolutionError;
use crate::model_audits::audit_model;
use crate::registry::AuditRegistry;
use annal_types::{EntityCategory, EntityRecord, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A validation error tagged with the identity of the record it was found
/// on, so output can be routed or grouped without owning the record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuditFinding {
    pub record_id: String,
    pub category: EntityCategory,
    pub error: ValidationError,
}

impl AuditFinding {
    pub fn wrap(record: &EntityRecord, error: ValidationError) -> Self {
        Self {
            record_id: record.id.clone(),
            category: record.category.clone(),
            error,
        }
    }
}

/// A record whose change domain could not be resolved. Carried in the
/// report as data so the operator can investigate without re-running the
/// batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolutionFailure {
    pub record_id: String,
    pub category: EntityCategory,
    pub message: String,
}

impl ResolutionFailure {
    fn wrap(record: &EntityRecord, error: &ResolutionError) -> Self {
        Self {
            record_id: record.id.clone(),
            category: record.category.clone(),
            message: error.to_string(),
        }
    }
}

/// Accumulated output of one batch run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuditReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub records_audited: usize,
    pub findings: Vec<AuditFinding>,
    pub resolution_failures: Vec<ResolutionFailure>,
}

impl AuditReport {
    fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at,
            records_audited: 0,
            findings: Vec::new(),
            resolution_failures: Vec::new(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty() && self.resolution_failures.is_empty()
    }

    pub fn findings_for<'a>(&'a self, record_id: &'a str) -> impl Iterator<Item = &'a AuditFinding> + 'a {
        self.findings
            .iter()
            .filter(move |finding| finding.record_id == record_id)
    }

    pub fn findings_in<'a>(&'a self, category: &'a EntityCategory) -> impl Iterator<Item = &'a AuditFinding> + 'a {
        self.findings
            .iter()
            .filter(move |finding| finding.category == *category)
    }
}

/// Audit one record: record-level audits plus commit-command validation.
///
/// An unregistered category fails outright and produces no findings (the
/// fault is the operator's to investigate, not an authoring mistake to
/// report); so does an unmatched id prefix. Deleted records receive only
/// the stale-deletion audit and never need change-domain resolution.
pub fn audit_record(
    registry: &AuditRegistry,
    record: &EntityRecord,
    now: DateTime<Utc>,
) -> Result<Vec<AuditFinding>, ResolutionError> {
    let entry = registry.entry_for(&record.category)?;
    let mut errors = Vec::new();
    if record.deleted {
        errors.extend(audit_model(record, &entry.options, now));
    } else {
        let schemas = entry.resolver.resolve(record)?;
        errors.extend(audit_model(record, &entry.options, now));
        errors.extend(validate_commit_cmds(record, schemas));
    }
    Ok(errors
        .into_iter()
        .map(|error| AuditFinding::wrap(record, error))
        .collect())
}

/// Audit a batch of records, accumulating findings and resolution
/// failures into one report.
///
/// Records are independent: a resolution failure is logged and counted,
/// never aborting the rest of the batch. The audit clock is captured once
/// so every record in the run is judged against the same instant.
pub fn audit_batch(registry: &AuditRegistry, records: &[EntityRecord]) -> AuditReport {
    let now = Utc::now();
    let mut report = AuditReport::new(now);
    for record in records {
        report.records_audited += 1;
        match audit_record(registry, record, now) {
            Ok(findings) => report.findings.extend(findings),
            Err(error) => {
                tracing::warn!(
                    record_id = %record.id,
                    category = %record.category,
                    %error,
                    "failed to resolve change domain",
                );
                report.resolution_failures.push(ResolutionFailure::wrap(record, &error));
            }
        }
    }
    tracing::debug!(
        run_id = %report.run_id,
        records = report.records_audited,
        findings = report.findings.len(),
        resolution_failures = report.resolution_failures.len(),
        "audit batch complete",
    );
    report
}
