//! Commit-command schema validation
//!
//! The message text emitted here is part of the external contract:
//! downstream consumers match on it literally, including punctuation and
//! the ordering of joined attribute lists.

use annal_schema::{CommandSchema, SchemaSet};
use annal_types::{CommitCmd, EntityRecord, ValidationError};
use serde_json::Value;
use std::collections::BTreeSet;

/// Validate every command in a record against the resolved schema set.
///
/// Commands are checked independently, in sequence order; each offending
/// command contributes exactly one error. Empty commands are skipped.
pub fn validate_commit_cmds(record: &EntityRecord, schemas: &SchemaSet) -> Vec<ValidationError> {
    record
        .commands
        .iter()
        .filter_map(|cmd| validate_cmd(cmd, schemas))
        .collect()
}

/// Checks run cheapest-first: key presence, then command lookup, then
/// structure, then enumerated values. A command failing an earlier check
/// is not also reported against a later, less fundamental one.
fn validate_cmd(cmd: &CommitCmd, schemas: &SchemaSet) -> Option<ValidationError> {
    if cmd.is_empty() {
        return None;
    }

    let name = match cmd.cmd() {
        None => {
            return Some(ValidationError::for_cmd(cmd, "Missing cmd key in change dict"));
        }
        Some(Value::String(name)) => name.as_str(),
        Some(other) => {
            return Some(ValidationError::for_cmd(
                cmd,
                format!("Command {} is not allowed", value_literal(other)),
            ));
        }
    };

    let Some(schema) = schemas.lookup(name) else {
        return Some(ValidationError::for_cmd(
            cmd,
            format!("Command {} is not allowed", name),
        ));
    };

    if let Some(error) = check_structure(cmd, schema) {
        return Some(error);
    }
    check_values(cmd, schema, name)
}

fn check_structure(cmd: &CommitCmd, schema: &CommandSchema) -> Option<ValidationError> {
    let present: BTreeSet<&str> = cmd.attribute_names().collect();

    // Both sources iterate in ascending order, so the joined lists come out
    // sorted without a separate sort step.
    let missing: Vec<&str> = schema
        .required()
        .iter()
        .map(String::as_str)
        .filter(|attr| !present.contains(attr))
        .collect();
    if !missing.is_empty() {
        return Some(ValidationError::for_cmd(
            cmd,
            format!(
                "The following required attributes are missing: {}",
                missing.join(", ")
            ),
        ));
    }

    let extra: Vec<&str> = present
        .iter()
        .copied()
        .filter(|attr| !schema.is_attribute_known(attr))
        .collect();
    if !extra.is_empty() {
        return Some(ValidationError::for_cmd(
            cmd,
            format!(
                "The following extra attributes are present: {}",
                extra.join(", ")
            ),
        ));
    }

    None
}

fn check_values(cmd: &CommitCmd, schema: &CommandSchema, name: &str) -> Option<ValidationError> {
    for (attr, allowed) in schema.allowed_values() {
        let Some(value) = cmd.get(attr) else { continue };
        let literal = value_literal(value);
        if !allowed.contains(&literal) {
            return Some(ValidationError::for_cmd(
                cmd,
                format!("Value for {} in cmd {}: {} is not allowed", attr, name, literal),
            ));
        }
    }
    None
}

/// String values appear verbatim in messages; anything else renders as
/// compact JSON.
fn value_literal(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
