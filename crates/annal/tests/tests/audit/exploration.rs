//! Exploration audits, including the polymorphic commit-log category that
//! dispatches on entity-id prefix.

use annal_types::{CommitCmd, EntityCategory, EntityRecord};
use annal_validator::{audit_record, AuditRegistry, ResolutionError};
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::json;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 6, 1, 0, 0, 0).unwrap()
}

fn record(id: &str, category: &str, commands: Vec<CommitCmd>) -> EntityRecord {
    EntityRecord::new(
        id,
        EntityCategory::new(category),
        clock() - Duration::days(365),
        clock() - Duration::days(1),
    )
    .with_commands(commands)
}

fn messages(id: &str, category: &str, commands: Vec<CommitCmd>) -> Vec<String> {
    audit_record(
        &AuditRegistry::with_defaults(),
        &record(id, category, commands),
        clock(),
    )
    .unwrap()
    .into_iter()
    .map(|finding| finding.error.message)
    .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn edit_state_property_missing_new_value() {
    assert_eq!(
        messages(
            "exp-1",
            "exploration",
            vec![CommitCmd::new()
                .with("cmd", "edit_state_property")
                .with("property_name", "content")
                .with("old_value", "old_value")]
        ),
        vec!["The following required attributes are missing: new_value, state_name"]
    );
}

#[test]
fn rename_state_with_extra_attribute() {
    assert_eq!(
        messages(
            "exp-1",
            "exploration",
            vec![CommitCmd::new()
                .with("cmd", "rename_state")
                .with("old_state_name", "old_state_name")
                .with("new_state_name", "new_state_name")
                .with("invalid", "invalid")]
        ),
        vec!["The following extra attributes are present: invalid"]
    );
}

#[test]
fn edit_exploration_property_with_invalid_property() {
    assert_eq!(
        messages(
            "exp-1",
            "exploration",
            vec![CommitCmd::new()
                .with("cmd", "edit_exploration_property")
                .with("property_name", "invalid")
                .with("old_value", "old_value")
                .with("new_value", "new_value")]
        ),
        vec![
            "Value for property_name in cmd edit_exploration_property: invalid is not allowed"
        ]
    );
}

#[test]
fn old_value_is_optional_on_state_edits() {
    let found = messages(
        "exp-1",
        "exploration",
        vec![CommitCmd::new()
            .with("cmd", "edit_state_property")
            .with("state_name", "Introduction")
            .with("property_name", "content")
            .with("new_value", json!({"html": "<p>hello</p>"}))],
    );
    assert!(found.is_empty(), "unexpected findings: {:?}", found);
}

#[test]
fn commit_log_routes_rights_ids_to_the_rights_domain() {
    // change_role belongs to the rights schema set only; a rights-prefixed
    // id must resolve there.
    let found = messages(
        "rights-exp1-2",
        "exploration_commit_log",
        vec![CommitCmd::new()
            .with("cmd", "change_role")
            .with("assignee_id", "user-1")
            .with("old_role", "viewer")
            .with("new_role", "editor")],
    );
    assert!(found.is_empty(), "unexpected findings: {:?}", found);
}

#[test]
fn commit_log_routes_content_ids_to_the_content_domain() {
    assert_eq!(
        messages(
            "exploration-exp1-2",
            "exploration_commit_log",
            vec![CommitCmd::new()
                .with("cmd", "change_role")
                .with("assignee_id", "user-1")
                .with("old_role", "viewer")
                .with("new_role", "editor")]
        ),
        vec!["Command change_role is not allowed"]
    );
}

#[test]
fn rights_role_values_are_enumerated() {
    assert_eq!(
        messages(
            "rights-exp1-2",
            "exploration_commit_log",
            vec![CommitCmd::new()
                .with("cmd", "change_role")
                .with("assignee_id", "user-1")
                .with("old_role", "viewer")
                .with("new_role", "superuser")]
        ),
        vec!["Value for new_role in cmd change_role: superuser is not allowed"]
    );
}

#[test]
fn unmatched_commit_log_prefix_fails_resolution() {
    let error = audit_record(
        &AuditRegistry::with_defaults(),
        &record("bogus-1", "exploration_commit_log", vec![]),
        clock(),
    )
    .unwrap_err();
    assert_eq!(
        error,
        ResolutionError::UnmatchedIdPrefix {
            category: EntityCategory::new("exploration_commit_log"),
            entity_id: "bogus-1".to_string(),
        }
    );
}
