//! Property tests: validating the same record twice produces identical,
//! order-stable error sequences.

use annal_schema::catalog;
use annal_types::{CommitCmd, EntityCategory, EntityRecord};
use annal_validator::validate_commit_cmds;
use chrono::{TimeZone, Utc};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

/// Command names spanning known, unknown, and base commands.
fn arb_cmd_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("add_subtopic".to_string()),
        Just("update_topic_property".to_string()),
        Just("delete_commit".to_string()),
        Just("invalid".to_string()),
        "[a-z_]{3,20}",
    ]
}

/// Attribute names biased towards the ones the topic schemas declare.
fn arb_attr_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("property_name".to_string()),
        Just("new_value".to_string()),
        Just("old_value".to_string()),
        Just("subtopic_id".to_string()),
        Just("title".to_string()),
        "[a-z_]{1,12}",
    ]
}

/// An arbitrary commit command: possibly missing `cmd`, possibly empty.
fn arb_commit_cmd() -> impl Strategy<Value = CommitCmd> {
    (
        proptest::option::of(arb_cmd_name()),
        prop::collection::vec((arb_attr_name(), "[a-z0-9 ]{0,10}"), 0..5),
    )
        .prop_map(|(cmd_name, attrs)| {
            let mut cmd = CommitCmd::new();
            if let Some(name) = cmd_name {
                cmd = cmd.with("cmd", name);
            }
            for (attr, value) in attrs {
                cmd = cmd.with(attr, value);
            }
            cmd
        })
}

fn arb_record() -> impl Strategy<Value = EntityRecord> {
    prop::collection::vec(arb_commit_cmd(), 0..8).prop_map(|commands| {
        let at = Utc.with_ymd_and_hms(2021, 3, 1, 0, 0, 0).unwrap();
        EntityRecord::new("topic-1", EntityCategory::new("topic"), at, at)
            .with_commands(commands)
    })
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Validation is a pure function of the record and schema set.
    #[test]
    fn validation_is_idempotent(record in arb_record()) {
        let schemas = catalog::topic();
        let first = validate_commit_cmds(&record, &schemas);
        let second = validate_commit_cmds(&record, &schemas);
        prop_assert_eq!(first, second);
    }

    /// Errors come out in command sequence order: every reported command
    /// appears in the record, and at most one error per command.
    #[test]
    fn at_most_one_error_per_command(record in arb_record()) {
        let schemas = catalog::topic();
        let errors = validate_commit_cmds(&record, &schemas);
        prop_assert!(errors.len() <= record.commands.len());
        for error in &errors {
            let offending = error.offending_cmd.as_ref().expect("command errors carry the command");
            prop_assert!(record.commands.contains(offending));
        }
    }

    /// Empty commands never produce errors.
    #[test]
    fn empty_commands_never_reported(padding in prop::collection::vec(arb_commit_cmd(), 0..4)) {
        let at = Utc.with_ymd_and_hms(2021, 3, 1, 0, 0, 0).unwrap();
        let mut commands = vec![CommitCmd::new()];
        commands.extend(padding);
        let record = EntityRecord::new("topic-1", EntityCategory::new("topic"), at, at)
            .with_commands(commands);
        let errors = validate_commit_cmds(&record, &catalog::topic());
        for error in &errors {
            prop_assert_ne!(error.offending_cmd.as_ref(), Some(&CommitCmd::new()));
        }
    }
}
