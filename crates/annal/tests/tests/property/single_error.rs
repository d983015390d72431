//! Property tests: the message contract holds for arbitrary inputs —
//! exactly one error per offending command, with the literal template for
//! its failure class.

use annal_schema::catalog;
use annal_types::{CommitCmd, EntityCategory, EntityRecord};
use annal_validator::validate_commit_cmds;
use chrono::{TimeZone, Utc};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

fn topic_record(commands: Vec<CommitCmd>) -> EntityRecord {
    let at = Utc.with_ymd_and_hms(2021, 3, 1, 0, 0, 0).unwrap();
    EntityRecord::new("topic-1", EntityCategory::new("topic"), at, at).with_commands(commands)
}

/// Attribute maps that never include the `cmd` key.
fn arb_cmdless_attrs() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[a-bd-z][a-z_]{0,11}", "[a-z0-9]{0,8}"), 1..5)
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Non-empty commands without a `cmd` key report the literal message.
    #[test]
    fn missing_cmd_key_message_is_literal(attrs in arb_cmdless_attrs()) {
        let mut cmd = CommitCmd::new();
        for (attr, value) in attrs {
            cmd = cmd.with(attr, value);
        }
        prop_assume!(cmd.cmd().is_none());
        let errors = validate_commit_cmds(&topic_record(vec![cmd]), &catalog::topic());
        prop_assert_eq!(errors.len(), 1);
        prop_assert_eq!(errors[0].message.as_str(), "Missing cmd key in change dict");
    }

    /// Command names outside the schema set report the name verbatim.
    #[test]
    fn unknown_command_message_names_the_command(name in "[a-z_]{1,20}") {
        let schemas = catalog::topic();
        prop_assume!(schemas.lookup(&name).is_none());
        let cmd = CommitCmd::new().with("cmd", name.as_str());
        let errors = validate_commit_cmds(&topic_record(vec![cmd]), &schemas);
        prop_assert_eq!(errors.len(), 1);
        prop_assert_eq!(
            errors[0].message.clone(),
            format!("Command {} is not allowed", name)
        );
    }

    /// Dropping any one required attribute from a valid command yields the
    /// missing-attributes message naming exactly the dropped attribute.
    #[test]
    fn dropping_a_required_attribute_is_reported(index in 0usize..4) {
        let required = ["new_value", "old_value", "property_name", "subtopic_id"];
        let dropped = required[index];
        let mut cmd = CommitCmd::new().with("cmd", "update_subtopic_property");
        for attr in required.iter().filter(|attr| **attr != dropped) {
            cmd = cmd.with(*attr, "title");
        }
        let errors = validate_commit_cmds(&topic_record(vec![cmd]), &catalog::topic());
        prop_assert_eq!(errors.len(), 1);
        prop_assert_eq!(
            errors[0].message.clone(),
            format!("The following required attributes are missing: {}", dropped)
        );
    }
}
