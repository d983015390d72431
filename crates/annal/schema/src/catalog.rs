//! Built-in schema sets
//!
//! Configuration data for the entity families the system ships with. The
//! engine never depends on this module; it exists for embedders who want
//! the stock rules and for the test suites that exercise them.

use crate::{CommandSchema, SchemaSet};

/// Command recorded when a commit is hard-deleted.
pub const CMD_DELETE_COMMIT: &str = "delete_commit";
/// Command recorded when an entity is reverted to an earlier version.
pub const CMD_REVERT_COMMIT: &str = "AUTO_revert_version_number";

/// Commands every versioned entity records regardless of family.
fn base_version_commands() -> Vec<CommandSchema> {
    vec![
        CommandSchema::new(CMD_DELETE_COMMIT),
        CommandSchema::new(CMD_REVERT_COMMIT).with_required(["version_number"]),
    ]
}

/// Schema set for topic entities.
pub fn topic() -> SchemaSet {
    SchemaSet::new("topic")
        .with_commands(base_version_commands())
        .with_command(CommandSchema::new("create_new").with_required(["name"]))
        .with_command(
            CommandSchema::new("add_subtopic").with_required(["subtopic_id", "title"]),
        )
        .with_command(CommandSchema::new("delete_subtopic").with_required(["subtopic_id"]))
        .with_command(
            CommandSchema::new("add_uncategorized_skill_id")
                .with_required(["new_uncategorized_skill_id"]),
        )
        .with_command(
            CommandSchema::new("remove_uncategorized_skill_id")
                .with_required(["uncategorized_skill_id"]),
        )
        .with_command(
            CommandSchema::new("move_skill_id_to_subtopic")
                .with_required(["old_subtopic_id", "new_subtopic_id", "skill_id"]),
        )
        .with_command(
            CommandSchema::new("remove_skill_id_from_subtopic")
                .with_required(["subtopic_id", "skill_id"]),
        )
        .with_command(
            CommandSchema::new("update_topic_property")
                .with_required(["property_name", "new_value", "old_value"])
                .with_allowed_values(
                    "property_name",
                    [
                        "abbreviated_name",
                        "description",
                        "language_code",
                        "meta_tag_content",
                        "name",
                        "page_title_fragment_for_web",
                        "practice_tab_is_displayed",
                        "thumbnail_bg_color",
                        "thumbnail_filename",
                        "url_fragment",
                    ],
                ),
        )
        .with_command(
            CommandSchema::new("update_subtopic_property")
                .with_required(["subtopic_id", "property_name", "new_value", "old_value"])
                .with_allowed_values(
                    "property_name",
                    ["thumbnail_bg_color", "thumbnail_filename", "title", "url_fragment"],
                ),
        )
        .with_command(
            CommandSchema::new("update_subtopic_page_property")
                .with_required(["subtopic_id", "property_name", "new_value", "old_value"])
                .with_allowed_values(
                    "property_name",
                    ["page_contents", "page_contents_schema_version"],
                ),
        )
}

/// Schema set for skill entities.
pub fn skill() -> SchemaSet {
    SchemaSet::new("skill")
        .with_commands(base_version_commands())
        .with_command(CommandSchema::new("create_new"))
        .with_command(
            CommandSchema::new("add_skill_misconception").with_required(["new_misconception_dict"]),
        )
        .with_command(
            CommandSchema::new("delete_skill_misconception").with_required(["misconception_id"]),
        )
        .with_command(
            CommandSchema::new("add_prerequisite_skill").with_required(["skill_id"]),
        )
        .with_command(
            CommandSchema::new("delete_prerequisite_skill").with_required(["skill_id"]),
        )
        .with_command(
            CommandSchema::new("update_rubrics").with_required(["difficulty", "explanations"]),
        )
        .with_command(
            CommandSchema::new("update_skill_property")
                .with_required(["property_name", "new_value", "old_value"])
                .with_allowed_values(
                    "property_name",
                    [
                        "all_questions_merged",
                        "description",
                        "language_code",
                        "name",
                        "prerequisite_skill_ids",
                        "superseding_skill_id",
                    ],
                ),
        )
        .with_command(
            CommandSchema::new("update_skill_misconceptions_property")
                .with_required(["misconception_id", "property_name", "new_value", "old_value"])
                .with_allowed_values(
                    "property_name",
                    ["feedback", "must_be_addressed", "name", "notes"],
                ),
        )
        .with_command(
            CommandSchema::new("update_skill_contents_property")
                .with_required(["property_name", "new_value", "old_value"])
                .with_allowed_values("property_name", ["explanation", "worked_examples"]),
        )
}

/// Schema set for story entities.
pub fn story() -> SchemaSet {
    SchemaSet::new("story")
        .with_commands(base_version_commands())
        .with_command(CommandSchema::new("create_new").with_required(["title"]))
        .with_command(
            CommandSchema::new("add_story_node").with_required(["node_id", "title"]),
        )
        .with_command(CommandSchema::new("delete_story_node").with_required(["node_id"]))
        .with_command(
            CommandSchema::new("update_story_node_outline_status")
                .with_required(["node_id", "new_value", "old_value"]),
        )
        .with_command(
            CommandSchema::new("update_story_property")
                .with_required(["property_name", "new_value", "old_value"])
                .with_allowed_values(
                    "property_name",
                    [
                        "description",
                        "language_code",
                        "meta_tag_content",
                        "notes",
                        "thumbnail_bg_color",
                        "thumbnail_filename",
                        "title",
                        "url_fragment",
                    ],
                ),
        )
        .with_command(
            CommandSchema::new("update_story_node_property")
                .with_required(["node_id", "property_name", "new_value", "old_value"])
                .with_allowed_values(
                    "property_name",
                    [
                        "acquired_skill_ids",
                        "description",
                        "destination_node_ids",
                        "exploration_id",
                        "outline",
                        "prerequisite_skill_ids",
                        "thumbnail_bg_color",
                        "thumbnail_filename",
                        "title",
                    ],
                ),
        )
        .with_command(
            CommandSchema::new("update_story_contents_property")
                .with_required(["property_name", "new_value", "old_value"])
                .with_allowed_values("property_name", ["initial_node_id", "node"]),
        )
}

/// Schema set for exploration content entities.
pub fn exploration() -> SchemaSet {
    SchemaSet::new("exploration")
        .with_commands(base_version_commands())
        .with_command(
            CommandSchema::new("create_new").with_required(["category", "title"]),
        )
        .with_command(CommandSchema::new("add_state").with_required(["state_name"]))
        .with_command(
            CommandSchema::new("rename_state").with_required(["old_state_name", "new_state_name"]),
        )
        .with_command(CommandSchema::new("delete_state").with_required(["state_name"]))
        .with_command(
            CommandSchema::new("migrate_states_schema_to_latest_version")
                .with_required(["from_version", "to_version"]),
        )
        .with_command(
            CommandSchema::new("edit_state_property")
                .with_required(["state_name", "property_name", "new_value"])
                .with_optional(["old_value"])
                .with_allowed_values(
                    "property_name",
                    [
                        "answer_groups",
                        "confirmed_unclassified_answers",
                        "content",
                        "default_outcome",
                        "hints",
                        "param_changes",
                        "recorded_voiceovers",
                        "solicit_answer_details",
                        "solution",
                        "widget_customization_args",
                        "widget_id",
                        "written_translations",
                    ],
                ),
        )
        .with_command(
            CommandSchema::new("edit_exploration_property")
                .with_required(["property_name", "new_value"])
                .with_optional(["old_value"])
                .with_allowed_values(
                    "property_name",
                    [
                        "author_notes",
                        "auto_tts_enabled",
                        "blurb",
                        "category",
                        "correctness_feedback_enabled",
                        "init_state_name",
                        "language_code",
                        "objective",
                        "param_changes",
                        "param_specs",
                        "tags",
                        "title",
                    ],
                ),
        )
}

/// Schema set for exploration rights entities.
pub fn exploration_rights() -> SchemaSet {
    let roles = ["editor", "none", "owner", "viewer", "voice artist"];
    let statuses = ["private", "public"];
    SchemaSet::new("exploration_rights")
        .with_commands(base_version_commands())
        .with_command(CommandSchema::new("create_new"))
        .with_command(CommandSchema::new("release_ownership"))
        .with_command(
            CommandSchema::new("change_role")
                .with_required(["assignee_id", "new_role", "old_role"])
                .with_allowed_values("new_role", roles)
                .with_allowed_values("old_role", roles),
        )
        .with_command(
            CommandSchema::new("change_exploration_status")
                .with_required(["new_status", "old_status"])
                .with_allowed_values("new_status", statuses)
                .with_allowed_values("old_status", statuses),
        )
        .with_command(
            CommandSchema::new("change_private_viewability")
                .with_required(["new_viewable_if_private", "old_viewable_if_private"]),
        )
        .with_command(
            CommandSchema::new("update_first_published_msec")
                .with_required(["new_first_published_msec", "old_first_published_msec"]),
        )
}
