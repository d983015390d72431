//! Entity snapshots and commit commands

use crate::EntityCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Key identifying the command type inside a commit command mapping.
pub const CMD_KEY: &str = "cmd";

/// One atomic change recorded against a versioned entity.
///
/// A commit command is an attribute-name → value mapping whose `cmd` key
/// names the command type; all other keys are command-specific attributes.
/// Keys are unique and their order carries no meaning — the sorted backing
/// map keeps every derived output deterministic.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitCmd(BTreeMap<String, Value>);

impl CommitCmd {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// The raw value under the `cmd` key, if present.
    pub fn cmd(&self) -> Option<&Value> {
        self.0.get(CMD_KEY)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Attribute names in ascending order, excluding the `cmd` key itself.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str).filter(|key| *key != CMD_KEY)
    }
}

impl From<BTreeMap<String, Value>> for CommitCmd {
    fn from(attributes: BTreeMap<String, Value>) -> Self {
        Self(attributes)
    }
}

/// Immutable snapshot of a versioned domain entity at a point in time.
///
/// Owned by the persistence layer; the audit engine only reads it. The
/// timestamp, deletion, and commit-status fields feed the record-level
/// audits; `commands` feeds the commit-command schema validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub id: String,
    pub category: EntityCategory,
    pub created_on: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_commit_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_commit_is_private: Option<bool>,
    #[serde(default)]
    pub commands: Vec<CommitCmd>,
}

impl EntityRecord {
    pub fn new(
        id: impl Into<String>,
        category: EntityCategory,
        created_on: DateTime<Utc>,
        last_updated: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            created_on,
            last_updated,
            deleted: false,
            post_commit_status: None,
            post_commit_is_private: None,
            commands: Vec::new(),
        }
    }

    pub fn with_commands(mut self, commands: impl IntoIterator<Item = CommitCmd>) -> Self {
        self.commands.extend(commands);
        self
    }

    pub fn with_commit_status(mut self, status: impl Into<String>, is_private: bool) -> Self {
        self.post_commit_status = Some(status.into());
        self.post_commit_is_private = Some(is_private);
        self
    }

    pub fn mark_deleted(mut self) -> Self {
        self.deleted = true;
        self
    }
}
