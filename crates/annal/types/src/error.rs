//! Validation findings

use crate::CommitCmd;
use serde::{Deserialize, Serialize};

/// A single violation found while auditing a record.
///
/// Produced fresh per violation and never mutated afterwards. The message
/// text is part of the external contract: downstream consumers match on it
/// literally.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// The command the violation was found on; `None` for record-level
    /// errors such as timestamp or id-shape violations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offending_cmd: Option<CommitCmd>,
    pub message: String,
}

impl ValidationError {
    /// A violation tied to one commit command.
    pub fn for_cmd(cmd: &CommitCmd, message: impl Into<String>) -> Self {
        Self {
            offending_cmd: Some(cmd.clone()),
            message: message.into(),
        }
    }

    /// A record-level violation with no offending command.
    pub fn for_record(message: impl Into<String>) -> Self {
        Self {
            offending_cmd: None,
            message: message.into(),
        }
    }
}
