//! Per-command structural and value rules

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Structural and value rules for one command type.
///
/// A command conforms when every required attribute is present, every
/// present attribute is either required or optional, and every attribute
/// listed in the allowed-value table carries one of its enumerated values.
/// Sorted sets keep derived error text deterministic.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandSchema {
    name: String,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    required: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    optional: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    allowed_values: BTreeMap<String, BTreeSet<String>>,
}

impl CommandSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Declare attributes that must be present.
    pub fn with_required<'a>(mut self, attrs: impl IntoIterator<Item = &'a str>) -> Self {
        self.required.extend(attrs.into_iter().map(String::from));
        self
    }

    /// Declare attributes that may be present.
    pub fn with_optional<'a>(mut self, attrs: impl IntoIterator<Item = &'a str>) -> Self {
        self.optional.extend(attrs.into_iter().map(String::from));
        self
    }

    /// Constrain an attribute to an enumerated set of values.
    pub fn with_allowed_values<'a>(
        mut self,
        attr: &str,
        values: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        self.allowed_values
            .entry(attr.to_string())
            .or_default()
            .extend(values.into_iter().map(String::from));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn required(&self) -> &BTreeSet<String> {
        &self.required
    }

    pub fn optional(&self) -> &BTreeSet<String> {
        &self.optional
    }

    pub fn allowed_values(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.allowed_values
    }

    /// Whether an attribute is declared at all (required or optional).
    pub fn is_attribute_known(&self, attr: &str) -> bool {
        self.required.contains(attr) || self.optional.contains(attr)
    }
}
