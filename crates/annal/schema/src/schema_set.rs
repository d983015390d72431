//! Change-domain schema collections

use crate::CommandSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The full collection of command schemas applicable to one change domain.
///
/// Resolved once per record by the change-domain resolver, then consulted
/// read-only for every command in the record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaSet {
    name: String,
    commands: BTreeMap<String, CommandSchema>,
}

impl SchemaSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            commands: BTreeMap::new(),
        }
    }

    /// Add a command schema, builder style. A later schema with the same
    /// command name replaces the earlier one.
    pub fn with_command(mut self, schema: CommandSchema) -> Self {
        self.commands.insert(schema.name().to_string(), schema);
        self
    }

    /// Add several command schemas at once.
    pub fn with_commands(mut self, schemas: impl IntoIterator<Item = CommandSchema>) -> Self {
        for schema in schemas {
            self.commands.insert(schema.name().to_string(), schema);
        }
        self
    }

    /// Look up the schema governing a command name.
    pub fn lookup(&self, command_name: &str) -> Option<&CommandSchema> {
        self.commands.get(command_name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn command_names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }
}
