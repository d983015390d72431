//! Change-domain resolution

use crate::error::ResolutionError;
use annal_schema::SchemaSet;
use annal_types::EntityRecord;

/// Chooses the schema set that governs a record's commit commands.
///
/// Most categories map one-to-one onto a schema set. Polymorphic
/// categories hold records for more than one underlying domain,
/// distinguished only by the shape of the entity id; those carry an
/// ordered prefix table, evaluated first match wins, with an explicit
/// fallthrough error rather than an implicit panic.
#[derive(Clone, Debug)]
pub enum ChangeDomainResolver {
    /// Every record of the category shares one schema set.
    Fixed(SchemaSet),
    /// Dispatch on the textual prefix of the entity id.
    ByIdPrefix(Vec<(String, SchemaSet)>),
}

impl ChangeDomainResolver {
    /// Resolve the schema set for a record.
    ///
    /// An id matching none of the known prefixes is malformed input — a
    /// data-integrity fault reported up, never coerced into a structural
    /// validation error on an arbitrary command.
    pub fn resolve(&self, record: &EntityRecord) -> Result<&SchemaSet, ResolutionError> {
        match self {
            Self::Fixed(set) => Ok(set),
            Self::ByIdPrefix(table) => table
                .iter()
                .find(|(prefix, _)| record.id.starts_with(prefix.as_str()))
                .map(|(_, set)| set)
                .ok_or_else(|| ResolutionError::UnmatchedIdPrefix {
                    category: record.category.clone(),
                    entity_id: record.id.clone(),
                }),
        }
    }
}
