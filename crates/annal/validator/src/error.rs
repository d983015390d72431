//! Fatal per-record resolution failures

use annal_types::EntityCategory;

/// The record's shape could not be classified against the configured
/// change domains.
///
/// Distinct from [`ValidationError`](annal_types::ValidationError): this is
/// a data-integrity fault for the operator to investigate, not a
/// commit-command authoring mistake, so it propagates as `Err` instead of
/// joining the accumulated findings. Blast radius is one record.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
    #[error("no change domain registered for category {0}")]
    UnknownCategory(EntityCategory),

    #[error("entity id {entity_id} does not match any known id prefix for category {category}")]
    UnmatchedIdPrefix {
        category: EntityCategory,
        entity_id: String,
    },
}
