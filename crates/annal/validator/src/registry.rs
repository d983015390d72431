//! Category → audit-entry registration

use crate::error::ResolutionError;
use crate::model_audits::ModelAuditOptions;
use crate::resolver::ChangeDomainResolver;
use annal_schema::{catalog, SchemaSet};
use annal_types::{EntityCategory, EntityRecord};
use std::collections::HashMap;

/// Everything registered for one entity category: the change-domain
/// resolver and the record-level audit configuration (id shapes differ by
/// family, so the options live with the category).
#[derive(Clone, Debug)]
pub struct AuditEntry {
    pub resolver: ChangeDomainResolver,
    pub options: ModelAuditOptions,
}

/// Maps entity categories to the audit entry that serves them.
///
/// Registration happens explicitly at startup; the finished registry is
/// read-only and safe to share across worker threads without locking.
#[derive(Clone, Debug, Default)]
pub struct AuditRegistry {
    entries: HashMap<EntityCategory, AuditEntry>,
}

impl AuditRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resolver for a category with the stock audit options,
    /// builder style. A later registration for the same category replaces
    /// the earlier one.
    pub fn register(
        self,
        category: impl Into<EntityCategory>,
        resolver: ChangeDomainResolver,
    ) -> Self {
        self.register_with_options(category, resolver, ModelAuditOptions::standard())
    }

    /// Register a resolver together with category-specific audit options.
    pub fn register_with_options(
        mut self,
        category: impl Into<EntityCategory>,
        resolver: ChangeDomainResolver,
        options: ModelAuditOptions,
    ) -> Self {
        self.entries
            .insert(category.into(), AuditEntry { resolver, options });
        self
    }

    /// Registry wired with the built-in catalog: one fixed domain per
    /// stock entity family, plus the polymorphic exploration commit log
    /// dispatched on id prefix (whose ids carry the domain prefix and a
    /// version suffix, hence the wider id pattern).
    pub fn with_defaults() -> Self {
        let commit_log_options = ModelAuditOptions::with_id_pattern(
            "^(exploration|rights)-[A-Za-z0-9-_]{1,12}-\\d+$",
        )
        .expect("built-in commit log id pattern compiles");
        Self::new()
            .register("topic", ChangeDomainResolver::Fixed(catalog::topic()))
            .register("skill", ChangeDomainResolver::Fixed(catalog::skill()))
            .register("story", ChangeDomainResolver::Fixed(catalog::story()))
            .register(
                "exploration",
                ChangeDomainResolver::Fixed(catalog::exploration()),
            )
            .register(
                "exploration_rights",
                ChangeDomainResolver::Fixed(catalog::exploration_rights()),
            )
            .register_with_options(
                "exploration_commit_log",
                ChangeDomainResolver::ByIdPrefix(vec![
                    ("rights".to_string(), catalog::exploration_rights()),
                    ("exploration".to_string(), catalog::exploration()),
                ]),
                commit_log_options,
            )
    }

    /// The entry serving a category, or [`ResolutionError::UnknownCategory`]
    /// for records the configuration cannot classify.
    pub fn entry_for(&self, category: &EntityCategory) -> Result<&AuditEntry, ResolutionError> {
        self.entries
            .get(category)
            .ok_or_else(|| ResolutionError::UnknownCategory(category.clone()))
    }

    /// Resolve the schema set governing a record.
    pub fn resolve(&self, record: &EntityRecord) -> Result<&SchemaSet, ResolutionError> {
        self.entry_for(&record.category)?.resolver.resolve(record)
    }

    pub fn categories(&self) -> impl Iterator<Item = &EntityCategory> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
