use crate::cascade::CascadeLevel;
use crate::directory::ElementDirectory;
use crate::error::BehaviorResult;
use crate::rule::ImportRule;
use crate::store::RuleStore;
use metabridge_types::{BehaviorKind, ElementId, ItemId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The behavior in force for an (item, element) pair and the cascade level
/// that supplied it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub behavior: BehaviorKind,
    pub level: CascadeLevel,
}

/// Resolves import behavior against a rule store.
///
/// Read-only: resolution never writes to the store. Safe to share across
/// threads whenever the store is.
pub struct BehaviorResolver<S> {
    store: S,
    system_default: BehaviorKind,
    directory: ElementDirectory,
}

impl<S: RuleStore> BehaviorResolver<S> {
    /// Creates a resolver using the Dublin Core element directory.
    pub fn new(store: S, system_default: BehaviorKind) -> Self {
        Self {
            store,
            system_default,
            directory: ElementDirectory::dublin_core(),
        }
    }

    pub fn with_directory(mut self, directory: ElementDirectory) -> Self {
        self.directory = directory;
        self
    }

    /// Behavior in force for one field of one item.
    pub fn resolve_behavior(
        &self,
        item_id: ItemId,
        element_id: ElementId,
    ) -> BehaviorResult<BehaviorKind> {
        Ok(self.resolve(item_id, element_id)?.behavior)
    }

    /// Walks the cascade and reports which level answered.
    pub fn resolve(&self, item_id: ItemId, element_id: ElementId) -> BehaviorResult<Resolution> {
        for level in CascadeLevel::ORDER {
            let Some((element_key, item_key)) = level.key(item_id, element_id) else {
                break;
            };
            if let Some(rule) = self.store.find_rule(element_key, item_key)? {
                debug!(item = %item_id, element = %element_id, %level, behavior = %rule.behavior, "Behavior resolved");
                return Ok(Resolution {
                    behavior: rule.behavior,
                    level,
                });
            }
        }
        debug!(item = %item_id, element = %element_id, behavior = %self.system_default, "Behavior resolved from system default");
        Ok(Resolution {
            behavior: self.system_default,
            level: CascadeLevel::SystemDefault,
        })
    }

    /// Field-wide default rule for an element.
    pub fn default_behavior_for(&self, element_id: ElementId) -> BehaviorResult<Option<ImportRule>> {
        self.store.find_rule(Some(element_id), None)
    }

    /// Item-wide default rule.
    pub fn item_default_for(&self, item_id: ItemId) -> BehaviorResult<Option<ImportRule>> {
        self.store.find_rule(None, Some(item_id))
    }

    /// Exact rule for one field of one item.
    pub fn item_behavior_for(
        &self,
        item_id: ItemId,
        element_id: ElementId,
    ) -> BehaviorResult<Option<ImportRule>> {
        self.store.find_rule(Some(element_id), Some(item_id))
    }

    /// [`Self::default_behavior_for`] by canonical field name. Unknown names
    /// have no rule.
    pub fn default_behavior_by_field(&self, field_name: &str) -> BehaviorResult<Option<ImportRule>> {
        match self.directory.element_named(field_name) {
            Some(element_id) => self.default_behavior_for(element_id),
            None => Ok(None),
        }
    }

    /// [`Self::item_behavior_for`] by canonical field name. Unknown names
    /// have no rule.
    pub fn item_behavior_by_field(
        &self,
        item_id: ItemId,
        field_name: &str,
    ) -> BehaviorResult<Option<ImportRule>> {
        match self.directory.element_named(field_name) {
            Some(element_id) => self.item_behavior_for(item_id, element_id),
            None => Ok(None),
        }
    }

    pub fn system_default(&self) -> BehaviorKind {
        self.system_default
    }

    pub fn directory(&self) -> &ElementDirectory {
        &self.directory
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
