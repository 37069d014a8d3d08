use crate::error::{BehaviorError, BehaviorResult};
use crate::rule::ImportRule;
use metabridge_types::{BehaviorKind, ElementId, ItemId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Point lookups into stored import rules.
///
/// `None` in either position means "IS NULL", not "any": looking up
/// `(Some(e), None)` finds only the field-wide default for `e`. Implementors
/// keep at most one rule per (element, item) pair.
pub trait RuleStore: Send + Sync {
    fn find_rule(
        &self,
        element_id: Option<ElementId>,
        item_id: Option<ItemId>,
    ) -> BehaviorResult<Option<ImportRule>>;
}

impl<T: RuleStore + ?Sized> RuleStore for Arc<T> {
    fn find_rule(
        &self,
        element_id: Option<ElementId>,
        item_id: Option<ItemId>,
    ) -> BehaviorResult<Option<ImportRule>> {
        (**self).find_rule(element_id, item_id)
    }
}

impl<T: RuleStore + ?Sized> RuleStore for &T {
    fn find_rule(
        &self,
        element_id: Option<ElementId>,
        item_id: Option<ItemId>,
    ) -> BehaviorResult<Option<ImportRule>> {
        (**self).find_rule(element_id, item_id)
    }
}

type RuleKey = (Option<ElementId>, Option<ItemId>);

/// Rule store held in memory. Keyed by (element, item), so uniqueness falls
/// out of the map.
#[derive(Debug, Default)]
pub struct MemoryRuleStore {
    rules: RwLock<HashMap<RuleKey, BehaviorKind>>,
}

impl MemoryRuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a rule, replacing any rule already stored under its key.
    /// Returns the replaced behavior.
    pub fn put(&self, rule: ImportRule) -> BehaviorResult<Option<BehaviorKind>> {
        if !rule.is_scoped() {
            return Err(BehaviorError::UnscopedRule);
        }
        let mut rules = self.rules.write().map_err(poisoned)?;
        Ok(rules.insert(rule.key(), rule.behavior))
    }

    /// Removes the rule stored under (element, item), if any.
    pub fn remove(
        &self,
        element_id: Option<ElementId>,
        item_id: Option<ItemId>,
    ) -> BehaviorResult<Option<ImportRule>> {
        let mut rules = self.rules.write().map_err(poisoned)?;
        Ok(rules
            .remove(&(element_id, item_id))
            .map(|behavior| ImportRule {
                element_id,
                item_id,
                behavior,
            }))
    }

    pub fn len(&self) -> BehaviorResult<usize> {
        Ok(self.rules.read().map_err(poisoned)?.len())
    }

    pub fn is_empty(&self) -> BehaviorResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl FromIterator<ImportRule> for MemoryRuleStore {
    /// Later rules replace earlier ones with the same key; unscoped rules are
    /// dropped.
    fn from_iter<I: IntoIterator<Item = ImportRule>>(iter: I) -> Self {
        let rules = iter
            .into_iter()
            .filter(ImportRule::is_scoped)
            .map(|r| (r.key(), r.behavior))
            .collect();
        Self {
            rules: RwLock::new(rules),
        }
    }
}

impl RuleStore for MemoryRuleStore {
    fn find_rule(
        &self,
        element_id: Option<ElementId>,
        item_id: Option<ItemId>,
    ) -> BehaviorResult<Option<ImportRule>> {
        let rules = self.rules.read().map_err(poisoned)?;
        Ok(rules.get(&(element_id, item_id)).map(|behavior| ImportRule {
            element_id,
            item_id,
            behavior: *behavior,
        }))
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> BehaviorError {
    BehaviorError::Store("rule table lock poisoned".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn poisoned_table_is_a_store_error_everywhere() {
        let store = MemoryRuleStore::new();
        thread::scope(|s| {
            let _ = s
                .spawn(|| {
                    let _guard = store.rules.write().unwrap();
                    panic!("writer died holding the lock");
                })
                .join();
        });

        assert!(matches!(store.len(), Err(BehaviorError::Store(_))));
        assert!(matches!(store.is_empty(), Err(BehaviorError::Store(_))));
        assert!(matches!(store.find_rule(None, Some(ItemId::new(1))), Err(BehaviorError::Store(_))));
    }
}
