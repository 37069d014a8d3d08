use metabridge_types::{BehaviorKind, ElementId, ItemId};
use serde::{Deserialize, Serialize};

/// A stored import rule.
///
/// `element_id = None` makes the rule apply to every field of its item;
/// `item_id = None` makes it apply to its field on every item. At least one
/// of the two is always set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImportRule {
    pub element_id: Option<ElementId>,
    pub item_id: Option<ItemId>,
    pub behavior: BehaviorKind,
}

impl ImportRule {
    /// Override for one field of one item.
    pub fn exact(element_id: ElementId, item_id: ItemId, behavior: BehaviorKind) -> Self {
        Self {
            element_id: Some(element_id),
            item_id: Some(item_id),
            behavior,
        }
    }

    /// Default for every field of one item.
    pub fn item_default(item_id: ItemId, behavior: BehaviorKind) -> Self {
        Self {
            element_id: None,
            item_id: Some(item_id),
            behavior,
        }
    }

    /// Default for one field across all items.
    pub fn field_default(element_id: ElementId, behavior: BehaviorKind) -> Self {
        Self {
            element_id: Some(element_id),
            item_id: None,
            behavior,
        }
    }

    /// The (element, item) pair this rule is stored under.
    pub fn key(&self) -> (Option<ElementId>, Option<ItemId>) {
        (self.element_id, self.item_id)
    }

    pub fn is_scoped(&self) -> bool {
        self.element_id.is_some() || self.item_id.is_some()
    }
}

/// Form value for an admin dropdown: the rule's behavior token, or
/// `"default"` when no rule is stored at that level.
pub fn select_value(rule: Option<&ImportRule>) -> &'static str {
    rule.map(|r| r.behavior.as_str()).unwrap_or("default")
}
