use metabridge_types::{ElementId, ItemId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One level of the behavior cascade, most specific first.
///
/// Resolution walks [`CascadeLevel::ORDER`] and stops at the first level
/// with a stored rule. Levels are never combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CascadeLevel {
    /// Rule for this element on this item.
    Exact,
    /// Rule for every element of this item.
    ItemDefault,
    /// Rule for this element on every item.
    FieldDefault,
    /// Configured system-wide behavior; always answers.
    SystemDefault,
}

impl CascadeLevel {
    pub const ORDER: [CascadeLevel; 4] = [
        CascadeLevel::Exact,
        CascadeLevel::ItemDefault,
        CascadeLevel::FieldDefault,
        CascadeLevel::SystemDefault,
    ];

    /// The stored-rule key this level looks up for (item, element), or
    /// `None` for the system default, which is not a stored rule.
    pub fn key(
        self,
        item_id: ItemId,
        element_id: ElementId,
    ) -> Option<(Option<ElementId>, Option<ItemId>)> {
        match self {
            CascadeLevel::Exact => Some((Some(element_id), Some(item_id))),
            CascadeLevel::ItemDefault => Some((None, Some(item_id))),
            CascadeLevel::FieldDefault => Some((Some(element_id), None)),
            CascadeLevel::SystemDefault => None,
        }
    }
}

impl fmt::Display for CascadeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CascadeLevel::Exact => "exact",
            CascadeLevel::ItemDefault => "item default",
            CascadeLevel::FieldDefault => "field default",
            CascadeLevel::SystemDefault => "system default",
        })
    }
}
