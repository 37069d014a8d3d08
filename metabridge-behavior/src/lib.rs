//! Import-behavior rules and their precedence.
//!
//! For each field of each imported item exactly one behavior is in force,
//! chosen by a fixed cascade (see [`CascadeLevel`]):
//!
//! 1. a rule for this field on this item
//! 2. a rule for every field of this item
//! 3. a rule for this field on every item
//! 4. the configured system default
//!
//! Rules live behind the [`RuleStore`] trait; [`MemoryRuleStore`] is provided
//! here and a SQLite store lives in `metabridge-store`.

mod cascade;
mod directory;
mod error;
mod resolver;
mod rule;
mod store;

pub use cascade::CascadeLevel;
pub use directory::ElementDirectory;
pub use error::{BehaviorError, BehaviorResult};
pub use resolver::{BehaviorResolver, Resolution};
pub use rule::{select_value, ImportRule};
pub use store::{MemoryRuleStore, RuleStore};
