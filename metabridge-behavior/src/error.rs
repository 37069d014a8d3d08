//! Error types for behavior resolution.

use thiserror::Error;

/// Result type for behavior operations.
pub type BehaviorResult<T> = Result<T, BehaviorError>;

/// Errors that can occur while reading or writing import rules.
///
/// A missing rule is never an error; lookups return `None` and the cascade
/// falls through.
#[derive(Debug, Error)]
pub enum BehaviorError {
    /// The backing rule store failed.
    #[error("rule store error: {0}")]
    Store(String),

    /// A rule scoped to neither an element nor an item. That slot belongs to
    /// the configured system default.
    #[error("import rule needs an element, an item, or both")]
    UnscopedRule,
}
