//! SQLite persistence for metabridge.
//!
//! - [`SqliteRuleStore`]: import rules, one row per (element, item) scope,
//!   usable anywhere a [`metabridge_behavior::RuleStore`] is expected
//! - [`ServerRegistry`]: remote repository servers with at most one default
//!
//! Both share a [`Database`] handle and can live in the same file.

mod database;
mod error;
mod rules;
mod servers;

pub use database::Database;
pub use error::{ServerError, ServerResult, StoreError, StoreResult};
pub use rules::SqliteRuleStore;
pub use servers::{
    check_url, is_valid_server_url, NewServer, Server, ServerListing, ServerRegistry,
    ServerUpdate, SortColumn, SortDirection, SortOrder, DEFAULT_PER_PAGE,
};
