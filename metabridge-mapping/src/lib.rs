//! Schema-specific XML → Dublin Core mapping for metabridge.
//!
//! - [`Query`]: a structural, namespace-agnostic query over an XML tree
//! - [`QuerySet`] / [`QueryCatalog`]: per-schema field → ordered queries
//! - [`Importer`]: a schema handler (capability check + catalog); MODS and
//!   Dublin Core ship built in
//! - [`ImporterRegistry`]: picks the importer for a datastream
//! - [`extract`], [`extract_field`], [`extract_all`]: run query sets against
//!   a [`SourceDocument`]
//!
//! Everything here is immutable after construction and safe to share across
//! threads; extraction never performs I/O.

mod catalog;
mod document;
pub mod dublin_core;
mod error;
mod extract;
mod importer;
pub mod mods;
mod query;
mod registry;

pub use catalog::{QueryCatalog, QueryCatalogBuilder, QuerySet};
pub use document::SourceDocument;
pub use error::{MappingError, MappingResult};
pub use extract::{extract, extract_all, extract_field, ExtractedValue, FieldValues};
pub use importer::{CanImport, Importer};
pub use query::Query;
pub use registry::ImporterRegistry;
