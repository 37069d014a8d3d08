use crate::catalog::{QueryCatalog, QuerySet};
use crate::error::MappingResult;
use crate::{dublin_core, mods};
use metabridge_types::Datastream;
use std::fmt;

/// Predicate deciding whether an importer can consume a datastream.
pub type CanImport = fn(&Datastream) -> bool;

/// A source-schema handler: a capability check plus the schema's query
/// catalog.
///
/// Importers are built once at startup and shared read-only across
/// documents and threads.
pub struct Importer {
    schema: String,
    can_import: CanImport,
    catalog: QueryCatalog,
}

impl Importer {
    pub fn new(schema: impl Into<String>, can_import: CanImport, catalog: QueryCatalog) -> Self {
        Self {
            schema: schema.into(),
            can_import,
            catalog,
        }
    }

    /// Importer for MODS metadata streams.
    pub fn mods() -> MappingResult<Self> {
        Ok(Self::new(mods::SCHEMA, mods::can_import, mods::catalog()?))
    }

    /// Importer for simple Dublin Core (`oai_dc`) metadata streams.
    pub fn dublin_core() -> MappingResult<Self> {
        Ok(Self::new(
            dublin_core::SCHEMA,
            dublin_core::can_import,
            dublin_core::catalog()?,
        ))
    }

    /// Schema tag this importer handles (e.g., "MODS").
    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn can_import(&self, datastream: &Datastream) -> bool {
        (self.can_import)(datastream)
    }

    /// Query set for a canonical field name; empty for unmapped or unknown
    /// fields.
    pub fn queries_for(&self, field_name: &str) -> &QuerySet {
        self.catalog.queries_for(field_name)
    }

    pub fn catalog(&self) -> &QueryCatalog {
        &self.catalog
    }
}

impl fmt::Debug for Importer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Importer")
            .field("schema", &self.schema)
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}
