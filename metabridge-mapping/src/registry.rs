use crate::error::{MappingError, MappingResult};
use crate::importer::Importer;
use metabridge_types::Datastream;
use tracing::debug;

/// Registered importers, consulted in registration order.
#[derive(Debug, Default)]
pub struct ImporterRegistry {
    importers: Vec<Importer>,
}

impl ImporterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in MODS and Dublin Core importers.
    pub fn with_defaults() -> MappingResult<Self> {
        let mut registry = Self::new();
        registry.register(Importer::mods()?);
        registry.register(Importer::dublin_core()?);
        Ok(registry)
    }

    pub fn register(&mut self, importer: Importer) {
        self.importers.push(importer);
    }

    /// First importer that accepts the datastream.
    ///
    /// Fails with [`MappingError::NoImporter`] when none does; the caller
    /// skips the document.
    pub fn select(&self, datastream: &Datastream) -> MappingResult<&Importer> {
        match self.importers.iter().find(|i| i.can_import(datastream)) {
            Some(importer) => {
                debug!(
                    pid = %datastream.pid,
                    dsid = %datastream.dsid,
                    schema = importer.schema(),
                    "Importer selected"
                );
                Ok(importer)
            }
            None => {
                debug!(pid = %datastream.pid, dsid = %datastream.dsid, "No importer for datastream");
                Err(MappingError::NoImporter {
                    pid: datastream.pid.clone(),
                    dsid: datastream.dsid.clone(),
                    format: datastream.format().unwrap_or("none").to_string(),
                })
            }
        }
    }

    pub fn importers(&self) -> &[Importer] {
        &self.importers
    }

    pub fn len(&self) -> usize {
        self.importers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.importers.is_empty()
    }
}
