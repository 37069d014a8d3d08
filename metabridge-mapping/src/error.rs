//! Error types for the mapping layer.

use thiserror::Error;

/// Result type for mapping operations.
pub type MappingResult<T> = Result<T, MappingError>;

/// Errors that can occur while selecting importers or building catalogs.
///
/// A field with no matches is not an error; extraction returns an empty
/// sequence for it.
#[derive(Debug, Error)]
pub enum MappingError {
    /// No registered importer accepts the datastream. The caller skips the
    /// document.
    #[error("no importer accepts datastream {dsid} of {pid} (format: {format})")]
    NoImporter {
        pid: String,
        dsid: String,
        format: String,
    },

    /// A structural query could not be parsed.
    #[error("invalid query `{query}`: {reason}")]
    InvalidQuery { query: String, reason: String },

    /// The document text is not well-formed XML.
    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),
}

impl MappingError {
    pub(crate) fn invalid_query(query: &str, reason: impl Into<String>) -> Self {
        Self::InvalidQuery {
            query: query.to_string(),
            reason: reason.into(),
        }
    }
}
