use serde::{Deserialize, Serialize};

/// Descriptor of one datastream on a remote repository object.
///
/// Only `metadata_stream` matters for importer selection; the rest identifies
/// the stream for logging, omission filters, and display adapters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Datastream {
    /// Persistent identifier of the remote object (e.g., "demo:29").
    pub pid: String,
    /// Datastream id within the object (e.g., "DC", "MODS", "RELS-EXT").
    pub dsid: String,
    #[serde(default)]
    pub label: String,
    /// MIME type of the stream content.
    pub mime_type: String,
    /// Schema/format tag of a metadata stream ("MODS", "DC"). `None` for
    /// content streams.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_stream: Option<String>,
}

impl Datastream {
    /// Shorthand for a metadata stream whose dsid doubles as its format tag.
    pub fn metadata(pid: &str, format: &str) -> Self {
        Self {
            pid: pid.into(),
            dsid: format.into(),
            label: String::new(),
            mime_type: "text/xml".into(),
            metadata_stream: Some(format.into()),
        }
    }

    /// Shorthand for a content stream (no metadata format).
    pub fn content(pid: &str, dsid: &str, mime_type: &str) -> Self {
        Self {
            pid: pid.into(),
            dsid: dsid.into(),
            label: String::new(),
            mime_type: mime_type.into(),
            metadata_stream: None,
        }
    }

    /// The schema tag, if this is a metadata stream.
    pub fn format(&self) -> Option<&str> {
        self.metadata_stream.as_deref()
    }
}
