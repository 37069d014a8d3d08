use crate::error::MappingResult;
use roxmltree::{Document, ParsingOptions};

/// A retrieved metadata document, parsed and tagged with the URI it came
/// from.
///
/// Retrieval happens elsewhere; this only owns the parse so that a malformed
/// document is reported before any extraction starts.
pub struct SourceDocument<'input> {
    uri: String,
    tree: Document<'input>,
}

impl<'input> SourceDocument<'input> {
    pub fn parse(uri: impl Into<String>, xml: &'input str) -> MappingResult<Self> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let tree = Document::parse_with_options(xml, options)?;
        Ok(Self {
            uri: uri.into(),
            tree,
        })
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn tree(&self) -> &Document<'input> {
        &self.tree
    }
}

impl std::fmt::Debug for SourceDocument<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceDocument")
            .field("uri", &self.uri)
            .field("root", &self.tree.root_element().tag_name().name())
            .finish()
    }
}
