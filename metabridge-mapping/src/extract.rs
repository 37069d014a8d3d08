//! Running query sets against parsed documents.

use crate::catalog::QuerySet;
use crate::document::SourceDocument;
use crate::importer::Importer;
use crate::query::Query;
use metabridge_types::DcField;
use roxmltree::Node;
use std::collections::BTreeMap;
use tracing::debug;

/// Non-empty field values extracted from one document, in canonical field
/// order.
pub type FieldValues = BTreeMap<DcField, Vec<String>>;

/// One extracted value together with where it came from.
#[derive(Debug, Clone)]
pub struct ExtractedValue<'a, 'input> {
    pub field: String,
    pub document_uri: &'a str,
    pub text: String,
    pub node: Node<'a, 'input>,
}

/// Values for one query set: the text of every node matched by the first
/// query that matches anything, in document order.
///
/// An empty query set, or one where nothing matches, yields an empty vector.
pub fn extract(document: &SourceDocument, queries: &QuerySet) -> Vec<String> {
    let (query, nodes) = matched_nodes(document, queries);
    query
        .map(|q| nodes.into_iter().map(|n| q.value_of(n)).collect())
        .unwrap_or_default()
}

/// Like [`extract`] for a named field of an importer's catalog, keeping the
/// originating nodes.
pub fn extract_field<'a, 'input>(
    document: &'a SourceDocument<'input>,
    importer: &Importer,
    field_name: &str,
) -> Vec<ExtractedValue<'a, 'input>> {
    let (query, nodes) = matched_nodes(document, importer.queries_for(field_name));
    let Some(query) = query else {
        return Vec::new();
    };
    nodes
        .into_iter()
        .map(|node| ExtractedValue {
            field: field_name.to_string(),
            document_uri: document.uri(),
            text: query.value_of(node),
            node,
        })
        .collect()
}

/// Runs every canonical field through the importer's catalog. Fields with no
/// values are left out.
pub fn extract_all(document: &SourceDocument, importer: &Importer) -> FieldValues {
    DcField::ALL
        .into_iter()
        .filter_map(|field| {
            let values = extract(document, importer.catalog().queries_for_field(field));
            (!values.is_empty()).then_some((field, values))
        })
        .collect()
}

/// Nodes of the first query that matches anything, with that query.
fn matched_nodes<'a, 'input, 'q>(
    document: &'a SourceDocument<'input>,
    queries: &'q QuerySet,
) -> (Option<&'q Query>, Vec<Node<'a, 'input>>) {
    for (position, query) in queries.iter().enumerate() {
        let nodes = query.select(document.tree());
        if !nodes.is_empty() {
            debug!(
                uri = document.uri(),
                query = query.as_str(),
                position,
                matches = nodes.len(),
                "Query matched"
            );
            return (Some(query), nodes);
        }
    }
    (None, Vec::new())
}
