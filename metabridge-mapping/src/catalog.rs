use crate::error::MappingResult;
use crate::query::Query;
use metabridge_types::DcField;
use std::collections::BTreeMap;

static EMPTY: QuerySet = QuerySet {
    queries: Vec::new(),
};

/// Ordered queries feeding one canonical field.
///
/// Evaluated in order; the first query that matches anything supplies all of
/// the field's values and the rest are never evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySet {
    queries: Vec<Query>,
}

impl QuerySet {
    pub fn new(queries: Vec<Query>) -> Self {
        Self { queries }
    }

    /// Parses each query text in order.
    pub fn parse<S: AsRef<str>>(sources: &[S]) -> MappingResult<Self> {
        let queries = sources
            .iter()
            .map(|s| Query::parse(s.as_ref()))
            .collect::<MappingResult<Vec<_>>>()?;
        Ok(Self { queries })
    }

    /// The shared empty set returned for unmapped fields.
    pub fn empty() -> &'static QuerySet {
        &EMPTY
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Query> {
        self.queries.iter()
    }
}

impl<'a> IntoIterator for &'a QuerySet {
    type Item = &'a Query;
    type IntoIter = std::slice::Iter<'a, Query>;

    fn into_iter(self) -> Self::IntoIter {
        self.queries.iter()
    }
}

/// Immutable table of canonical field → query set for one source schema.
///
/// Crosswalks are partial: a field missing from the table, or mapped to an
/// empty set on purpose, simply never yields values.
#[derive(Debug, Clone, Default)]
pub struct QueryCatalog {
    fields: BTreeMap<DcField, QuerySet>,
}

impl QueryCatalog {
    pub fn builder() -> QueryCatalogBuilder {
        QueryCatalogBuilder::default()
    }

    /// Query set for a canonical field name. Unknown names get the empty set.
    pub fn queries_for(&self, field_name: &str) -> &QuerySet {
        DcField::from_name(field_name)
            .map(|field| self.queries_for_field(field))
            .unwrap_or(QuerySet::empty())
    }

    pub fn queries_for_field(&self, field: DcField) -> &QuerySet {
        self.fields.get(&field).unwrap_or(QuerySet::empty())
    }

    /// Fields with at least one query, in canonical order.
    pub fn mapped_fields(&self) -> impl Iterator<Item = DcField> + '_ {
        self.fields
            .iter()
            .filter(|(_, set)| !set.is_empty())
            .map(|(field, _)| *field)
    }
}

/// Collects field mappings, parsing query text as it goes.
#[derive(Debug, Default)]
pub struct QueryCatalogBuilder {
    fields: BTreeMap<DcField, QuerySet>,
}

impl QueryCatalogBuilder {
    /// Maps `field` to the given queries, replacing any earlier mapping.
    pub fn map(mut self, field: DcField, queries: &[&str]) -> MappingResult<Self> {
        self.fields.insert(field, QuerySet::parse(queries)?);
        Ok(self)
    }

    /// Like [`Self::map`], but each matched node yields one value built from
    /// its `part` children joined by `separator`.
    pub fn map_joined(
        mut self,
        field: DcField,
        queries: &[&str],
        part: &str,
        separator: &str,
    ) -> MappingResult<Self> {
        let queries = queries
            .iter()
            .map(|q| -> MappingResult<Query> {
                Ok(Query::parse(q)?.joining_children(part, separator))
            })
            .collect::<MappingResult<Vec<_>>>()?;
        self.fields.insert(field, QuerySet::new(queries));
        Ok(self)
    }

    /// Records a field as deliberately unmapped.
    pub fn unmapped(mut self, field: DcField) -> Self {
        self.fields.insert(field, QuerySet::default());
        self
    }

    pub fn build(self) -> QueryCatalog {
        QueryCatalog {
            fields: self.fields,
        }
    }
}
