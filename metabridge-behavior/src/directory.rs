use metabridge_types::{DcField, ElementId};
use std::collections::BTreeMap;

/// Maps canonical field names to the host's element ids.
#[derive(Debug, Clone, Default)]
pub struct ElementDirectory {
    by_field: BTreeMap<DcField, ElementId>,
}

impl ElementDirectory {
    pub fn new(entries: impl IntoIterator<Item = (DcField, ElementId)>) -> Self {
        Self {
            by_field: entries.into_iter().collect(),
        }
    }

    /// Element ids of the Dublin Core element set as installed by the host
    /// CMS.
    pub fn dublin_core() -> Self {
        Self::new([
            (DcField::Contributor, ElementId::new(37)),
            (DcField::Coverage, ElementId::new(38)),
            (DcField::Creator, ElementId::new(39)),
            (DcField::Date, ElementId::new(40)),
            (DcField::Description, ElementId::new(41)),
            (DcField::Format, ElementId::new(42)),
            (DcField::Identifier, ElementId::new(43)),
            (DcField::Language, ElementId::new(44)),
            (DcField::Publisher, ElementId::new(45)),
            (DcField::Relation, ElementId::new(46)),
            (DcField::Rights, ElementId::new(47)),
            (DcField::Source, ElementId::new(48)),
            (DcField::Subject, ElementId::new(49)),
            (DcField::Title, ElementId::new(50)),
            (DcField::Type, ElementId::new(51)),
        ])
    }

    pub fn element_for(&self, field: DcField) -> Option<ElementId> {
        self.by_field.get(&field).copied()
    }

    /// Element id for a canonical field name; `None` for unknown names.
    pub fn element_named(&self, field_name: &str) -> Option<ElementId> {
        DcField::from_name(field_name).and_then(|f| self.element_for(f))
    }

    pub fn field_for(&self, element_id: ElementId) -> Option<DcField> {
        self.by_field
            .iter()
            .find(|(_, id)| **id == element_id)
            .map(|(field, _)| *field)
    }
}
