use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fifteen Dublin Core elements that remote metadata is mapped onto.
///
/// Variants are declared in the host element set's display order, which is
/// also the order [`DcField::ALL`] iterates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DcField {
    Title,
    Subject,
    Description,
    Creator,
    Source,
    Publisher,
    Date,
    Contributor,
    Rights,
    Relation,
    Format,
    Language,
    Type,
    Identifier,
    Coverage,
}

impl DcField {
    pub const ALL: [DcField; 15] = [
        DcField::Title,
        DcField::Subject,
        DcField::Description,
        DcField::Creator,
        DcField::Source,
        DcField::Publisher,
        DcField::Date,
        DcField::Contributor,
        DcField::Rights,
        DcField::Relation,
        DcField::Format,
        DcField::Language,
        DcField::Type,
        DcField::Identifier,
        DcField::Coverage,
    ];

    /// Canonical element name, as used in catalogs and admin forms.
    pub const fn name(self) -> &'static str {
        match self {
            DcField::Title => "Title",
            DcField::Subject => "Subject",
            DcField::Description => "Description",
            DcField::Creator => "Creator",
            DcField::Source => "Source",
            DcField::Publisher => "Publisher",
            DcField::Date => "Date",
            DcField::Contributor => "Contributor",
            DcField::Rights => "Rights",
            DcField::Relation => "Relation",
            DcField::Format => "Format",
            DcField::Language => "Language",
            DcField::Type => "Type",
            DcField::Identifier => "Identifier",
            DcField::Coverage => "Coverage",
        }
    }

    /// Looks up a field by its canonical (case-sensitive) name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for DcField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DcField {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| crate::Error::UnknownField(s.to_string()))
    }
}
