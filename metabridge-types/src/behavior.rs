use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What happens to the values extracted for one field of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BehaviorKind {
    /// Store the extracted values as literal element text.
    ImportAsText,
    /// Store a reference back to the remote datastream instead of the text.
    ImportAsLink,
    /// Skip the field entirely.
    DoNotImport,
}

impl BehaviorKind {
    pub const ALL: [BehaviorKind; 3] = [
        BehaviorKind::ImportAsText,
        BehaviorKind::ImportAsLink,
        BehaviorKind::DoNotImport,
    ];

    /// Stable storage/form token (matches the serde representation).
    pub const fn as_str(self) -> &'static str {
        match self {
            BehaviorKind::ImportAsText => "import_as_text",
            BehaviorKind::ImportAsLink => "import_as_link",
            BehaviorKind::DoNotImport => "do_not_import",
        }
    }

    /// Human-readable label for admin displays.
    pub const fn label(self) -> &'static str {
        match self {
            BehaviorKind::ImportAsText => "Import as text",
            BehaviorKind::ImportAsLink => "Import as link",
            BehaviorKind::DoNotImport => "Do not import",
        }
    }

    /// Whether values are persisted at all under this behavior.
    pub const fn imports(self) -> bool {
        !matches!(self, BehaviorKind::DoNotImport)
    }
}

impl fmt::Display for BehaviorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BehaviorKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| crate::Error::UnknownBehavior(s.to_string()))
    }
}
