//! Bridge configuration, read from a TOML file:
//!
//! ```toml
//! [import]
//! default_behavior = "import_as_text"
//! omitted_datastreams = "RELS-EXT,RELS-INT,AUDIT"
//!
//! [display]
//! excluded_image_formats = ["jp2", "x-mrsid-image"]
//! ```
//!
//! Every key is optional. A missing or malformed file under
//! [`BridgeConfig::load_from`] yields the defaults shown above.

mod error;

pub use error::{ConfigError, ConfigResult};

use metabridge_types::{BehaviorKind, Datastream};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

pub const DEFAULT_OMITTED_DATASTREAMS: &str = "RELS-EXT,RELS-INT,AUDIT";

/// Import-side settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSettings {
    /// Behavior used when no stored rule applies.
    #[serde(default = "default_behavior")]
    pub default_behavior: BehaviorKind,
    /// Comma-separated datastream ids hidden from selection lists.
    #[serde(default = "default_omitted_datastreams")]
    pub omitted_datastreams: String,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            default_behavior: default_behavior(),
            omitted_datastreams: default_omitted_datastreams(),
        }
    }
}

/// Display-side settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Image subtypes that browsers cannot render inline.
    #[serde(default = "default_excluded_image_formats")]
    pub excluded_image_formats: Vec<String>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            excluded_image_formats: default_excluded_image_formats(),
        }
    }
}

fn default_behavior() -> BehaviorKind {
    BehaviorKind::ImportAsText
}

fn default_omitted_datastreams() -> String {
    DEFAULT_OMITTED_DATASTREAMS.to_string()
}

fn default_excluded_image_formats() -> Vec<String> {
    vec!["jp2".to_string(), "x-mrsid-image".to_string()]
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    #[serde(default)]
    pub import: ImportSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

impl BridgeConfig {
    /// Parses TOML text, failing on malformed input.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Reads and parses a config file, failing if it is missing or malformed.
    pub fn read_from(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Loads a config file, falling back to defaults with a warning when it
    /// cannot be read or parsed.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        match Self::read_from(path) {
            Ok(config) => {
                info!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Writes the config as TOML, replacing any existing file.
    pub fn save_to(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn default_behavior(&self) -> BehaviorKind {
        self.import.default_behavior
    }

    /// Omitted datastream ids, trimmed, blanks dropped.
    pub fn omitted_datastream_ids(&self) -> Vec<&str> {
        self.import
            .omitted_datastreams
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .collect()
    }

    pub fn is_datastream_omitted(&self, dsid: &str) -> bool {
        self.omitted_datastream_ids().contains(&dsid)
    }

    /// Datastreams to offer for selection, in input order.
    pub fn selectable_datastreams<'a>(&self, datastreams: &'a [Datastream]) -> Vec<&'a Datastream> {
        let omitted = self.omitted_datastream_ids();
        datastreams
            .iter()
            .filter(|ds| !omitted.contains(&ds.dsid.as_str()))
            .collect()
    }

    /// True for `image/*` types whose subtype does not start with an excluded
    /// format, so `jp2` also refuses `jp2k`. Parameters after `;` are ignored.
    pub fn can_display_image(&self, mime_type: &str) -> bool {
        let essence = mime_type.split(';').next().unwrap_or_default().trim();
        match essence.split_once('/') {
            Some((kind, subtype)) if kind.eq_ignore_ascii_case("image") && !subtype.is_empty() => {
                !self
                    .display
                    .excluded_image_formats
                    .iter()
                    .filter(|f| !f.is_empty())
                    .any(|f| starts_with_ignore_case(subtype, f))
            }
            _ => false,
        }
    }
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}
