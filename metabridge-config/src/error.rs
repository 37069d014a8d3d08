use thiserror::Error;

/// Result type for strict configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors from the strict loaders. [`crate::BridgeConfig::load_from`] never
/// returns these; it logs them and falls back to defaults.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
