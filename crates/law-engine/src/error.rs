use thiserror::Error;

/// Failures while loading law reference data
///
/// Lookups and diffs never fail; only loading a catalog or config does.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to parse law catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Duplicate jurisdiction code: {0}")]
    DuplicateJurisdiction(String),

    #[error("Jurisdiction at index {0} has an empty code")]
    EmptyCode(usize),

    #[error("Failed to parse engine config: {0}")]
    ConfigError(#[from] toml::de::Error),
}
