//! Error types for template lookup and layout configuration
//!
//! Rendering itself never fails. These errors only come from resolving a
//! template by name or loading a layout config.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Invalid layout config: {0}")]
    ConfigError(#[from] toml::de::Error),

    #[error("Invalid layout value for '{0}': {1}")]
    InvalidLayout(&'static str, String),
}
