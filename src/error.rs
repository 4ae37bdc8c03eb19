//! Error types for type generation

use thiserror::Error;

/// Result type for rule and run operations
pub type Result<T> = std::result::Result<T, TypegenError>;

/// Type generation errors
///
/// Every variant is fatal for the run that raised it. Rules pass errors from
/// the rules they delegate to through unchanged.
#[derive(Error, Debug)]
pub enum TypegenError {
    #[error("Malformed schema construct '{node}' in {locator}: {reason}")]
    MalformedSchemaConstruct {
        locator: String,
        node: String,
        reason: String,
    },

    #[error("Cannot resolve type '{type_name}' for '{node}' in {locator}")]
    UnresolvableElementType {
        locator: String,
        node: String,
        type_name: String,
    },

    #[error("Cannot resolve or synthesize annotation type {name}: {source}")]
    UnresolvableAnnotationType {
        name: String,
        #[source]
        source: Box<TypegenError>,
    },

    #[error("Type synthesis failed for '{name}': {reason}")]
    TypeSynthesisFailure { name: String, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] config_crate::ConfigError),
}

impl TypegenError {
    /// Shorthand for a missing or misshapen sub-node
    pub fn malformed(
        locator: impl Into<String>,
        node: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedSchemaConstruct {
            locator: locator.into(),
            node: node.into(),
            reason: reason.into(),
        }
    }
}
