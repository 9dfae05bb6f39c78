use thiserror::Error;

/// A version literal that is not `integer.integer.integer`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Malformed version: {input:?} (expected MAJOR.MINOR.PATCH)")]
pub struct MalformedVersionError {
    pub input: String,
}

impl MalformedVersionError {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// A constraint expression that could not be parsed
///
/// Every variant carries the offending text so callers can point at it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedConstraintError {
    #[error("Unrecognized operator {operator:?} in constraint {segment:?}")]
    UnknownOperator { segment: String, operator: String },

    #[error("Invalid version in constraint {segment:?}: {source}")]
    InvalidVersion {
        segment: String,
        #[source]
        source: MalformedVersionError,
    },

    #[error("Empty segment in constraint {input:?}")]
    EmptySegment { input: String },
}

impl MalformedConstraintError {
    /// The part of the input the error refers to
    pub fn segment(&self) -> &str {
        match self {
            MalformedConstraintError::UnknownOperator { segment, .. }
            | MalformedConstraintError::InvalidVersion { segment, .. } => segment,
            MalformedConstraintError::EmptySegment { input } => input,
        }
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Rate limited: retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
