use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DpapiError {
    #[error("Failed to load configuration: {0}")]
    ConfigError(String),

    #[error("Failed to parse document: {0}")]
    ParseError(String),

    #[error("Validation failed: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Failed to encode or decode model: {0}")]
    CodecError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

/// Reason a single field failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationErrorKind {
    #[error("is required")]
    Required,

    #[error("should match '{pattern}'")]
    Pattern { pattern: String },

    #[error("should be greater than or equal to {min}, got {value}")]
    Minimum { min: i64, value: i64 },

    #[error("should be less than or equal to {max}, got {value}")]
    Maximum { max: i64, value: i64 },

    #[error("is a duplicate of '{name}'")]
    Duplicate { name: String },

    #[error("{reason}")]
    Invalid { reason: String },
}

/// A validation failure located at a field path such as `cookie.attr[0].value`.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{path} {kind}")]
pub struct FieldError {
    pub path: String,
    #[serde(flatten)]
    pub kind: ValidationErrorKind,
}

impl FieldError {
    pub fn new(path: impl Into<String>, kind: ValidationErrorKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

/// Composite validation error. Holds every failing field, in the order found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn extend(&mut self, other: ValidationErrors) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Returns `true` when some error was reported for exactly `path`.
    pub fn has_path(&self, path: &str) -> bool {
        self.0.iter().any(|e| e.path == path)
    }

    /// `Ok(())` when nothing was collected, the composite error otherwise.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        Self(vec![error])
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<serde_json::Error> for DpapiError {
    fn from(e: serde_json::Error) -> Self {
        DpapiError::CodecError(e.to_string())
    }
}

impl From<std::io::Error> for DpapiError {
    fn from(e: std::io::Error) -> Self {
        DpapiError::IoError(e.to_string())
    }
}
