//! Error taxonomy for the request translation layer
//!
//! Every failure ends up as an [`ApiError`] of exactly one [`ErrorKind`].
//! Locally-raised errors are classified by type: anything coming out of the
//! filter builder or ingress translator is a [`ValidationError`] and always a
//! bad request. Storage errors arrive already tagged with their kind and are
//! forwarded with their message untouched.

use std::fmt;

use crate::domain::value_objects::IdError;

/// The four externally visible failure classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BadRequest,
    NotFound,
    Conflict,
    Internal,
}

impl ErrorKind {
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::Internal => 500,
        }
    }

    /// Prefix used in the `detail` field of error responses
    pub fn label(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "bad request",
            ErrorKind::NotFound => "not found",
            ErrorKind::Conflict => "conflict",
            ErrorKind::Internal => "internal",
        }
    }
}

/// Invalid client input. The first violated rule is reported; rules are never
/// accumulated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid {name} query parameter: '{value}'")]
    InvalidParameter { name: &'static str, value: String },

    #[error("{name} required when {when} is set")]
    MissingParameter {
        name: &'static str,
        when: &'static str,
    },

    #[error("{first} and {second} are mutually exclusive")]
    MutuallyExclusiveParameters {
        first: &'static str,
        second: &'static str,
    },

    #[error("empty {asset} {field}")]
    EmptyField {
        asset: &'static str,
        field: &'static str,
    },

    #[error("{asset} {field} exceeds maximum length")]
    FieldTooLong {
        asset: &'static str,
        field: &'static str,
    },

    #[error("invalid {field}: '{value}', {source}")]
    InvalidFormat {
        field: &'static str,
        value: String,
        source: IdError,
    },

    #[error("invalid {field}: '{value}'")]
    InvalidKind { field: &'static str, value: String },

    #[error("invalid request body: {0}")]
    MalformedBody(String),

    #[error("invalid query string: {0}")]
    MalformedQuery(String),
}

impl ValidationError {
    pub fn invalid_parameter(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            value: value.into(),
        }
    }

    pub fn invalid_format(field: &'static str, value: impl Into<String>, source: IdError) -> Self {
        Self::InvalidFormat {
            field,
            value: value.into(),
            source,
        }
    }
}

/// Errors surfaced by the storage collaborator, tagged with their kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    #[error("{entity_type} {field} '{value}' already exists")]
    Conflict {
        entity_type: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("storage failure in {operation}: {message}")]
    #[allow(dead_code)] // Raised by backends that can fail; the in-memory store cannot
    Internal {
        operation: &'static str,
        message: String,
    },
}

impl StoreError {
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::NotFound { .. } => ErrorKind::NotFound,
            StoreError::Conflict { .. } => ErrorKind::Conflict,
            StoreError::Internal { .. } => ErrorKind::Internal,
        }
    }
}

/// A classified failure, ready to be written to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    kind: ErrorKind,
    message: String,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// A response body could not be produced for `asset`.
    pub fn encoding(asset: &str, err: serde_json::Error) -> Self {
        Self::new(
            ErrorKind::Internal,
            format!("failed to encode {asset} response: {err}"),
        )
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    /// `<kind>: <message>`, as sent to clients
    pub fn detail(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.label(), self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::new(ErrorKind::BadRequest, err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::new(err.kind(), err.to_string())
    }
}
