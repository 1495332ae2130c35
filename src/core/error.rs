//! Error types for registry operations.

use std::fmt;

use thiserror::Error;

/// Kind of named entity an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A teacher and their roster.
    Teacher,
    /// A student within a roster.
    Student,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Teacher => write!(f, "teacher"),
            Self::Student => write!(f, "student"),
        }
    }
}

/// Errors produced by registry components.
///
/// Every failing call leaves the registry exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradeError {
    /// A teacher or student with this name already exists in its scope.
    #[error("{kind} `{name}` already exists")]
    NameCollision {
        /// What kind of entity collided.
        kind: EntityKind,
        /// The colliding name.
        name: String,
    },
    /// The named teacher or student does not exist.
    #[error("{kind} `{name}` not found")]
    ObjectNotFound {
        /// What kind of entity was looked up.
        kind: EntityKind,
        /// The missing name.
        name: String,
    },
    /// Assignment and exam weights do not sum to exactly one.
    #[error(
        "invalid preferences: weight_assignments ({weight_assignments}) + weight_exams ({weight_exams}) must sum to 1, got {sum}"
    )]
    InvalidPreferences {
        /// Rejected assignment weight.
        weight_assignments: f64,
        /// Rejected exam weight.
        weight_exams: f64,
        /// Their actual sum.
        sum: f64,
    },
    /// Registry configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GradeError {
    /// Build a name collision error.
    #[must_use]
    pub fn collision(kind: EntityKind, name: impl Into<String>) -> Self {
        Self::NameCollision {
            kind,
            name: name.into(),
        }
    }

    /// Build a not-found error.
    #[must_use]
    pub fn not_found(kind: EntityKind, name: impl Into<String>) -> Self {
        Self::ObjectNotFound {
            kind,
            name: name.into(),
        }
    }
}

/// Result type for core registry operations.
pub type GradeResult<T> = Result<T, GradeError>;

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
