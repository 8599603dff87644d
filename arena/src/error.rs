//! Error types for arena configuration, boundary construction and world stepping.

use thiserror::Error;

use crate::definition::ArenaField;

/// Authoring errors in an arena definition.
///
/// These are never defaulted or clamped away. The caller fixes the configuration and
/// validates again.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A size field is zero or negative.
    #[error("arena field `{0}` must be strictly positive")]
    NonPositiveExtent(ArenaField),

    /// A field is NaN or infinite.
    #[error("arena field `{0}` must be finite")]
    NonFiniteValue(ArenaField),

    /// The configuration document could not be parsed.
    #[error("failed to parse arena config: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Failures while enclosing a world with its boundary.
///
/// Any of these leaves the world `Unbounded`; it must not be stepped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The physics world refused a collider, or the derived walls did not close.
    #[error("boundary registration failed: {0}")]
    RegistrationFailed(String),
}

/// Rejection reported by a physics world when it cannot accept a static collider.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistrationError {
    #[error("static body capacity of {capacity} exhausted")]
    CapacityExhausted { capacity: usize },

    #[error("static collider definition {id} has non-finite values")]
    InvalidDefinition { id: u32 },
}

/// Errors raised while driving the simulation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldError {
    /// The boundary has not been built yet.
    #[error("cannot step an unbounded world")]
    Unbounded,
}
