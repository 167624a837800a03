//! Error types for simulation operations.
//!
//! `EmptyNeighborhood` and `PayoffLookup` signal a broken invariant in the
//! world or the agent state. Callers are expected to stop the run on them.

use crate::types::Position;
use thiserror::Error;

/// Result type for simulation operations.
pub type Result<T> = std::result::Result<T, PdError>;

/// Errors that can occur while building or running a simulation.
#[derive(Debug, Clone, Error)]
pub enum PdError {
    /// The neighbor query returned nothing, even with the center included.
    #[error("empty neighborhood at {position}: neighbor query returned no agents")]
    EmptyNeighborhood { position: Position },

    /// A move pair could not be resolved against the payoff matrix.
    #[error("payoff lookup failed for agent at {position}: {reason}")]
    PayoffLookup { position: Position, reason: String },

    /// A position outside the grid was addressed.
    #[error("position {position} is outside the {width}x{height} grid")]
    OutOfBounds {
        position: Position,
        width: usize,
        height: usize,
    },

    /// Configuration errors.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// I/O errors (wrapped).
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization errors.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for PdError {
    fn from(e: std::io::Error) -> Self {
        PdError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for PdError {
    fn from(e: serde_json::Error) -> Self {
        PdError::Serialization(e.to_string())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("invalid value for {field}: {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("{field} out of range: {value} (must be {min}-{max})")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },
}

// Convenience constructors
impl PdError {
    pub fn payoff_lookup(position: Position, reason: impl Into<String>) -> Self {
        PdError::PayoffLookup {
            position,
            reason: reason.into(),
        }
    }

    pub fn invalid_config(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        PdError::Config(ConfigError::InvalidValue {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        })
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        PdError::Config(ConfigError::MissingField(field.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_position() {
        let err = PdError::EmptyNeighborhood {
            position: Position::new(3, 4),
        };
        assert!(err.to_string().contains("(3, 4)"));

        let err = PdError::payoff_lookup(Position::new(0, 1), "no staged move");
        assert_eq!(
            err.to_string(),
            "payoff lookup failed for agent at (0, 1): no staged move"
        );
    }

    #[test]
    fn config_errors_convert() {
        let err: PdError = ConfigError::MissingField("payoff.CC".into()).into();
        assert!(matches!(err, PdError::Config(ConfigError::MissingField(_))));
        assert_eq!(err.to_string(), "config error: missing required field: payoff.CC");
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: PdError = io.into();
        assert!(matches!(err, PdError::Io(msg) if msg == "gone"));
    }
}
