//! Error types for the engine's configuration and parsing boundary.
//!
//! Everything past this boundary works on validated enums, so the rule
//! engines themselves never return errors.

use thiserror::Error;

/// Errors raised while building a configuration or parsing a selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Speed level outside `0..=11`.
    #[error("speed level {0} is out of range (expected 0..={max})", max = crate::config::SpeedLevel::MAX)]
    InvalidSpeedLevel(u8),

    #[error("unknown automaton rule `{0}`")]
    UnknownRule(String),

    #[error("unknown preset pattern `{0}`")]
    UnknownPreset(String),

    #[error("unknown symmetry `{0}` (expected vertical, horizontal or rotational)")]
    UnknownSymmetry(String),

    #[error("unknown size class `{0}` (expected small, medium or large)")]
    UnknownSizeClass(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            EngineError::InvalidSpeedLevel(12).to_string(),
            "speed level 12 is out of range (expected 0..=11)"
        );
        assert_eq!(
            EngineError::UnknownRule("highlife".into()).to_string(),
            "unknown automaton rule `highlife`"
        );
    }
}
