//! Structured error types for the rocstat crates.

use thiserror::Error;

/// Unified error type for all rocstat operations.
#[derive(Debug, Error)]
pub enum RocError {
    /// Invalid input (bad arguments, mismatched lengths, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A class has no members, so a rate or variance cannot be formed
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// No threshold satisfies the requested sensitivity/specificity floor
    #[error("no cutoff satisfies {criterion} >= {target}")]
    NoQualifyingCutoff {
        /// The floored quantity (`"sensitivity"` or `"specificity"`).
        criterion: &'static str,
        /// The requested floor.
        target: f64,
    },

    /// Parse error (malformed method names, malformed boundary input)
    #[error("parse error: {0}")]
    Parse(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout rocstat.
pub type Result<T> = std::result::Result<T, RocError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = RocError::InvalidInput("lengths differ".into());
        assert_eq!(e.to_string(), "invalid input: lengths differ");

        let e = RocError::NoQualifyingCutoff {
            criterion: "sensitivity",
            target: 0.95,
        };
        assert_eq!(e.to_string(), "no cutoff satisfies sensitivity >= 0.95");
    }
}
