//! Error types for the titration core
//!
//! Three kinds of failure can surface from the core:
//!
//! - [`TitrationError::InvalidConfiguration`]: rejected at configure time
//!   (non-positive concentration or volume)
//! - [`TitrationError::InvalidArgument`]: rejected at call time
//!   (non-positive dose or tick increment)
//! - [`TitrationError::DomainError`]: a quantity left the domain of the
//!   equilibrium formulas (logarithm of a non-positive concentration)
//!
//! All errors are returned synchronously to the caller of the offending
//! operation. Nothing is retried internally, and a failed `configure()`
//! never leaves the session partially mutated.

use thiserror::Error;

/// Result type alias for titration operations
pub type Result<T> = std::result::Result<T, TitrationError>;

/// Error type for the titration engine and session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TitrationError {
    /// Configuration rejected before any state was touched
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// Operation argument rejected (e.g. a non-positive dose)
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// A quantity left the domain of the equilibrium formulas
    ///
    /// Unreachable from a validated configuration. Checked defensively so
    /// that a bug surfaces as an error instead of a NaN in the curve.
    #[error("domain error: {reason}")]
    DomainError { reason: String },
}

impl TitrationError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { reason: reason.into() }
    }

    pub(crate) fn argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument { reason: reason.into() }
    }

    pub(crate) fn domain(reason: impl Into<String>) -> Self {
        Self::DomainError { reason: reason.into() }
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_reason() {
        let err = TitrationError::config("acid molarity must be positive");
        assert_eq!(
            err.to_string(),
            "invalid configuration: acid molarity must be positive"
        );
    }

    #[test]
    fn test_kinds_are_distinguishable() {
        let config = TitrationError::config("x");
        let argument = TitrationError::argument("x");
        let domain = TitrationError::domain("x");

        assert_ne!(config, argument);
        assert_ne!(argument, domain);
        assert!(matches!(config, TitrationError::InvalidConfiguration { .. }));
        assert!(matches!(domain, TitrationError::DomainError { .. }));
    }
}
