//! # Error Types
//!
//! Domain-specific error types for till-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  till-core errors (this file)                                          │
//! │  ├── CoreError          - Anything the protocol boundary can reject    │
//! │  ├── ValidationError    - Amount input failures                        │
//! │  └── DenominationError  - Bad denomination set configuration           │
//! │                                                                         │
//! │  till-cli errors (app)                                                 │
//! │  └── CliError           - Config, I/O, JSON + wrapped core errors      │
//! │                                                                         │
//! │  Flow: ValidationError ─┐                                              │
//! │                         ├─► CoreError ─► CliError ─► exit code         │
//! │  DenominationError ─────┘                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note that the Denominator and the Differ never fail. Every error here is
//! raised *before* they run.

use thiserror::Error;

use crate::money::Amount;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised at the boundary of the core.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Denomination set rejected (wraps DenominationError).
    #[error("Invalid denominations: {0}")]
    Denomination(#[from] DenominationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Amount input validation errors.
///
/// These mirror the checks a cashier's input field performs before a
/// calculation is started.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Input contains a character that is not a digit or decimal separator.
    #[error("{field} contains invalid character '{found}'")]
    InvalidCharacter { field: String, found: char },

    /// Negative amounts are never accepted.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// More fractional digits than the currency allows.
    #[error("{field} allows at most {max} decimal places")]
    TooManyDecimals { field: String, max: u32 },

    /// Invalid format (e.g. two separators, no digits).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value does not fit into the minor-unit representation.
    #[error("{field} is too large")]
    Overflow { field: String },
}

// =============================================================================
// Denomination Error
// =============================================================================

/// Denomination set configuration errors.
///
/// ## When This Occurs
/// At startup, when the configured banknotes/coins are turned into a
/// [`DenominationSet`](crate::DenominationSet). A set that fails here must
/// never reach the Denominator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DenominationError {
    /// No denominations configured.
    #[error("Denomination set is empty")]
    Empty,

    /// A denomination of zero or less.
    #[error("Denomination {0} must be positive")]
    NotPositive(Amount),

    /// Values out of order or repeated.
    #[error("Denominations must be strictly descending: {previous} followed by {next}")]
    NotDescending { previous: Amount, next: Amount },

    /// Greedy reduction cannot hit amounts the set can represent.
    #[error("Denomination {value} is not a multiple of the smallest denomination {smallest}")]
    NotMultipleOfSmallest { value: Amount, smallest: Amount },

    /// Greedy reduction uses more pieces than necessary for some amount.
    ///
    /// ## Example
    /// ```text
    /// Set: 4, 3, 1      Amount: 6
    /// Greedy:  4 + 1 + 1  (3 pieces)
    /// Optimal: 3 + 3      (2 pieces)
    /// ```
    #[error(
        "Denomination set is not canonical: {amount} takes {greedy_pieces} pieces greedily \
         but only {optimal_pieces} optimally"
    )]
    NotCanonical {
        amount: Amount,
        greedy_pieces: u64,
        optimal_pieces: u64,
    },

    /// The set spans too many units for the canonicality check.
    #[error("Denomination set spans {span} units, more than the verifiable {max}")]
    TooWideToVerify { span: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "amount".to_string(),
        };
        assert_eq!(err.to_string(), "amount is required");

        let err = ValidationError::TooManyDecimals {
            field: "amount".to_string(),
            max: 2,
        };
        assert_eq!(err.to_string(), "amount allows at most 2 decimal places");
    }

    #[test]
    fn test_denomination_error_messages() {
        let err = DenominationError::NotDescending {
            previous: Amount::from_cents(500),
            next: Amount::from_cents(1000),
        };
        assert_eq!(
            err.to_string(),
            "Denominations must be strictly descending: 5.00 followed by 10.00"
        );

        let err = DenominationError::NotCanonical {
            amount: Amount::from_cents(600),
            greedy_pieces: 3,
            optimal_pieces: 2,
        };
        assert_eq!(
            err.to_string(),
            "Denomination set is not canonical: 6.00 takes 3 pieces greedily but only 2 optimally"
        );
    }

    #[test]
    fn test_errors_convert_to_core_error() {
        let core_err: CoreError = ValidationError::Required {
            field: "amount".to_string(),
        }
        .into();
        assert!(matches!(core_err, CoreError::Validation(_)));

        let core_err: CoreError = DenominationError::Empty.into();
        assert!(matches!(core_err, CoreError::Denomination(_)));
    }
}
