//! # Validation Module
//!
//! Turns what a cashier typed into an [`Amount`].
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Amount Input Rules                                 │
//! │                                                                         │
//! │  "  73,50 "  ──► trim ──► "73,50"                                       │
//! │                              │                                          │
//! │                              ├── empty?            → Required           │
//! │                              ├── starts with '-'?  → Negative           │
//! │                              ├── not [0-9,.]?      → InvalidCharacter   │
//! │                              ├── two separators?   → InvalidFormat      │
//! │                              ├── > 2 decimals?     → TooManyDecimals    │
//! │                              ├── > i64 cents?      → Overflow           │
//! │                              │                                          │
//! │                              ▼                                          │
//! │                        Amount(7350)                                     │
//! │                                                                         │
//! │  Both ',' and '.' are accepted as the decimal separator, so German     │
//! │  ("73,50") and English ("73.50") input parse the same way.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use till_core::validation::parse_amount;
//!
//! assert_eq!(parse_amount("73,50").unwrap().cents(), 7350);
//! assert_eq!(parse_amount("0.5").unwrap().cents(), 50);
//! assert!(parse_amount("1,234").is_err());
//! ```

use std::collections::BTreeSet;

use crate::breakdown::Breakdown;
use crate::error::ValidationError;
use crate::money::Amount;
use crate::{MINOR_DIGITS, MINOR_PER_MAJOR};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const FIELD: &str = "amount";

/// Parses a non-negative decimal amount with at most two fractional digits.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Digits plus at most one `,` or `.` separator
/// - Either side of the separator may be empty (`",5"`, `"5,"`), not both
/// - No sign: a leading `-` is rejected as negative, `+` as invalid
///
/// ## Example
/// ```rust
/// use till_core::validation::parse_amount;
/// use till_core::ValidationError;
///
/// assert_eq!(parse_amount("200").unwrap().cents(), 20000);
/// assert!(matches!(parse_amount("-3"), Err(ValidationError::Negative { .. })));
/// ```
pub fn parse_amount(input: &str) -> ValidationResult<Amount> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: FIELD.to_string(),
        });
    }

    if input.starts_with('-') {
        return Err(ValidationError::Negative {
            field: FIELD.to_string(),
        });
    }

    if let Some(found) = input
        .chars()
        .find(|c| !c.is_ascii_digit() && *c != ',' && *c != '.')
    {
        return Err(ValidationError::InvalidCharacter {
            field: FIELD.to_string(),
            found,
        });
    }

    let mut parts = input.split([',', '.']);
    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next().unwrap_or_default();

    if parts.next().is_some() {
        return Err(ValidationError::InvalidFormat {
            field: FIELD.to_string(),
            reason: "more than one decimal separator".to_string(),
        });
    }

    if whole.is_empty() && fraction.is_empty() {
        return Err(ValidationError::InvalidFormat {
            field: FIELD.to_string(),
            reason: "no digits".to_string(),
        });
    }

    if fraction.len() > MINOR_DIGITS as usize {
        return Err(ValidationError::TooManyDecimals {
            field: FIELD.to_string(),
            max: MINOR_DIGITS,
        });
    }

    let overflow = || ValidationError::Overflow {
        field: FIELD.to_string(),
    };

    let major = digits_to_i64(whole).ok_or_else(overflow)?;
    let mut minor = digits_to_i64(fraction).ok_or_else(overflow)?;
    // "0,5" means fifty cents, not five
    for _ in fraction.len()..MINOR_DIGITS as usize {
        minor *= 10;
    }

    major
        .checked_mul(MINOR_PER_MAJOR)
        .and_then(|cents| cents.checked_add(minor))
        .map(Amount::from_cents)
        .ok_or_else(overflow)
}

/// Validates an amount that arrived already typed (e.g. over the wire).
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed: it simply breaks down into nothing
pub fn validate_amount(amount: Amount) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::Negative {
            field: FIELD.to_string(),
        });
    }

    Ok(())
}

/// Validates a breakdown received from a client and returns its total.
///
/// ## Rules
/// - Every denomination > 0
/// - Every count > 0
/// - No denomination listed twice
/// - Counts and total fit into i64 minor units
///
/// Order is not checked; the Differ does not depend on it.
pub fn validate_breakdown(breakdown: &Breakdown, field: &str) -> ValidationResult<Amount> {
    let invalid = |reason: String| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason,
    };

    let mut seen = BTreeSet::new();
    for entry in breakdown {
        if !entry.denomination.is_positive() {
            return Err(invalid(format!(
                "denomination {} is not positive",
                entry.denomination
            )));
        }
        if entry.count == 0 {
            return Err(invalid(format!(
                "denomination {} has a zero count",
                entry.denomination
            )));
        }
        if !seen.insert(entry.denomination) {
            return Err(invalid(format!(
                "denomination {} is listed twice",
                entry.denomination
            )));
        }
    }

    breakdown
        .checked_total()
        .ok_or_else(|| ValidationError::Overflow {
            field: field.to_string(),
        })
}

/// Empty digit strings count as zero; `None` on overflow.
fn digits_to_i64(digits: &str) -> Option<i64> {
    digits.bytes().try_fold(0i64, |acc, b| {
        acc.checked_mul(10)?.checked_add(i64::from(b - b'0'))
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
