//! # till-core: Pure Cash Breakdown Logic
//!
//! Given an amount and a descending set of banknotes/coins, this crate works
//! out which pieces to hand over, and how that changes from one amount to
//! the next.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Till Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            Front End (till-cli, or any remote caller)           │   │
//! │  │      Amount input ──► Breakdown table ──► Difference table      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Amount / CalculationRequest            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ till-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │  ┌───────────┐  ┌──────────────┐  ┌───────────┐  ┌──────────┐  │   │
//! │  │  │   money   │  │ denomination │  │ breakdown │  │difference│  │   │
//! │  │  │  Amount   │  │DenominationSet│ │Denominator│  │  Differ  │  │   │
//! │  │  └───────────┘  └──────────────┘  └───────────┘  └──────────┘  │   │
//! │  │  ┌───────────┐  ┌──────────────┐  ┌───────────┐               │   │
//! │  │  │  session  │  │   protocol   │  │validation │               │   │
//! │  │  └───────────┘  └──────────────┘  └───────────┘               │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO LOGGING • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - `Amount` with integer minor units (no floating point!)
//! - [`denomination`] - Validated, canonical `DenominationSet`
//! - [`breakdown`] - The Denominator: amount → pieces
//! - [`difference`] - The Differ: previous pieces → current pieces
//! - [`session`] - Caller-side sequencing of successive calculations
//! - [`protocol`] - Request/response shapes for remote calculation
//! - [`validation`] - Amount input parsing
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use till_core::{breakdown, difference, Amount, DenominationSet};
//!
//! let set = DenominationSet::euro();
//!
//! let previous = breakdown(Amount::from_cents(5000), &set);
//! let current = breakdown("73,50".parse().unwrap(), &set);
//!
//! // 73.50 = 50 + 20 + 2 + 1 + 0.50
//! assert_eq!(current.piece_count(), 5);
//!
//! let diff = difference(&current, &previous, Amount::from_cents(5000));
//! // The 50 note stays, four new pieces join it.
//! assert_eq!(diff.len(), 5);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod breakdown;
pub mod denomination;
pub mod difference;
pub mod error;
pub mod money;
pub mod protocol;
pub mod session;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use breakdown::{breakdown, breakdown_with_remainder, Breakdown, BreakdownEntry};
pub use denomination::DenominationSet;
pub use difference::{difference, Change, Difference, DifferenceEntry};
pub use error::{CoreError, CoreResult, DenominationError, ValidationError};
pub use money::Amount;
pub use protocol::{calculate, CalculationRequest, CalculationResponse};
pub use session::{CalculationOutcome, CalculationSession};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of fractional digits an amount may carry.
pub const MINOR_DIGITS: u32 = 2;

/// Minor units per major unit (cents per euro).
pub const MINOR_PER_MAJOR: i64 = 100;

/// Widest span (in multiples of the smallest denomination) the canonicality
/// check will scan.
///
/// ## Business Reason
/// The check allocates one slot per unit of span. A euro cash set scans
/// 30 000 slots; anything beyond ten million is a misconfiguration.
pub const MAX_CANONICAL_SPAN: i64 = 10_000_000;

/// Span limit for denomination sets that arrive inside a calculation
/// request. Every request is validated afresh, so the limit stays close to
/// real currencies (the euro set with a 500 note spans 70 000).
pub const MAX_REQUEST_CANONICAL_SPAN: i64 = 100_000;
