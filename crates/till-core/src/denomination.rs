//! # Denomination Module
//!
//! The set of banknotes and coins a till can hand out.
//!
//! ## Why Validate Up Front?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GREEDY ONLY WORKS FOR CANONICAL SETS                                   │
//! │                                                                         │
//! │  Euro cash:  200 100 50 20 10 5 2 1 0.50 0.20 0.10 0.05 0.02 0.01      │
//! │    6.00 → 5 + 1            (2 pieces, optimal)   ✅                    │
//! │                                                                         │
//! │  Made-up set:  4 3 1                                                    │
//! │    6 → 4 + 1 + 1           (3 pieces)                                   │
//! │    6 → 3 + 3               (2 pieces)            ❌ greedy loses        │
//! │                                                                         │
//! │  The Denominator never checks this itself. A DenominationSet can only  │
//! │  be built through `new()`, which rejects such sets at startup.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Canonicality Check
//! Values are scaled so the smallest denomination becomes `1`. By the
//! Kozen-Zaks bound, if greedy is ever beaten, it is beaten by some amount
//! below `largest + second largest`. We compute the optimal piece count for
//! every amount in that window and compare it to the greedy count.

use serde::{Deserialize, Serialize};

use crate::error::DenominationError;
use crate::money::Amount;
use crate::MAX_CANONICAL_SPAN;

/// Euro banknotes and coins in circulation at a typical till, in cents.
///
/// The 500 note is left out on purpose: tills do not hand it out.
pub const EURO_CASH_CENTS: [i64; 14] = [
    20000, 10000, 5000, 2000, 1000, 500, 200, 100, 50, 20, 10, 5, 2, 1,
];

// =============================================================================
// Denomination Set
// =============================================================================

/// A validated, strictly descending, canonical list of denominations.
///
/// ## Invariants
/// - At least one value
/// - Every value > 0
/// - Strictly descending (so no duplicates)
/// - Every value is a multiple of the smallest one
/// - Greedy breakdown is piece-count optimal
///
/// Serializes as a plain JSON array of minor units; deserializing runs the
/// same validation as [`DenominationSet::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Amount>", into = "Vec<Amount>")]
pub struct DenominationSet {
    values: Vec<Amount>,
}

impl DenominationSet {
    /// Builds a set, rejecting anything greedy reduction cannot handle.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::{Amount, DenominationError, DenominationSet};
    ///
    /// let chf = DenominationSet::new(
    ///     [1000, 500, 200, 100, 50, 20, 10, 5].map(Amount::from_cents).to_vec(),
    /// );
    /// assert!(chf.is_ok());
    ///
    /// let odd = DenominationSet::new([4, 3, 1].map(Amount::from_cents).to_vec());
    /// assert!(matches!(odd, Err(DenominationError::NotCanonical { .. })));
    /// ```
    pub fn new(values: Vec<Amount>) -> Result<Self, DenominationError> {
        Self::with_span_limit(values, MAX_CANONICAL_SPAN)
    }

    /// Like [`DenominationSet::new`], with a caller-chosen limit on the span
    /// the canonicality check may scan. Sets from untrusted callers should
    /// get a tighter limit than configured ones.
    pub fn with_span_limit(values: Vec<Amount>, max_span: i64) -> Result<Self, DenominationError> {
        check_shape(&values)?;
        check_canonical(&values, max_span)?;
        Ok(DenominationSet { values })
    }

    /// The default euro cash set (200 down to 0.01).
    pub fn euro() -> Self {
        DenominationSet {
            values: EURO_CASH_CENTS.map(Amount::from_cents).to_vec(),
        }
    }

    /// Denominations, largest first.
    pub fn iter(&self) -> impl Iterator<Item = Amount> + '_ {
        self.values.iter().copied()
    }

    /// Denominations, largest first.
    pub fn as_slice(&self) -> &[Amount] {
        &self.values
    }

    /// Number of denominations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a set built through `new()`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The largest denomination.
    pub fn largest(&self) -> Amount {
        self.values.first().copied().unwrap_or_default()
    }

    /// The smallest denomination, i.e. the resolution of every breakdown.
    pub fn smallest(&self) -> Amount {
        self.values.last().copied().unwrap_or_default()
    }

    /// Checks whether `value` is one of the denominations.
    pub fn contains(&self, value: Amount) -> bool {
        // Descending order, so binary search with reversed comparison
        self.values
            .binary_search_by(|d| value.cmp(d))
            .is_ok()
    }

    /// Checks whether `amount` can be broken down without a remainder.
    pub fn represents_exactly(&self, amount: Amount) -> bool {
        let smallest = self.smallest().cents();
        smallest > 0 && amount.cents() % smallest == 0
    }
}

impl Default for DenominationSet {
    fn default() -> Self {
        DenominationSet::euro()
    }
}

impl TryFrom<Vec<Amount>> for DenominationSet {
    type Error = DenominationError;

    fn try_from(values: Vec<Amount>) -> Result<Self, Self::Error> {
        DenominationSet::new(values)
    }
}

impl From<DenominationSet> for Vec<Amount> {
    fn from(set: DenominationSet) -> Self {
        set.values
    }
}

// =============================================================================
// Checks
// =============================================================================

/// Non-empty, positive, strictly descending, multiples of the smallest.
fn check_shape(values: &[Amount]) -> Result<(), DenominationError> {
    let smallest = *values.last().ok_or(DenominationError::Empty)?;

    if let Some(bad) = values.iter().find(|v| !v.is_positive()) {
        return Err(DenominationError::NotPositive(*bad));
    }

    if let Some(pair) = values.windows(2).find(|pair| pair[0] <= pair[1]) {
        return Err(DenominationError::NotDescending {
            previous: pair[0],
            next: pair[1],
        });
    }

    if let Some(value) = values
        .iter()
        .find(|v| v.cents() % smallest.cents() != 0)
    {
        return Err(DenominationError::NotMultipleOfSmallest {
            value: *value,
            smallest,
        });
    }

    Ok(())
}

/// Compares greedy and optimal piece counts below the Kozen-Zaks bound.
///
/// Expects `values` to have passed [`check_shape`].
fn check_canonical(values: &[Amount], max_span: i64) -> Result<(), DenominationError> {
    // {x} and {x, y} with y | x are always canonical
    if values.len() < 3 {
        return Ok(());
    }

    let smallest = values[values.len() - 1].cents();
    let units: Vec<i64> = values.iter().map(|v| v.cents() / smallest).collect();

    let span = units[0].saturating_add(units[1]);
    if span > max_span {
        return Err(DenominationError::TooWideToVerify {
            span,
            max: max_span,
        });
    }

    let span = span as usize;
    let mut optimal = vec![0u32; span];
    let mut greedy = vec![0u32; span];

    for x in 1..span {
        // The smallest unit is 1, so every x is reachable
        let best = units
            .iter()
            .filter(|&&u| u as usize <= x)
            .map(|&u| optimal[x - u as usize] + 1)
            .min()
            .unwrap_or(u32::MAX);
        optimal[x] = best;

        let first_fit = units
            .iter()
            .find(|&&u| u as usize <= x)
            .map_or(1, |&u| u as usize);
        greedy[x] = greedy[x - first_fit] + 1;

        if greedy[x] > optimal[x] {
            return Err(DenominationError::NotCanonical {
                amount: Amount::from_cents(x as i64 * smallest),
                greedy_pieces: u64::from(greedy[x]),
                optimal_pieces: u64::from(optimal[x]),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
