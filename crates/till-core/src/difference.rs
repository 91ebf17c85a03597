//! # Difference Module (the Differ)
//!
//! Tells the cashier what to add or take away when the amount changes.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Previous: 50.00 → [50×1]                                               │
//! │  Current:  73.50 → [50×1, 20×1, 2×1, 1×1, 0.50×1]                       │
//! │                                                                         │
//! │  difference(current, previous, 50.00)                                   │
//! │                                                                         │
//! │     50     ±0    (still on the counter)                                 │
//! │     20     +1                                                           │
//! │      2     +1                                                           │
//! │      1     +1                                                           │
//! │   0.50     +1                                                           │
//! │                                                                         │
//! │  Inclusion rule: show a denomination unless its count did not change   │
//! │  AND it is absent from the current breakdown.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::breakdown::Breakdown;
use crate::money::Amount;

// =============================================================================
// Difference Entry
// =============================================================================

/// Signed change in pieces for one denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DifferenceEntry {
    /// Face value of the banknote/coin.
    #[serde(alias = "banknotesAndCoins")]
    pub denomination: Amount,

    /// Current count minus previous count, clamped to the i64 range.
    pub count_diff: i64,

    /// Display payload: the total the previous breakdown was made for.
    /// Not used in any comparison.
    #[serde(alias = "previousAmount")]
    pub context_amount: Amount,
}

/// What a [`DifferenceEntry`] asks the cashier to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// Hand out this many more pieces.
    More(u64),
    /// Take back this many pieces.
    Fewer(u64),
    /// Count unchanged, denomination still in play.
    Unchanged,
}

impl DifferenceEntry {
    /// Classifies the entry for display.
    pub fn change(&self) -> Change {
        match self.count_diff {
            0 => Change::Unchanged,
            n if n > 0 => Change::More(n.unsigned_abs()),
            n => Change::Fewer(n.unsigned_abs()),
        }
    }
}

// =============================================================================
// Difference
// =============================================================================

/// Entries ordered by descending denomination.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(transparent)]
pub struct Difference(Vec<DifferenceEntry>);

impl Difference {
    pub fn entries(&self) -> &[DifferenceEntry] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &DifferenceEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when no entry changed its count (vacuously true when empty).
    pub fn is_unchanged(&self) -> bool {
        self.0.iter().all(|e| e.count_diff == 0)
    }

    /// The entry for `denomination`, if it was included.
    pub fn get(&self, denomination: Amount) -> Option<&DifferenceEntry> {
        self.0.iter().find(|e| e.denomination == denomination)
    }
}

impl<'a> IntoIterator for &'a Difference {
    type Item = &'a DifferenceEntry;
    type IntoIter = std::slice::Iter<'a, DifferenceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// =============================================================================
// Differ
// =============================================================================

/// Per-denomination delta from `previous` to `current`.
///
/// ## Steps
/// 1. Union of denominations in either breakdown (by value)
/// 2. `count_diff = current count - previous count`, missing counts are 0
/// 3. Skip only when `count_diff == 0` and the current count is 0
/// 4. Attach `context_amount` to every entry
/// 5. Largest denomination first
///
/// Neither input needs to be sorted.
///
/// ## Example
/// ```rust
/// use till_core::{breakdown, difference, Amount, Change, DenominationSet};
///
/// let euro = DenominationSet::euro();
/// let previous = breakdown(Amount::from_cents(2000), &euro);
/// let current = breakdown(Amount::from_cents(1500), &euro);
///
/// let diff = difference(&current, &previous, Amount::from_cents(2000));
/// let changes: Vec<_> = diff.iter().map(|e| e.change()).collect();
/// assert_eq!(changes, vec![Change::Fewer(1), Change::More(1), Change::More(1)]);
/// ```
pub fn difference(current: &Breakdown, previous: &Breakdown, context_amount: Amount) -> Difference {
    let denominations: BTreeSet<Amount> = current
        .denominations()
        .chain(previous.denominations())
        .collect();

    let entries = denominations
        .into_iter()
        .rev()
        .filter_map(|denomination| {
            let current_count = current.count_of(denomination);
            let count_diff = signed_diff(current_count, previous.count_of(denomination));

            if count_diff == 0 && current_count == 0 {
                return None;
            }

            Some(DifferenceEntry {
                denomination,
                count_diff,
                context_amount,
            })
        })
        .collect();

    Difference(entries)
}

/// `current - previous` without wrapping; counts beyond the i64 range clamp.
fn signed_diff(current: u64, previous: u64) -> i64 {
    let diff = i128::from(current) - i128::from(previous);
    i64::try_from(diff).unwrap_or(if diff < 0 { i64::MIN } else { i64::MAX })
}

// =============================================================================
// Unit Tests
// =============================================================================
