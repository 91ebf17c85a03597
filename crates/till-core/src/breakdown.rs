//! # Breakdown Module (the Denominator)
//!
//! Splits an amount into banknotes and coins, largest first.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  breakdown(73.50, euro)                                                 │
//! │                                                                         │
//! │  remaining  denomination   count   emitted                              │
//! │  ─────────  ────────────   ─────   ───────                              │
//! │    73.50       200           0       -                                  │
//! │    73.50       100           0       -                                  │
//! │    73.50        50           1     (50, 1)                              │
//! │    23.50        20           1     (20, 1)                              │
//! │     3.50        10           0       -                                  │
//! │     3.50         5           0       -                                  │
//! │     3.50         2           1     (2, 1)                               │
//! │     1.50         1           1     (1, 1)                               │
//! │     0.50       0.50          1     (0.50, 1)                            │
//! │     0.00       ...           0       -                                  │
//! │                                                                         │
//! │  Integer cents throughout: no rounding step exists.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::denomination::DenominationSet;
use crate::money::Amount;

// =============================================================================
// Breakdown Entry
// =============================================================================

/// How many pieces of one denomination to hand out.
///
/// A breakdown produced by [`breakdown`] never holds an entry with
/// `count == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownEntry {
    /// Face value of the banknote/coin.
    #[serde(alias = "banknotesAndCoins")]
    pub denomination: Amount,

    /// Number of pieces.
    pub count: u64,
}

impl BreakdownEntry {
    /// Creates an entry.
    #[inline]
    pub const fn new(denomination: Amount, count: u64) -> Self {
        BreakdownEntry {
            denomination,
            count,
        }
    }

    /// Value of all pieces in this entry (denomination × count).
    #[inline]
    pub const fn subtotal(&self) -> Amount {
        self.denomination.times(self.count)
    }
}

// =============================================================================
// Breakdown
// =============================================================================

/// Entries ordered by descending denomination.
///
/// Serializes as a bare JSON array, the `currentResult` / `previousResult`
/// shape of the calculation protocol.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(transparent)]
pub struct Breakdown(Vec<BreakdownEntry>);

impl Breakdown {
    /// An empty breakdown (nothing to hand out).
    pub fn empty() -> Self {
        Breakdown(Vec::new())
    }

    /// Wraps entries received from elsewhere (e.g. a previous result sent
    /// back by a client). No ordering is enforced; the Differ does not rely
    /// on it.
    pub fn from_entries(entries: Vec<BreakdownEntry>) -> Self {
        Breakdown(entries)
    }

    /// The entries, largest denomination first.
    pub fn entries(&self) -> &[BreakdownEntry] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &BreakdownEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of `denomination × count` over all entries.
    ///
    /// Meant for breakdowns made by [`breakdown`], whose total is the
    /// amount they were made for. Use [`Breakdown::checked_total`] on
    /// entries received from elsewhere.
    pub fn total(&self) -> Amount {
        self.0.iter().map(BreakdownEntry::subtotal).sum()
    }

    /// Sum of `denomination × count`, or `None` if it does not fit into
    /// i64 minor units.
    pub fn checked_total(&self) -> Option<Amount> {
        self.0
            .iter()
            .try_fold(0i64, |acc, e| {
                let count = i64::try_from(e.count).ok()?;
                acc.checked_add(e.denomination.cents().checked_mul(count)?)
            })
            .map(Amount::from_cents)
    }

    /// Pieces of `denomination` in this breakdown, 0 if absent.
    ///
    /// Repeated entries for one denomination are added up, saturating at
    /// `u64::MAX`.
    pub fn count_of(&self, denomination: Amount) -> u64 {
        self.0
            .iter()
            .filter(|e| e.denomination == denomination)
            .fold(0u64, |acc, e| acc.saturating_add(e.count))
    }

    /// Total number of banknotes and coins.
    pub fn piece_count(&self) -> u64 {
        self.0.iter().map(|e| e.count).sum()
    }

    /// Denominations that appear, in entry order.
    pub fn denominations(&self) -> impl Iterator<Item = Amount> + '_ {
        self.0.iter().map(|e| e.denomination)
    }
}

impl<'a> IntoIterator for &'a Breakdown {
    type Item = &'a BreakdownEntry;
    type IntoIter = std::slice::Iter<'a, BreakdownEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// =============================================================================
// Denominator
// =============================================================================

/// Greedy breakdown of `amount` into the given denominations.
///
/// ## Behavior
/// - `amount <= 0`: empty breakdown, not an error
/// - Denominations with a zero count are omitted
/// - Entries follow the set's descending order
///
/// If the smallest denomination cannot absorb the last residue (e.g. 10.52
/// with a set ending at 0.05), the residue is dropped. Use
/// [`breakdown_with_remainder`] to see it.
///
/// ## Example
/// ```rust
/// use till_core::{breakdown, Amount, BreakdownEntry, DenominationSet};
///
/// let result = breakdown(Amount::from_cents(7350), &DenominationSet::euro());
/// assert_eq!(
///     result.entries(),
///     &[
///         BreakdownEntry::new(Amount::from_cents(5000), 1),
///         BreakdownEntry::new(Amount::from_cents(2000), 1),
///         BreakdownEntry::new(Amount::from_cents(200), 1),
///         BreakdownEntry::new(Amount::from_cents(100), 1),
///         BreakdownEntry::new(Amount::from_cents(50), 1),
///     ]
/// );
/// ```
pub fn breakdown(amount: Amount, denominations: &DenominationSet) -> Breakdown {
    breakdown_with_remainder(amount, denominations).0
}

/// Like [`breakdown`], but also returns the residue nothing could cover.
///
/// The residue is zero whenever the set's smallest denomination divides the
/// amount, which always holds for sets ending at the minor unit (0.01).
pub fn breakdown_with_remainder(
    amount: Amount,
    denominations: &DenominationSet,
) -> (Breakdown, Amount) {
    reduce(amount, denominations.as_slice())
}

/// The greedy loop over a raw, descending slice.
fn reduce(amount: Amount, denominations: &[Amount]) -> (Breakdown, Amount) {
    if !amount.is_positive() {
        return (Breakdown::empty(), Amount::zero());
    }

    let mut remaining = amount;
    let mut entries = Vec::new();

    for &denomination in denominations {
        let count = remaining.whole_multiples_of(denomination);
        if count > 0 {
            entries.push(BreakdownEntry::new(denomination, count));
            remaining -= denomination * count;
        }
    }

    (Breakdown(entries), remaining)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(cents: i64, count: u64) -> BreakdownEntry {
        BreakdownEntry::new(Amount::from_cents(cents), count)
    }

    #[test]
    fn test_breakdown_73_50() {
        let result = breakdown(Amount::from_cents(7350), &DenominationSet::euro());

        assert_eq!(
            result.entries(),
            &[
                entry(5000, 1),
                entry(2000, 1),
                entry(200, 1),
                entry(100, 1),
                entry(50, 1)
            ]
        );
        assert_eq!(result.total(), Amount::from_cents(7350));
        assert_eq!(result.piece_count(), 5);
    }

    #[test]
    fn test_breakdown_multiple_pieces() {
        let result = breakdown(Amount::from_cents(123456), &DenominationSet::euro());

        assert_eq!(
            result.entries(),
            &[
                entry(20000, 6),
                entry(2000, 1),
                entry(1000, 1),
                entry(200, 2),
                entry(50, 1),
                entry(5, 1),
                entry(1, 1)
            ]
        );
        assert_eq!(result.total(), Amount::from_cents(123456));
    }

    #[test]
    fn test_breakdown_zero_and_negative() {
        let euro = DenominationSet::euro();
        assert!(breakdown(Amount::zero(), &euro).is_empty());
        assert!(breakdown(Amount::from_cents(-500), &euro).is_empty());
    }

    #[test]
    fn test_breakdown_empty_denominations() {
        let (result, rest) = reduce(Amount::from_cents(7350), &[]);
        assert!(result.is_empty());
        assert_eq!(rest, Amount::from_cents(7350));
    }

    #[test]
    fn test_breakdown_one_cent() {
        let result = breakdown(Amount::from_cents(1), &DenominationSet::euro());
        assert_eq!(result.entries(), &[entry(1, 1)]);
    }

    #[test]
    fn test_breakdown_drops_uncoverable_residue() {
        let chf = DenominationSet::new(
            [1000, 500, 200, 100, 50, 20, 10, 5]
                .map(Amount::from_cents)
                .to_vec(),
        )
        .unwrap();

        let (result, rest) = breakdown_with_remainder(Amount::from_cents(1052), &chf);
        assert_eq!(result.entries(), &[entry(1000, 1), entry(50, 1)]);
        assert_eq!(rest, Amount::from_cents(2));
        assert_eq!(result.total() + rest, Amount::from_cents(1052));

        // Same entries without the residue
        assert_eq!(breakdown(Amount::from_cents(1052), &chf), result);
    }

    #[test]
    fn test_breakdown_order_and_no_zero_counts() {
        let euro = DenominationSet::euro();
        for cents in [1, 99, 388, 7350, 19999, 50000] {
            let result = breakdown(Amount::from_cents(cents), &euro);
            assert!(result.iter().all(|e| e.count > 0));
            assert!(result
                .entries()
                .windows(2)
                .all(|w| w[0].denomination > w[1].denomination));
        }
    }

    #[test]
    fn test_count_of() {
        let result = breakdown(Amount::from_cents(45000), &DenominationSet::euro());
        assert_eq!(result.count_of(Amount::from_cents(20000)), 2);
        assert_eq!(result.count_of(Amount::from_cents(5000)), 1);
        assert_eq!(result.count_of(Amount::from_cents(10000)), 0);
    }

    #[test]
    fn test_checked_total() {
        let result = breakdown(Amount::from_cents(7350), &DenominationSet::euro());
        assert_eq!(result.checked_total(), Some(Amount::from_cents(7350)));

        let huge = Breakdown::from_entries(vec![entry(20000, 1_000_000_000_000_000)]);
        assert_eq!(huge.checked_total(), None);

        let beyond_i64 = Breakdown::from_entries(vec![entry(1, u64::MAX)]);
        assert_eq!(beyond_i64.checked_total(), None);

        let sum_overflows = Breakdown::from_entries(vec![
            entry(1, i64::MAX as u64),
            entry(2, 1),
        ]);
        assert_eq!(sum_overflows.checked_total(), None);
    }

    #[test]
    fn test_count_of_repeated_denomination() {
        let repeated = Breakdown::from_entries(vec![entry(100, 2), entry(100, 3)]);
        assert_eq!(repeated.count_of(Amount::from_cents(100)), 5);

        let saturating = Breakdown::from_entries(vec![entry(100, u64::MAX), entry(100, 1)]);
        assert_eq!(saturating.count_of(Amount::from_cents(100)), u64::MAX);
    }

    #[test]
    fn test_entry_accepts_legacy_field_name() {
        let legacy: Breakdown =
            serde_json::from_str(r#"[{"banknotesAndCoins": 5000, "count": 1}]"#).unwrap();
        assert_eq!(legacy.entries(), &[entry(5000, 1)]);
    }

    #[test]
    fn test_serializes_as_array() {
        let result = breakdown(Amount::from_cents(7000), &DenominationSet::euro());
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"[{"denomination":5000,"count":1},{"denomination":2000,"count":1}]"#
        );
    }
}
