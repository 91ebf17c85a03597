//! # Session Module
//!
//! Remembers the previous breakdown so each new amount can be diffed
//! against it.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CalculationSession::submit(amount)                   │
//! │                                                                         │
//! │  amount <= 0 ───────────────────────────────────────────► None (ignored)│
//! │                                                                         │
//! │  amount == last == one before last ─────────────────────► None (repeat) │
//! │                                                                         │
//! │  otherwise:                                                             │
//! │    1. breakdown(amount)              ──► current                        │
//! │    2. difference(current, previous)  ──► delta                          │
//! │    3. previous := current                                               │
//! │    4. Some(CalculationOutcome)                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Repeat Guard
//! Entering the same amount twice still computes once more, so the cashier
//! sees an all-"±0" difference. A third identical entry is skipped.
//!
//! ## Ordering
//! Every mutating method takes `&mut self`, and a delegated calculation
//! ([`CalculationSession::begin`]) holds that borrow until it completes.
//! Two calculations can therefore never be in flight for the same session.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::breakdown::{breakdown_with_remainder, Breakdown};
use crate::denomination::DenominationSet;
use crate::difference::{difference, Difference};
use crate::error::CoreResult;
use crate::money::Amount;
use crate::protocol::{CalculationRequest, CalculationResponse};
use crate::validation::validate_breakdown;

/// Result of one accepted calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationOutcome {
    /// The amount that was broken down.
    pub amount: Amount,

    /// Pieces to hand out for `amount`.
    pub breakdown: Breakdown,

    /// Change relative to the previous breakdown.
    pub difference: Difference,

    /// Residue the smallest denomination could not cover (normally zero).
    pub remainder: Amount,
}

/// Caller-side state between successive calculations.
#[derive(Debug, Clone)]
pub struct CalculationSession {
    id: String,
    denominations: DenominationSet,
    previous: Breakdown,
    /// Amount `previous` was computed for.
    last_amount: Amount,
    /// Amount computed before `last_amount`.
    amount_before_last: Amount,
}

impl CalculationSession {
    /// Starts a fresh session over a validated denomination set.
    pub fn new(denominations: DenominationSet) -> Self {
        CalculationSession {
            id: Uuid::new_v4().to_string(),
            denominations,
            previous: Breakdown::empty(),
            last_amount: Amount::zero(),
            amount_before_last: Amount::zero(),
        }
    }

    /// Session identifier (UUID v4), for log correlation.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn denominations(&self) -> &DenominationSet {
        &self.denominations
    }

    /// The breakdown the next calculation will be diffed against.
    pub fn previous(&self) -> &Breakdown {
        &self.previous
    }

    /// Amount of the last accepted calculation (zero before the first).
    pub fn last_amount(&self) -> Amount {
        self.last_amount
    }

    /// Whether `submit(amount)` would compute anything.
    pub fn accepts(&self, amount: Amount) -> bool {
        amount.is_positive()
            && !(amount == self.last_amount && amount == self.amount_before_last)
    }

    /// Breaks `amount` down locally and diffs it against the previous result.
    ///
    /// Returns `None` when the amount is not positive or is a repeat (see
    /// the module docs).
    ///
    /// ## Example
    /// ```rust
    /// use till_core::{Amount, CalculationSession, DenominationSet};
    ///
    /// let mut session = CalculationSession::new(DenominationSet::euro());
    ///
    /// let first = session.submit(Amount::from_cents(5000)).unwrap();
    /// assert_eq!(first.breakdown.piece_count(), 1);
    ///
    /// let second = session.submit(Amount::from_cents(7350)).unwrap();
    /// assert_eq!(second.difference.len(), 5);
    ///
    /// assert!(session.submit(Amount::zero()).is_none());
    /// ```
    pub fn submit(&mut self, amount: Amount) -> Option<CalculationOutcome> {
        if !self.accepts(amount) {
            return None;
        }

        let (current, remainder) = breakdown_with_remainder(amount, &self.denominations);
        let delta = difference(&current, &self.previous, self.last_amount);
        self.record(amount, current.clone());

        Some(CalculationOutcome {
            amount,
            breakdown: current,
            difference: delta,
            remainder,
        })
    }

    /// Starts a calculation that is carried out elsewhere (e.g. a remote
    /// calculator speaking the [`protocol`](crate::protocol) shapes).
    ///
    /// The returned handle borrows the session mutably until
    /// [`PendingCalculation::complete`] is called, so no second calculation
    /// can start in the meantime.
    pub fn begin(&mut self, amount: Amount) -> Option<PendingCalculation<'_>> {
        if !self.accepts(amount) {
            return None;
        }

        let request = CalculationRequest {
            amount,
            previous_result: self.previous.clone(),
            denominations: self.denominations.as_slice().to_vec(),
        };

        Some(PendingCalculation {
            session: self,
            amount,
            request,
        })
    }

    /// Forgets all history; the next calculation diffs against nothing.
    pub fn reset(&mut self) {
        self.previous = Breakdown::empty();
        self.last_amount = Amount::zero();
        self.amount_before_last = Amount::zero();
    }

    fn record(&mut self, amount: Amount, current: Breakdown) {
        self.amount_before_last = self.last_amount;
        self.last_amount = amount;
        self.previous = current;
    }
}

/// A calculation handed off to another party, awaiting its response.
#[derive(Debug)]
pub struct PendingCalculation<'a> {
    session: &'a mut CalculationSession,
    amount: Amount,
    request: CalculationRequest,
}

impl PendingCalculation<'_> {
    /// The request to send.
    pub fn request(&self) -> &CalculationRequest {
        &self.request
    }

    /// Stores the remote result as the new previous breakdown.
    ///
    /// A `currentResult` that fails [`validate_breakdown`] is rejected and
    /// the session keeps its previous state.
    pub fn complete(self, response: CalculationResponse) -> CoreResult<CalculationOutcome> {
        let total = validate_breakdown(&response.current_result, "currentResult")?;
        let remainder = self.amount - total;
        self.session
            .record(self.amount, response.current_result.clone());

        Ok(CalculationOutcome {
            amount: self.amount,
            breakdown: response.current_result,
            difference: response.difference,
            remainder,
        })
    }

    /// Drops the calculation without touching the session.
    pub fn abandon(self) {}
}

// =============================================================================
// Unit Tests
// =============================================================================
