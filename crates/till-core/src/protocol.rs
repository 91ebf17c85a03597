//! # Protocol Module
//!
//! Request/response shapes for calculating a breakdown on behalf of a
//! client, plus the handler that answers them.
//!
//! ## Message Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Client                                 Calculator                      │
//! │                                                                         │
//! │  CalculationRequest ──────────────────►                                 │
//! │  {                                      calculate()                     │
//! │    "amount": 7350,                        ├─ validate amount            │
//! │    "previousResult": [...],               ├─ validate previous result   │
//! │                                           ├─ validate denominations     │
//! │    "denominations": [20000, ..., 1]       ├─ breakdown                  │
//! │  }                                        └─ difference                 │
//! │                                                                         │
//! │                   ◄──────────────────── CalculationResponse             │
//! │                                         {                               │
//! │                                           "currentResult": [...],       │
//! │                                           "difference": [...]           │
//! │                                         }                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All amounts are integer minor units. `banknotesAndCoins` is accepted in
//! place of `denominations` for older clients.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::breakdown::{breakdown, Breakdown};
use crate::denomination::DenominationSet;
use crate::difference::{difference, Difference};
use crate::error::CoreResult;
use crate::money::Amount;
use crate::validation::{validate_amount, validate_breakdown};
use crate::MAX_REQUEST_CANONICAL_SPAN;

/// Asks for the breakdown of `amount` and its difference to
/// `previous_result`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    pub amount: Amount,

    /// The client's last breakdown; empty on the first request.
    #[serde(default)]
    pub previous_result: Breakdown,

    /// Descending denominations, validated on receipt.
    #[serde(alias = "banknotesAndCoins")]
    pub denominations: Vec<Amount>,
}

/// Answer to a [`CalculationRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
    pub current_result: Breakdown,
    pub difference: Difference,
}

/// Handles one calculation request.
///
/// The difference carries the previous result's total as its context
/// amount, since that is the amount the client last saw.
///
/// ## Errors
/// - `CoreError::Validation` for a negative amount, or a previous result
///   with non-positive values, zero counts, repeated denominations or a
///   total beyond i64 minor units
/// - `CoreError::Denomination` for an empty, unsorted or non-canonical set,
///   or one spanning more than [`MAX_REQUEST_CANONICAL_SPAN`] units
///
/// ## Example
/// ```rust
/// use till_core::{calculate, Amount, Breakdown, CalculationRequest, DenominationSet};
///
/// let request = CalculationRequest {
///     amount: Amount::from_cents(7350),
///     previous_result: Breakdown::empty(),
///     denominations: DenominationSet::euro().as_slice().to_vec(),
/// };
///
/// let response = calculate(request).unwrap();
/// assert_eq!(response.current_result.total(), Amount::from_cents(7350));
/// ```
pub fn calculate(request: CalculationRequest) -> CoreResult<CalculationResponse> {
    validate_amount(request.amount)?;
    let previous_total = validate_breakdown(&request.previous_result, "previousResult")?;
    let denominations =
        DenominationSet::with_span_limit(request.denominations, MAX_REQUEST_CANONICAL_SPAN)?;

    let current_result = breakdown(request.amount, &denominations);
    let difference = difference(&current_result, &request.previous_result, previous_total);

    Ok(CalculationResponse {
        current_result,
        difference,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
