//! `till calculate`
//!
//! Answers one [`CalculationRequest`] read from stdin. The denominations
//! come with the request, so the configured set is not used.

use std::io::{Read, Write};
use tracing::{debug, info};

use till_core::{calculate, CalculationRequest};

use crate::error::CliError;

pub fn run<R: Read, W: Write>(input: R, out: &mut W) -> Result<(), CliError> {
    let request: CalculationRequest = serde_json::from_reader(input)?;
    debug!(
        amount = %request.amount,
        previous_entries = request.previous_result.len(),
        denominations = request.denominations.len(),
        "Calculation request received"
    );

    let response = calculate(request)?;
    info!(
        pieces = response.current_result.piece_count(),
        changed = response.difference.len(),
        "Calculation answered"
    );

    serde_json::to_writer(&mut *out, &response)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use till_core::{CoreError, DenominationError};

    fn answer(request: &str) -> Result<serde_json::Value, CliError> {
        let mut out = Vec::new();
        run(request.as_bytes(), &mut out)?;
        Ok(serde_json::from_slice(&out).unwrap())
    }

    #[test]
    fn test_calculate_against_previous_result() {
        let json = answer(
            r#"{
                "amount": 7350,
                "previousResult": [{"denomination": 5000, "count": 1}],
                "denominations": [20000, 10000, 5000, 2000, 1000, 500, 200, 100, 50, 20, 10, 5, 2, 1]
            }"#,
        )
        .unwrap();

        assert_eq!(json["currentResult"].as_array().unwrap().len(), 5);
        assert_eq!(json["difference"][0]["denomination"], 5000);
        assert_eq!(json["difference"][0]["countDiff"], 0);
        assert_eq!(json["difference"][0]["contextAmount"], 5000);
        assert_eq!(json["difference"][1]["countDiff"], 1);
    }

    #[test]
    fn test_calculate_rejects_overflowing_previous_result() {
        let err = answer(
            r#"{
                "amount": 100,
                "previousResult": [{"denomination": 1, "count": 18446744073709551615}],
                "denominations": [100, 50, 10, 5, 1]
            }"#,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Core(CoreError::Validation(_))));
    }

    #[test]
    fn test_calculate_malformed_request() {
        let err = answer(r#"{"amount": "lots"}"#).unwrap_err();
        assert!(matches!(err, CliError::Json(_)));
    }

    #[test]
    fn test_calculate_invalid_denominations() {
        let err = answer(r#"{"amount": 600, "denominations": [4, 3, 1]}"#).unwrap_err();
        assert!(matches!(
            err,
            CliError::Core(CoreError::Denomination(DenominationError::NotCanonical { .. }))
        ));
    }
}
