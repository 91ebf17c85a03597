//! `till breakdown <AMOUNT>`

use serde::Serialize;
use std::io::Write;
use tracing::{info, warn};

use till_core::validation::parse_amount;
use till_core::{breakdown_with_remainder, Amount, Breakdown};

use super::Context;
use crate::error::CliError;
use crate::{render, OutputFormat};

/// JSON shape of a single breakdown.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BreakdownReport<'a> {
    amount: Amount,
    breakdown: &'a Breakdown,
    remainder: Amount,
}

pub fn run<W: Write>(ctx: &Context, input: &str, out: &mut W) -> Result<(), CliError> {
    let amount = parse_amount(input)?;
    let (result, remainder) = breakdown_with_remainder(amount, &ctx.denominations);

    if !remainder.is_zero() {
        warn!(%amount, %remainder, "Amount is not a multiple of the smallest denomination");
    }
    info!(%amount, pieces = result.piece_count(), "Breakdown calculated");

    match ctx.format {
        OutputFormat::Table => {
            render::write_breakdown(out, amount, &result, remainder, &ctx.currency)?;
        }
        OutputFormat::Json => {
            let report = BreakdownReport {
                amount,
                breakdown: &result,
                remainder,
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }

    Ok(())
}
