//! `till denominations`

use serde::Serialize;
use std::io::Write;

use till_core::Amount;

use super::Context;
use crate::error::CliError;
use crate::{render, OutputFormat};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DenominationReport<'a> {
    currency: &'a str,
    denominations: &'a [Amount],
    smallest: Amount,
    canonical: bool,
}

/// Lists the configured set. Loading the configuration already rejected
/// any set greedy reduction would handle badly, so it is canonical here.
pub fn run<W: Write>(ctx: &Context, out: &mut W) -> Result<(), CliError> {
    match ctx.format {
        OutputFormat::Table => {
            render::write_denominations(out, &ctx.denominations, &ctx.currency)?;
            writeln!(
                out,
                "Canonical: yes (greedy breakdown always uses the fewest pieces)"
            )?;
        }
        OutputFormat::Json => {
            let report = DenominationReport {
                currency: &ctx.currency.code,
                denominations: ctx.denominations.as_slice(),
                smallest: ctx.denominations.smallest(),
                canonical: true,
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
