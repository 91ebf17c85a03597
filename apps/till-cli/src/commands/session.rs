//! `till session`
//!
//! Reads one amount per line and answers each accepted one with its
//! breakdown and the difference to the previous breakdown. Lines that do
//! not parse are logged and skipped; the session keeps going.

use std::io::{BufRead, Write};
use tracing::{debug, info, info_span, warn};

use till_core::validation::parse_amount;
use till_core::CalculationSession;

use super::Context;
use crate::error::CliError;
use crate::{render, OutputFormat};

/// Input line that clears the session history.
const RESET: &str = "reset";

pub fn run<R, W>(ctx: &Context, input: R, out: &mut W) -> Result<(), CliError>
where
    R: BufRead,
    W: Write,
{
    let mut session = CalculationSession::new(ctx.denominations.clone());
    let span = info_span!("session", id = %session.id());
    let _enter = span.enter();

    let mut calculated = 0usize;

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        if text.eq_ignore_ascii_case(RESET) {
            session.reset();
            info!("Session reset");
            continue;
        }

        let amount = match parse_amount(text) {
            Ok(amount) => amount,
            Err(err) => {
                warn!(line = index + 1, input = %text, error = %err, "Rejected amount");
                continue;
            }
        };

        let Some(outcome) = session.submit(amount) else {
            debug!(%amount, "Amount skipped");
            continue;
        };

        if !outcome.remainder.is_zero() {
            warn!(%amount, remainder = %outcome.remainder, "Amount not fully covered");
        }

        match ctx.format {
            OutputFormat::Table => {
                if calculated > 0 {
                    writeln!(out)?;
                }
                render::write_outcome(out, &outcome, &ctx.currency)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &outcome)?;
                writeln!(out)?;
            }
        }
        out.flush()?;
        calculated += 1;
    }

    info!(calculated, "Session finished");
    Ok(())
}
