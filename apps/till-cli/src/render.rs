//! # Table Rendering
//!
//! Plain-text tables for the terminal.
//!
//! ```text
//! Amount: 73,50 €
//!
//!   Denomination    Count
//!        50,00 €        1
//!        20,00 €        1
//!         2,00 €        1
//!         1,00 €        1
//!         0,50 €        1
//!
//! Difference to 50,00 €
//!   Denomination   Change
//!        50,00 €       ±0
//!        20,00 €       +1
//!         2,00 €       +1
//!         1,00 €       +1
//!         0,50 €       +1
//! ```

use std::io::{self, Write};

use till_core::difference::Change;
use till_core::session::CalculationOutcome;
use till_core::{Amount, Breakdown, DenominationSet, Difference};

use crate::config::CurrencySettings;

const DENOMINATION_WIDTH: usize = 14;
const COUNT_WIDTH: usize = 8;

/// "+1", "-2" or "±0".
pub fn format_change(change: Change) -> String {
    match change {
        Change::More(n) => format!("+{}", n),
        Change::Fewer(n) => format!("-{}", n),
        Change::Unchanged => "±0".to_string(),
    }
}

/// Writes the breakdown of `amount`, plus a warning line for any residue.
pub fn write_breakdown<W: Write>(
    out: &mut W,
    amount: Amount,
    breakdown: &Breakdown,
    remainder: Amount,
    currency: &CurrencySettings,
) -> io::Result<()> {
    writeln!(out, "Amount: {}", currency.format(amount))?;
    writeln!(out)?;

    if breakdown.is_empty() {
        writeln!(out, "  (nothing to hand out)")?;
    } else {
        writeln!(
            out,
            "  {:>dw$} {:>cw$}",
            "Denomination",
            "Count",
            dw = DENOMINATION_WIDTH,
            cw = COUNT_WIDTH
        )?;
        for entry in breakdown {
            writeln!(
                out,
                "  {:>dw$} {:>cw$}",
                currency.format(entry.denomination),
                entry.count,
                dw = DENOMINATION_WIDTH,
                cw = COUNT_WIDTH
            )?;
        }
    }

    if !remainder.is_zero() {
        writeln!(out)?;
        writeln!(out, "  Not covered: {}", currency.format(remainder))?;
    }

    Ok(())
}

/// Writes the difference table. Nothing is written for an empty difference.
pub fn write_difference<W: Write>(
    out: &mut W,
    difference: &Difference,
    currency: &CurrencySettings,
) -> io::Result<()> {
    let Some(first) = difference.entries().first() else {
        return Ok(());
    };

    writeln!(out, "Difference to {}", currency.format(first.context_amount))?;
    writeln!(
        out,
        "  {:>dw$} {:>cw$}",
        "Denomination",
        "Change",
        dw = DENOMINATION_WIDTH,
        cw = COUNT_WIDTH
    )?;
    for entry in difference {
        writeln!(
            out,
            "  {:>dw$} {:>cw$}",
            currency.format(entry.denomination),
            format_change(entry.change()),
            dw = DENOMINATION_WIDTH,
            cw = COUNT_WIDTH
        )?;
    }

    Ok(())
}

/// Writes one accepted calculation: breakdown, then difference.
pub fn write_outcome<W: Write>(
    out: &mut W,
    outcome: &CalculationOutcome,
    currency: &CurrencySettings,
) -> io::Result<()> {
    write_breakdown(
        out,
        outcome.amount,
        &outcome.breakdown,
        outcome.remainder,
        currency,
    )?;

    if !outcome.difference.is_empty() {
        writeln!(out)?;
        write_difference(out, &outcome.difference, currency)?;
    }

    Ok(())
}

/// Lists the configured banknotes and coins.
pub fn write_denominations<W: Write>(
    out: &mut W,
    set: &DenominationSet,
    currency: &CurrencySettings,
) -> io::Result<()> {
    writeln!(out, "Denominations ({}, {} values)", currency.code, set.len())?;
    for value in set.iter() {
        writeln!(out, "  {:>dw$}", currency.format(value), dw = DENOMINATION_WIDTH)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use till_core::{breakdown, difference};

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(Change::More(1)), "+1");
        assert_eq!(format_change(Change::Fewer(3)), "-3");
        assert_eq!(format_change(Change::Unchanged), "±0");
    }

    #[test]
    fn test_breakdown_table() {
        let currency = CurrencySettings::default();
        let amount = Amount::from_cents(7350);
        let result = breakdown(amount, &DenominationSet::euro());

        let text = render(|out| write_breakdown(out, amount, &result, Amount::zero(), &currency));

        assert!(text.starts_with("Amount: 73,50 €\n"));
        assert!(text.contains("50,00 €        1"));
        assert!(text.contains("0,50 €        1"));
        assert!(!text.contains("Not covered"));
    }

    #[test]
    fn test_breakdown_table_with_remainder() {
        let currency = CurrencySettings::default();
        let text = render(|out| {
            write_breakdown(
                out,
                Amount::from_cents(3),
                &Breakdown::empty(),
                Amount::from_cents(3),
                &currency,
            )
        });

        assert!(text.contains("(nothing to hand out)"));
        assert!(text.contains("Not covered: 0,03 €"));
    }

    #[test]
    fn test_difference_table() {
        let currency = CurrencySettings::default();
        let euro = DenominationSet::euro();
        let previous = breakdown(Amount::from_cents(5000), &euro);
        let current = breakdown(Amount::from_cents(7350), &euro);
        let diff = difference(&current, &previous, Amount::from_cents(5000));

        let text = render(|out| write_difference(out, &diff, &currency));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Difference to 50,00 €");
        assert!(lines[2].ends_with("±0"));
        assert!(lines[3].ends_with("+1"));
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_empty_difference_writes_nothing() {
        let currency = CurrencySettings::default();
        let text = render(|out| write_difference(out, &Difference::default(), &currency));
        assert!(text.is_empty());
    }

    #[test]
    fn test_denominations_listing() {
        let currency = CurrencySettings {
            decimal_separator: '.',
            ..CurrencySettings::default()
        };
        let text = render(|out| write_denominations(out, &DenominationSet::euro(), &currency));

        assert!(text.starts_with("Denominations (EUR, 14 values)\n"));
        assert!(text.contains("200.00 €"));
        assert!(text.contains("0.01 €"));
    }
}
