//! Properties that must hold across the Denominator and the Differ for
//! whole ranges of amounts, not just hand-picked ones.

use till_core::{
    breakdown, breakdown_with_remainder, difference, Amount, Breakdown, DenominationSet,
};

fn cents(value: i64) -> Amount {
    Amount::from_cents(value)
}

fn pairs(b: &Breakdown) -> Vec<(i64, u64)> {
    b.iter().map(|e| (e.denomination.cents(), e.count)).collect()
}

#[test]
fn breakdown_sums_to_amount_for_every_cent_up_to_500() {
    let euro = DenominationSet::euro();

    for value in 0..=50_000 {
        let (result, rest) = breakdown_with_remainder(cents(value), &euro);
        assert_eq!(result.total(), cents(value), "amount {value}");
        assert_eq!(rest, Amount::zero(), "amount {value}");
    }
}

#[test]
fn breakdown_is_descending_without_zero_counts() {
    let euro = DenominationSet::euro();

    for value in (0..=100_000).step_by(37) {
        let result = breakdown(cents(value), &euro);
        assert!(result.iter().all(|e| e.count > 0));
        assert!(result.iter().all(|e| euro.contains(e.denomination)));
        assert!(result
            .entries()
            .windows(2)
            .all(|w| w[0].denomination > w[1].denomination));
    }
}

#[test]
fn breakdown_residue_is_below_smallest_denomination() {
    let chf = DenominationSet::new(
        [20000, 10000, 5000, 2000, 1000, 500, 200, 100, 50, 20, 10, 5]
            .map(Amount::from_cents)
            .to_vec(),
    )
    .unwrap();

    for value in 0..=2_000 {
        let (result, rest) = breakdown_with_remainder(cents(value), &chf);
        assert!(rest < chf.smallest(), "amount {value}");
        assert_eq!(result.total() + rest, cents(value));
        assert_eq!(rest.is_zero(), chf.represents_exactly(cents(value)));
    }
}

#[test]
fn difference_of_breakdown_with_itself_is_all_zero() {
    let euro = DenominationSet::euro();

    for value in (1..=30_000).step_by(113) {
        let b = breakdown(cents(value), &euro);
        let diff = difference(&b, &b, cents(value));

        assert_eq!(diff.len(), b.len());
        assert!(diff.iter().all(|e| e.count_diff == 0));
        assert!(diff
            .iter()
            .zip(b.iter())
            .all(|(d, e)| d.denomination == e.denomination));
    }
}

#[test]
fn difference_is_descending_and_applies_cleanly() {
    let euro = DenominationSet::euro();
    let amounts = [0, 1, 388, 5000, 7350, 7351, 12_345, 20_000, 49_999];

    for &from in &amounts {
        for &to in &amounts {
            let previous = breakdown(cents(from), &euro);
            let current = breakdown(cents(to), &euro);
            let diff = difference(&current, &previous, cents(from));

            assert!(diff
                .entries()
                .windows(2)
                .all(|w| w[0].denomination > w[1].denomination));

            // previous + diff == current, denomination by denomination
            for entry in &diff {
                let before = previous.count_of(entry.denomination) as i64;
                let after = current.count_of(entry.denomination) as i64;
                assert_eq!(before + entry.count_diff, after);
            }

            // Nothing with a current count is left out
            for entry in &current {
                assert!(diff.get(entry.denomination).is_some());
            }
        }
    }
}

#[test]
fn scenario_73_50_breakdown() {
    let result = breakdown(cents(7350), &DenominationSet::euro());
    assert_eq!(
        pairs(&result),
        vec![(5000, 1), (2000, 1), (200, 1), (100, 1), (50, 1)]
    );
    assert_eq!(result.total(), cents(7350));
}

#[test]
fn scenario_73_50_repeated() {
    let euro = DenominationSet::euro();
    let previous = breakdown(cents(7350), &euro);
    let current = breakdown(cents(7350), &euro);

    let diff = difference(&current, &previous, cents(7350));
    let got: Vec<_> = diff
        .iter()
        .map(|e| (e.denomination.cents(), e.count_diff))
        .collect();
    assert_eq!(got, vec![(5000, 0), (2000, 0), (200, 0), (100, 0), (50, 0)]);
}

#[test]
fn scenario_50_to_73_50() {
    let euro = DenominationSet::euro();
    let previous = breakdown(cents(5000), &euro);
    let current = breakdown(cents(7350), &euro);

    let diff = difference(&current, &previous, cents(5000));
    let got: Vec<_> = diff
        .iter()
        .map(|e| (e.denomination.cents(), e.count_diff))
        .collect();
    assert_eq!(got, vec![(5000, 0), (2000, 1), (200, 1), (100, 1), (50, 1)]);
}

#[test]
fn scenario_zero_amount() {
    assert!(breakdown(Amount::zero(), &DenominationSet::euro()).is_empty());
    assert!(difference(&Breakdown::empty(), &Breakdown::empty(), cents(5000)).is_empty());
}
