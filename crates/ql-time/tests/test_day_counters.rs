//! Day-count conventions checked against the QuantLib test-suite values.

use ql_time::{Actual365Fixed, ActualActualIsda, Date, DayCounter, Thirty360};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── Actual/Actual ────────────────────────────────────────────────────────────

/// Cases from `testActualActual`: start date, end date, expected year fraction.
#[test]
fn test_actual_actual_isda() {
    let dc = ActualActualIsda;

    let cases: Vec<(Date, Date, f64)> = vec![
        // first example
        (date(2003, 11, 1), date(2004, 5, 1), 0.497724380567),
        // short first calculation period (first period)
        (date(1999, 2, 1), date(1999, 7, 1), 0.410958904110),
        // short first calculation period (second period)
        (date(1999, 7, 1), date(2000, 7, 1), 1.001377348600),
        // long first calculation period (first period)
        (date(2002, 8, 15), date(2003, 7, 15), 0.915068493151),
        // long first calculation period (second period)
        (date(2003, 7, 15), date(2004, 1, 15), 0.504004790778),
        // short final calculation period (penultimate period)
        (date(1999, 7, 30), date(2000, 1, 30), 0.503892506924),
        // short final calculation period (final period)
        (date(2000, 1, 30), date(2000, 6, 30), 0.415300546448),
    ];

    for (i, (d1, d2, expected)) in cases.iter().enumerate() {
        let calculated = dc.year_fraction(*d1, *d2);
        assert!(
            (calculated - expected).abs() < 1.0e-10,
            "ISDA case {i}: from {d1} to {d2}: calculated {calculated:.12}, expected {expected:.12}"
        );
    }
}

// ─── 30/360 (BondBasis) ──────────────────────────────────────────────────────

/// Test data from `testThirty360_BondBasis` in the C++ test suite.
/// Source: <https://www.isda.org/2008/12/22/30-360-day-count-conventions/>
#[test]
fn test_thirty360_bond_basis() {
    let dc = Thirty360;

    let cases: Vec<(Date, Date, i64)> = vec![
        // Example 1: End dates do not involve the last day of February
        (date(2006, 8, 20), date(2007, 2, 20), 180),
        (date(2007, 2, 20), date(2007, 8, 20), 180),
        (date(2007, 8, 20), date(2008, 2, 20), 180),
        (date(2008, 2, 20), date(2008, 8, 20), 180),
        (date(2008, 8, 20), date(2009, 2, 20), 180),
        (date(2009, 2, 20), date(2009, 8, 20), 180),
        // Example 2: End dates include some end-February dates
        (date(2006, 8, 31), date(2007, 2, 28), 178),
        (date(2007, 2, 28), date(2007, 8, 31), 183),
        (date(2007, 8, 31), date(2008, 2, 29), 179),
        (date(2008, 2, 29), date(2008, 8, 31), 182),
        (date(2008, 8, 31), date(2009, 2, 28), 178),
        (date(2009, 2, 28), date(2009, 8, 31), 183),
        // Example 3: Miscellaneous calculations
        (date(2006, 1, 31), date(2006, 2, 28), 28),
        (date(2006, 1, 30), date(2006, 2, 28), 28),
        (date(2006, 2, 28), date(2006, 3, 3), 5),
        (date(2006, 2, 14), date(2006, 2, 28), 14),
        (date(2006, 9, 30), date(2006, 10, 31), 30),
        (date(2006, 10, 31), date(2006, 11, 28), 28),
        (date(2007, 8, 31), date(2008, 2, 28), 178),
        (date(2008, 2, 28), date(2008, 8, 28), 180),
        (date(2008, 2, 28), date(2008, 8, 30), 182),
        (date(2008, 2, 28), date(2008, 8, 31), 183),
        (date(2007, 2, 26), date(2008, 2, 28), 362),
        (date(2007, 2, 26), date(2008, 2, 29), 363),
        (date(2008, 2, 29), date(2009, 2, 28), 359),
        (date(2008, 2, 28), date(2008, 3, 30), 32),
        (date(2008, 2, 28), date(2008, 3, 31), 33),
    ];

    for (d1, d2, expected) in &cases {
        let calculated = dc.day_count(*d1, *d2);
        assert_eq!(
            calculated, *expected,
            "30/360 BondBasis: from {d1} to {d2}: calculated {calculated}, expected {expected}"
        );
    }
}

// ─── Basic day counter functionality ─────────────────────────────────────────

#[test]
fn test_year_fraction_symmetry() {
    let counters: Vec<Box<dyn DayCounter>> = vec![
        Box::new(Actual365Fixed),
        Box::new(ActualActualIsda),
    ];

    let d1 = date(2003, 11, 1);
    let d2 = date(2004, 5, 1);

    for dc in &counters {
        let fwd = dc.year_fraction(d1, d2);
        let bwd = dc.year_fraction(d2, d1);
        assert!(
            (fwd + bwd).abs() < 1.0e-12,
            "{}: yf({d1}, {d2}) = {fwd}, yf({d2}, {d1}) = {bwd}",
            dc.name(),
        );
    }
}

#[test]
fn test_zero_period() {
    let counters: Vec<Box<dyn DayCounter>> = vec![
        Box::new(Actual365Fixed),
        Box::new(ActualActualIsda),
        Box::new(Thirty360),
    ];

    let d = date(2004, 6, 15);

    for dc in &counters {
        assert_eq!(dc.day_count(d, d), 0, "{}: day_count(d, d)", dc.name());
        assert_eq!(dc.year_fraction(d, d), 0.0, "{}: year_fraction(d, d)", dc.name());
    }
}

/// Consecutive days are one day apart in every actual convention, which is
/// what intra-day exercise offsets are scaled by.
#[test]
fn test_one_day_step() {
    let d = date(2024, 2, 28);
    assert!((Actual365Fixed.year_fraction(d, d + 1) - 1.0 / 365.0).abs() < 1e-15);
    assert!((ActualActualIsda.year_fraction(d, d + 1) - 1.0 / 366.0).abs() < 1e-15);
}
