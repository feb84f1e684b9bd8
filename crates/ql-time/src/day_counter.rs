//! `DayCounter` trait and built-in day-count conventions.
//!
//! A day counter computes the **day count fraction** between two dates.  Swing
//! exercise schedules use it to place each exercise instant on the numerical
//! time axis of a pricing engine.

use crate::date::{is_leap_year, Date};
use chrono::Datelike;
use ql_core::{BigInteger, Real, Time};

/// A convention for counting the fraction of a year between two dates.
///
/// Corresponds to `QuantLib::DayCounter`.
pub trait DayCounter: std::fmt::Debug + Send + Sync {
    /// Human-readable name of this convention (e.g. `"Actual/365 (Fixed)"`).
    fn name(&self) -> &str;

    /// Number of days between `d1` and `d2` according to this convention.
    fn day_count(&self, d1: Date, d2: Date) -> BigInteger;

    /// Fraction of a year between `d1` and `d2`; negative when `d2 < d1`.
    fn year_fraction(&self, d1: Date, d2: Date) -> Time;
}

/// Actual/365 (Fixed) day counter.
///
/// `year_fraction = actual_days / 365`
#[derive(Debug, Clone, Copy, Default)]
pub struct Actual365Fixed;

impl DayCounter for Actual365Fixed {
    fn name(&self) -> &str {
        "Actual/365 (Fixed)"
    }

    fn day_count(&self, d1: Date, d2: Date) -> BigInteger {
        d1.days_between(d2).into()
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 365.0
    }
}

/// Thirty/360 day counter (Bond Basis / US).
///
/// `year_fraction = [360(Y2−Y1) + 30(M2−M1) + (D2−D1)] / 360`
#[derive(Debug, Clone, Copy, Default)]
pub struct Thirty360;

impl DayCounter for Thirty360 {
    fn name(&self) -> &str {
        "30/360"
    }

    fn day_count(&self, d1: Date, d2: Date) -> BigInteger {
        let (y1, m1) = (BigInteger::from(d1.year()), BigInteger::from(d1.month()));
        let (y2, m2) = (BigInteger::from(d2.year()), BigInteger::from(d2.month()));
        let mut dd1 = BigInteger::from(d1.day_of_month());
        let mut dd2 = BigInteger::from(d2.day_of_month());

        if dd1 == 31 {
            dd1 = 30;
        }
        if dd2 == 31 && dd1 == 30 {
            dd2 = 30;
        }

        360 * (y2 - y1) + 30 * (m2 - m1) + (dd2 - dd1)
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 360.0
    }
}

/// Actual/Actual (ISDA) day counter.
///
/// The year fraction accounts for leap years by splitting the period at
/// year boundaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActualActualIsda;

impl DayCounter for ActualActualIsda {
    fn name(&self) -> &str {
        "Actual/Actual (ISDA)"
    }

    fn day_count(&self, d1: Date, d2: Date) -> BigInteger {
        d1.days_between(d2).into()
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        if d1 == d2 {
            return 0.0;
        }
        if d1 > d2 {
            return -self.year_fraction(d2, d1);
        }
        let days_in = |y: u16| if is_leap_year(y) { 366.0 } else { 365.0 };
        let (y1, y2) = (d1.year(), d2.year());
        // Offsets of d1 and d2 within their own years, in days.
        let start_of = |d: Date| Real::from(d.as_naive().ordinal0());
        let mut t = Real::from(y2 - y1) - 1.0;
        t += (days_in(y1) - start_of(d1)) / days_in(y1);
        t += start_of(d2) / days_in(y2);
        t
    }
}
