//! `Date` type.
//!
//! A `Date` wraps a [`chrono::NaiveDate`] and restricts it to the range the
//! library supports, 1 January 1901 to 31 December 2199.
//!
//! # Serial number convention
//! Dates convert to and from the spreadsheet serial numbers used throughout
//! QuantLib: serial 1 is 31 December 1899, so that every date from March 1900
//! onwards carries the familiar number (45292 = 1 January 2024).  The global
//! evaluation date in [`ql_core::Settings`] is stored in this form.

use chrono::{Datelike, Local, NaiveDate};
use ql_core::errors::{Error, Result};
use ql_core::Settings;

/// `num_days_from_ce()` of 30 December 1899, the day before serial 1.
const SERIAL_OFFSET: i32 = 693_594;

/// A calendar date.
///
/// Corresponds to `QuantLib::Date`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Minimum valid date: January 1, 1901.
    pub const MIN_SERIAL: i32 = 367;

    /// Maximum valid date: December 31, 2199.
    pub const MAX_SERIAL: i32 = 109_574;

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1901..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1901, 2199]"
            )));
        }
        NaiveDate::from_ymd_opt(year.into(), month.into(), day.into())
            .map(Date)
            .ok_or_else(|| Error::Date(format!("invalid date {year}-{month:02}-{day:02}")))
    }

    /// Create a date from a serial number.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if !(Self::MIN_SERIAL..=Self::MAX_SERIAL).contains(&serial) {
            return Err(Error::Date(format!(
                "serial {serial} outside [{}, {}]",
                Self::MIN_SERIAL,
                Self::MAX_SERIAL
            )));
        }
        NaiveDate::from_num_days_from_ce_opt(serial + SERIAL_OFFSET)
            .map(Date)
            .ok_or_else(|| Error::Date(format!("serial {serial} is not representable")))
    }

    /// Today's date in the local time zone.
    pub fn todays_date() -> Result<Self> {
        Self::from_naive(Local::now().date_naive())
    }

    /// Wrap a `chrono` date, checking the supported range.
    pub fn from_naive(date: NaiveDate) -> Result<Self> {
        Self::from_serial(date.num_days_from_ce() - SERIAL_OFFSET)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0.num_days_from_ce() - SERIAL_OFFSET
    }

    /// Return the year (1901–2199).
    pub fn year(&self) -> u16 {
        // Range-checked on construction.
        self.0.year() as u16
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.0.month() as u8
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.0.day() as u8
    }

    /// The underlying `chrono` date.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self
            .serial()
            .checked_add(n)
            .ok_or_else(|| Error::Date(format!("date arithmetic: {self} + {n} days overflows")))?;
        Self::from_serial(serial)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.serial() - self.serial()
    }
}

/// The date against which instruments are evaluated.
///
/// Reads the serial stored in [`Settings`]; when none has been set, falls
/// back to [`Date::todays_date`].
pub fn evaluation_date() -> Result<Date> {
    match Settings::instance().evaluation_date_serial() {
        Some(serial) => Date::from_serial(serial),
        None => Date::todays_date(),
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        rhs.days_between(self)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%-d %B %Y"))
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({})", self.0.format("%Y-%m-%d"))
    }
}

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

// ── Tests ─────────────────────────────────────────────────────────────────────
