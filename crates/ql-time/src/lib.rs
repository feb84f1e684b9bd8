//! # ql-time
//!
//! Date and day-counter types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type and evaluation-date lookup.
pub mod date;

/// `DayCounter` trait and built-in day-count conventions.
pub mod day_counter;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{evaluation_date, Date};
pub use day_counter::{Actual365Fixed, ActualActualIsda, DayCounter, Thirty360};
