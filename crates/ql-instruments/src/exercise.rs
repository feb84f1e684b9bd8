//! Swing exercise schedule.
//!
//! A swing option can only be exercised at a fixed set of date-times.  Each
//! exercise instant is a calendar [`Date`] plus an optional intra-day offset in
//! seconds past midnight.  Pricing engines never look at the dates directly:
//! they ask for [`SwingExercise::exercise_times`] and build their lattice, PDE
//! or Monte-Carlo grid on the returned time axis.
//!
//! # Ordering policy
//! Explicitly supplied instants must already be strictly increasing.  The
//! constructor rejects duplicates and out-of-order input instead of sorting
//! it, so the indices callers use to attach data to exercise instants keep
//! their meaning.  Without offsets this means strictly increasing dates; with
//! offsets a date may repeat as long as its offsets increase.

use ql_core::errors::{Error, Result};
use ql_core::{ensure, Size, Time};
use ql_time::{Date, DayCounter};
use std::fmt;
use tracing::debug;

/// Number of seconds in a day; intra-day offsets live in `[0, SECONDS_PER_DAY)`.
pub const SECONDS_PER_DAY: Size = 86_400;

/// Largest schedule [`SwingExercise::from_range`] will generate (2^24, about
/// 32 years at one-minute resolution).
pub const MAX_EXERCISE_INSTANTS: Size = 1 << 24;

/// Exercise dates of a swing option with optional intra-day second offsets.
///
/// Corresponds to `QuantLib::SwingExercise`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwingExercise {
    dates: Vec<Date>,
    /// Empty, or co-indexed with `dates`.
    seconds: Vec<Size>,
}

impl SwingExercise {
    /// Create a schedule from explicit dates and per-date second offsets.
    ///
    /// Pass an empty `seconds` vector when every exercise happens at the
    /// start of its day.
    ///
    /// # Errors
    /// [`Error::InvalidSchedule`](ql_core::Error::InvalidSchedule) if `dates`
    /// is empty, if `seconds` is non-empty with a different length, if an
    /// offset is not below 86400, or if the instants are not strictly
    /// increasing.
    pub fn new(dates: Vec<Date>, seconds: Vec<Size>) -> Result<Self> {
        ensure!(!dates.is_empty(), InvalidSchedule, "no exercise date given");
        ensure!(
            seconds.is_empty() || seconds.len() == dates.len(),
            InvalidSchedule,
            "{} second offsets given for {} exercise dates",
            seconds.len(),
            dates.len()
        );
        if let Some(i) = seconds.iter().position(|&s| s >= SECONDS_PER_DAY) {
            return Err(Error::InvalidSchedule(format!(
                "second offset {} at index {i} is outside [0, {SECONDS_PER_DAY})",
                seconds[i]
            )));
        }

        let exercise = Self { dates, seconds };
        let instants: Vec<_> = exercise.instants().collect();
        if let Some(i) = instants.windows(2).position(|w| w[0] >= w[1]) {
            let (d0, s0) = instants[i];
            let (d1, s1) = instants[i + 1];
            return Err(Error::InvalidSchedule(format!(
                "exercise instants must be strictly increasing: \
                 ({d0}, {s0}s) at index {i} is not before ({d1}, {s1}s)"
            )));
        }

        debug!(
            dates = exercise.dates.len(),
            with_offsets = !exercise.seconds.is_empty(),
            last = %exercise.last_date(),
            "built swing exercise"
        );
        Ok(exercise)
    }

    /// Create a schedule spanning `from` to `to` with one exercise instant
    /// every `step_size_secs` seconds.
    ///
    /// Instants are accumulated from midnight of `from` and kept while they
    /// fall on a date no later than `to`, so the last day is covered in full.
    /// Every instant carries its second offset.
    ///
    /// # Errors
    /// [`Error::InvalidSchedule`](ql_core::Error::InvalidSchedule) if
    /// `step_size_secs` is zero, `from > to`, or the range would hold more
    /// than [`MAX_EXERCISE_INSTANTS`] instants.
    pub fn from_range(from: Date, to: Date, step_size_secs: Size) -> Result<Self> {
        ensure!(
            step_size_secs > 0,
            InvalidSchedule,
            "step size must be positive"
        );
        ensure!(
            from <= to,
            InvalidSchedule,
            "from date ({from}) must be earlier than or equal to to date ({to})"
        );

        // `from <= to`, so the day count is positive.
        let days = (from.days_between(to) + 1) as Size;
        let n = days
            .checked_mul(SECONDS_PER_DAY)
            .map(|horizon| horizon.div_ceil(step_size_secs))
            .filter(|&n| n <= MAX_EXERCISE_INSTANTS);
        let Some(n) = n else {
            return Err(Error::InvalidSchedule(format!(
                "{days} days at a {step_size_secs}s step exceed {MAX_EXERCISE_INSTANTS} instants"
            )));
        };
        let horizon = days * SECONDS_PER_DAY;

        let mut dates = Vec::with_capacity(n);
        let mut seconds = Vec::with_capacity(n);
        for secs in (0..horizon).step_by(step_size_secs) {
            // Below `days`, which fits in an i32.
            let day = (secs / SECONDS_PER_DAY) as i32;
            dates.push(from.add_days(day)?);
            seconds.push(secs % SECONDS_PER_DAY);
        }

        debug!(
            %from,
            %to,
            step_size_secs,
            instants = dates.len(),
            "generated swing exercise"
        );
        Ok(Self { dates, seconds })
    }

    /// All exercise dates, one per instant.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Intra-day offsets in seconds, empty if none were supplied.
    pub fn seconds(&self) -> &[Size] {
        &self.seconds
    }

    /// The last possible exercise date.
    pub fn last_date(&self) -> Date {
        // Construction rejects empty schedules.
        self.dates[self.dates.len() - 1]
    }

    /// Number of exercise instants.
    pub fn len(&self) -> Size {
        self.dates.len()
    }

    /// Always `false`: a schedule holds at least one instant.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// `(date, offset)` pairs, with a zero offset when none was supplied.
    pub fn instants(&self) -> impl Iterator<Item = (Date, Size)> + '_ {
        self.dates
            .iter()
            .enumerate()
            .map(|(i, &d)| (d, self.seconds.get(i).copied().unwrap_or(0)))
    }

    /// Convert the schedule to times measured by `dc` from `ref_date`.
    ///
    /// Each date maps to `dc.year_fraction(ref_date, date)`.  An intra-day
    /// offset adds the matching fraction of that day, where the length of the
    /// day is itself measured with `dc`.
    ///
    /// # Errors
    /// [`Error::InvalidSchedule`](ql_core::Error::InvalidSchedule) if an
    /// exercise instant lies before `ref_date`.
    pub fn exercise_times(&self, dc: &dyn DayCounter, ref_date: Date) -> Result<Vec<Time>> {
        let mut times = Vec::with_capacity(self.len());
        for (i, (date, secs)) in self.instants().enumerate() {
            let mut t = dc.year_fraction(ref_date, date);
            if secs != 0 {
                // 31 December 2199 has no successor; measure that day backwards.
                let dt = match date.add_days(1) {
                    Ok(next) => dc.year_fraction(ref_date, next) - t,
                    Err(_) => t - dc.year_fraction(ref_date, date.add_days(-1)?),
                };
                t += dt * secs as Time / SECONDS_PER_DAY as Time;
            }
            ensure!(
                t >= 0.0,
                InvalidSchedule,
                "exercise date {date} at index {i} is before reference date {ref_date}"
            );
            times.push(t);
        }
        Ok(times)
    }
}

impl fmt::Display for SwingExercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Swing({} instants, {} – {})",
            self.len(),
            self.dates[0],
            self.last_date()
        )
    }
}
