//! # quantlib-swing
//!
//! Swing option exercise schedules and instrument definition, in the style of
//! [QuantLib](https://www.quantlib.org/).
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `ql-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use quantlib_swing::instruments::{
//!     OptionType, SwingExercise, VanillaForwardPayoff, VanillaSwingOption,
//! };
//! use quantlib_swing::time::{Actual365Fixed, Date};
//!
//! let from = Date::from_ymd(2024, 1, 1)?;
//! let to = Date::from_ymd(2024, 1, 31)?;
//! let exercise = Arc::new(SwingExercise::from_range(from, to, 3_600)?);
//! let times = exercise.exercise_times(&Actual365Fixed, from)?;
//! assert_eq!(times.len(), 31 * 24);
//!
//! let option = VanillaSwingOption::new(
//!     Arc::new(VanillaForwardPayoff::new(OptionType::Call, 30.0)),
//!     exercise,
//!     0,
//!     100,
//! );
//! assert!(option.is_expired_at(Date::from_ymd(2024, 2, 1)?));
//! # Ok::<(), quantlib_swing::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, settings, and error definitions.
pub use ql_core as core;

/// Date and day counter types.
pub use ql_time as time;

/// Payoffs, swing exercise, swing option, and engine arguments.
pub use ql_instruments as instruments;
