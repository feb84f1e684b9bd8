//! Error types for the swing option workspace.
//!
//! Every fallible operation returns [`Result`], whose error side is the single
//! `thiserror`-derived [`Error`] enum below.  Schedule and argument checks go
//! through the [`ensure!`](crate::ensure) macro, which names the variant to
//! raise alongside the failed condition.

use thiserror::Error;

/// The top-level error type.
///
/// Errors are raised at the point where an invariant is violated (object
/// construction or argument validation) and are never retried: each one
/// indicates a caller or configuration mistake.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Generic precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date construction or arithmetic out of range.
    #[error("date error: {0}")]
    Date(String),

    /// Malformed exercise dates, intra-day offsets or step size.
    #[error("invalid exercise schedule: {0}")]
    InvalidSchedule(String),

    /// Exercise-rights bounds violate `min <= max <= number of dates`.
    #[error("invalid exercise rights: {0}")]
    InvalidRights(String),

    /// Pricing arguments carry no payoff.
    #[error("no payoff given")]
    MissingPayoff,

    /// Pricing arguments carry no exercise schedule.
    #[error("no exercise given")]
    MissingExercise,

    /// An instrument was asked to fill arguments of a foreign type.
    #[error("wrong argument type: {0}")]
    TypeMismatch(String),
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return early with `Err(Error::$kind(..))` unless `$cond` holds.
///
/// The variant defaults to [`Error::Precondition`] when omitted.
///
/// # Example
/// ```
/// use ql_core::{ensure, errors::{Error, Result}};
///
/// fn step(secs: usize) -> Result<usize> {
///     ensure!(secs > 0, InvalidSchedule, "step size must be positive");
///     Ok(secs)
/// }
/// fn positive(x: f64) -> Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
///
/// assert!(step(60).is_ok());
/// assert!(matches!(step(0), Err(Error::InvalidSchedule(_))));
/// assert!(matches!(positive(-1.0), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $kind:ident, $($msg:tt)+) => {
        if !$cond {
            return Err($crate::errors::Error::$kind(format!($($msg)+)));
        }
    };
    ($cond:expr, $($msg:tt)+) => {
        $crate::ensure!($cond, Precondition, $($msg)+)
    };
}
