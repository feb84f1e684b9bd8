//! # ql-instruments
//!
//! Swing options: payoffs, the swing exercise schedule, the instrument itself
//! and the arguments it hands to pricing engines.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod exercise;
pub mod instrument;
pub mod option;
pub mod payoff;

pub use exercise::{SwingExercise, MAX_EXERCISE_INSTANTS, SECONDS_PER_DAY};
pub use instrument::{Instrument, PricingEngine, PricingEngineArguments, PricingResults};
pub use option::{SwingOptionArguments, VanillaSwingOption};
pub use payoff::{OptionType, Payoff, PlainVanillaPayoff, StrikedPayoff, VanillaForwardPayoff};
