//! `Instrument`, `PricingEngine`, and the engine-argument contract.
//!
//! An instrument never prices itself.  At pricing time it copies what the
//! engine needs into a fresh arguments value ([`Instrument::setup_arguments`]),
//! the arguments check themselves ([`PricingEngineArguments::validate`]), and
//! only then does a [`PricingEngine`] run.

use ql_core::{errors::Result, Real};
use ql_time::Date;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;

/// Results of pricing an instrument.
///
/// Contains the NPV and optionally additional named results.
#[derive(Debug, Clone, Default)]
pub struct PricingResults {
    /// Net present value.
    pub npv: Real,
    /// Error estimate (e.g. from MC simulation).
    pub error_estimate: Option<Real>,
    /// Additional named results.
    pub additional_results: HashMap<String, Real>,
}

impl PricingResults {
    /// Create pricing results with just an NPV.
    pub fn from_npv(npv: Real) -> Self {
        Self {
            npv,
            ..Self::default()
        }
    }

    /// Add a named result.
    pub fn with_result(mut self, key: impl Into<String>, value: Real) -> Self {
        self.additional_results.insert(key.into(), value);
        self
    }
}

/// Data handed from an instrument to a pricing engine.
///
/// Corresponds to `QuantLib::PricingEngine::arguments`.  Implementors are
/// plain structs; `as_any_mut` lets an instrument recognise the concrete
/// argument type it knows how to fill.
pub trait PricingEngineArguments: Any + fmt::Debug {
    /// Check that the arguments are complete and consistent.
    ///
    /// Every engine must call this before reading the arguments.
    fn validate(&self) -> Result<()>;

    /// Upcast used for downcasting to the concrete argument type.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Base trait for all pricing engines.
///
/// Corresponds to `QuantLib::PricingEngine`.
pub trait PricingEngine<Args>: fmt::Debug + Send + Sync {
    /// Price the instrument described by `args`.
    fn calculate(&self, args: &Args) -> Result<PricingResults>;
}

/// Base trait for all financial instruments.
///
/// Corresponds to `QuantLib::Instrument`.
pub trait Instrument: fmt::Debug + Send + Sync {
    /// Whether the instrument has expired as of the global evaluation date.
    fn is_expired(&self) -> bool;

    /// The maturity or last relevant date.
    fn maturity_date(&self) -> Option<Date> {
        None
    }

    /// Fill `args` with what a pricing engine needs.
    ///
    /// Fails with [`Error::TypeMismatch`](ql_core::Error::TypeMismatch) when
    /// `args` is not the argument type this instrument prices with.
    fn setup_arguments(&self, args: &mut dyn PricingEngineArguments) -> Result<()>;
}
