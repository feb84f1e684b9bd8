//! Strike-typed payoffs carried by swing options.
//!
//! A swing option hands its payoff to the pricing engine unexamined; the
//! engine evaluates it at every exercise instant it decides to use a right.
//! Energy swing contracts are usually written on a forward payoff (the holder
//! receives `S − K` per exercised unit, which can be negative), so both the
//! floored vanilla payoff and the unfloored forward payoff are provided.

use ql_core::Real;
use std::fmt;

/// Option type (call or put).
///
/// Corresponds to `QuantLib::Option::Type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionType {
    /// Right to buy the underlying at the strike.
    Call,
    /// Right to sell the underlying at the strike.
    Put,
}

impl OptionType {
    /// +1 for Call, −1 for Put.
    pub fn sign(self) -> Real {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

/// Base trait for payoffs.
///
/// Corresponds to `QuantLib::Payoff`.
pub trait Payoff: fmt::Debug + Send + Sync {
    /// Compute the payoff given the underlying price at exercise.
    fn value(&self, price: Real) -> Real;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> String {
        self.name().to_string()
    }
}

/// A payoff depending on a strike price.
///
/// Corresponds to `QuantLib::StrikedTypePayoff`.
pub trait StrikedPayoff: Payoff {
    /// The strike price.
    fn strike(&self) -> Real;

    /// The option type (call / put).
    fn option_type(&self) -> OptionType;
}

/// `payoff = max(φ(S − K), 0)` where `φ = +1` for Call, `−1` for Put.
///
/// Corresponds to `QuantLib::PlainVanillaPayoff`.
#[derive(Debug, Clone)]
pub struct PlainVanillaPayoff {
    /// Option type.
    pub option_type: OptionType,
    /// Strike price.
    pub strike: Real,
}

impl PlainVanillaPayoff {
    /// Create a new plain vanilla payoff.
    pub fn new(option_type: OptionType, strike: Real) -> Self {
        Self {
            option_type,
            strike,
        }
    }
}

impl Payoff for PlainVanillaPayoff {
    fn value(&self, price: Real) -> Real {
        (self.option_type.sign() * (price - self.strike)).max(0.0)
    }

    fn name(&self) -> &str {
        "Vanilla"
    }

    fn description(&self) -> String {
        format!("{} {} @ {}", self.name(), self.option_type, self.strike)
    }
}

impl StrikedPayoff for PlainVanillaPayoff {
    fn strike(&self) -> Real {
        self.strike
    }

    fn option_type(&self) -> OptionType {
        self.option_type
    }
}

/// `payoff = φ(S − K)`, not floored at zero.
///
/// Corresponds to `QuantLib::VanillaForwardPayoff`.
#[derive(Debug, Clone)]
pub struct VanillaForwardPayoff {
    /// Option type.
    pub option_type: OptionType,
    /// Strike price.
    pub strike: Real,
}

impl VanillaForwardPayoff {
    /// Create a new forward payoff.
    pub fn new(option_type: OptionType, strike: Real) -> Self {
        Self {
            option_type,
            strike,
        }
    }
}

impl Payoff for VanillaForwardPayoff {
    fn value(&self, price: Real) -> Real {
        self.option_type.sign() * (price - self.strike)
    }

    fn name(&self) -> &str {
        "ForwardTypePayoff"
    }

    fn description(&self) -> String {
        format!("{} {} @ {}", self.name(), self.option_type, self.strike)
    }
}

impl StrikedPayoff for VanillaForwardPayoff {
    fn strike(&self) -> Real {
        self.strike
    }

    fn option_type(&self) -> OptionType {
        self.option_type
    }
}
