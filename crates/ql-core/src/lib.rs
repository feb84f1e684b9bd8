//! # ql-core
//!
//! Core types and error definitions shared by the swing option crates.
//!
//! This crate provides the foundational building blocks used across the
//! workspace: the numeric type aliases, the error enum with its `ensure!`
//! macro, and the global `Settings` holding the evaluation date.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Global library settings (evaluation date).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────
//
// Precision is fixed here at build time; switching e.g. `Real` to `f32`
// changes it for the whole workspace.

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Integer type used for general-purpose counting.
pub type Integer = i32;

/// Large integer.
pub type BigInteger = i64;

/// Non-negative integer type.
pub type Natural = u32;

/// Alias used for array sizes, indices, counts of exercise rights and
/// intra-day second offsets.
pub type Size = usize;

/// A price or value.
pub type Price = Real;

/// A time measurement in years (day-count fraction).
pub type Time = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedEvaluationDate, Settings};
