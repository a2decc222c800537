//! Dynamically-typed value model for JKSN.
//!
//! This crate provides:
//! - [`Value`] - A tagged union over the eleven JKSN kinds
//! - [`Kind`] - The variant tag and its fallback ordering
//! - [`Error`] - Coercion and limit errors
//!
//! Values coerce to booleans, integers, floats and strings with
//! JavaScript-like loose semantics, and form a single total order so that
//! any value (including arrays and objects) can serve as an object key.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod coerce;
pub mod error;
pub mod kind;
pub mod number;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod value;

pub use coerce::Float;
pub use error::{Error, ErrorKind};
pub use kind::Kind;
pub use number::Number;
pub use value::{Array, DEFAULT_MAX_DEPTH, Object, Value};

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
