//! JKSN - a compact binary superset of JSON
//!
//! This crate re-exports the in-memory value model shared by the JKSN
//! encoder, decoder and any builder that produces values.
//!
//! # Architecture
//!
//! ```text
//! jksn_value — Value, Kind, coercions, total ordering, Error
//! ```

pub use jksn_value as value;
pub use jksn_value::{Error, ErrorKind, Kind, Result, Value};
