//! Integration tests for the JKSN value model.
//!
//! Tests for Value construction, coercion, ordering and copy semantics.

mod copying;
mod ordering;
