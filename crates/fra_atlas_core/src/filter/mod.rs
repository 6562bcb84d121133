//! Pure filter functions over record slices.
//!
//! # Responsibility
//! - Derive the archive table and map marker subsets from filter state.
//! - Parse UI filter tokens into typed filter values.
//!
//! # Invariants
//! - Filtering never mutates inputs and preserves input order.
//! - Filtering cannot fail; an empty result is valid.
//! - Only token parsing returns errors, at the UI/CLI boundary.

pub mod archive_filter;
pub mod layer_filter;
pub mod token;
