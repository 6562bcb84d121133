//! Read-only record store behind the dashboard pages.
//!
//! # Responsibility
//! - Define the data access contract consumed by filters and view controllers.
//! - Load and validate the embedded seed document once per process.
//!
//! # Invariants
//! - Stored sequences keep seed order; callers rely on it for stable views.
//! - Nothing in this layer mutates records after load.

pub mod record_repo;
