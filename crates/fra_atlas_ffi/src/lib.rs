//! Flutter-facing bridge over `fra_atlas_core`.

pub mod api;
