//! Page-local view state controllers.
//!
//! # Responsibility
//! - Own the mutable UI state of each page (filters, layers, chat, shell).
//! - Notify subscribed listeners on every effective mutation so the
//!   presentation layer can re-render.
//!
//! # Invariants
//! - Each controller exclusively owns its state; there is no shared mutable state.
//! - No-op updates emit no event and do not bump `revision()`.
//! - `unmount()` releases listeners; derived views are recomputed on read.

pub mod archive_view;
pub mod atlas_view;
pub mod chat;
pub mod dashboard_view;
pub mod listeners;
pub mod shell;
