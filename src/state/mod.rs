//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`directory`, `stats`, `ui`) so individual
//! components can depend on small focused models. Each lives in a
//! `RwSignal` provided via context from the root component.

pub mod directory;
pub mod stats;
pub mod ui;
