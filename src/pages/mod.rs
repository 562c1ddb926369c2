//! Page modules for top-level screens.
//!
//! ARCHITECTURE
//! ============
//! The console is a single page; it owns the tab state machine and the
//! directory-sync orchestration, and delegates rendering details to
//! `components`.

pub mod console;
