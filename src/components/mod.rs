//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the console chrome and interaction surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod client_modal;
pub mod client_table;
pub mod register_form;
pub mod stats_bar;
pub mod toast;
pub mod verify_form;
