//! Browser interop helpers.

pub mod confirm;
