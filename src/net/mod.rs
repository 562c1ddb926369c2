//! Networking modules for the backend HTTP contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST calls and `types` defines the shared wire schema.
//! The backend owns all business logic (ID generation, persistence,
//! authorization); this layer only moves its records back and forth.

pub mod api;
pub mod types;
