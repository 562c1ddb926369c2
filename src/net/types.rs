//! Wire DTOs for the backend HTTP contract.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads field for field so serde
//! does all the schema work. The console performs no validation beyond
//! deserialization; unknown fields are ignored and only `created_at` is
//! optional.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A registered client and its issued bot identity, as returned by
/// `GET /clients`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    /// Backend-assigned unique client identifier.
    pub client_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Backend-assigned unique bot identifier.
    pub bot_id: String,
    /// Registration date, backend-formatted. Rendered as `"N/A"` when absent.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Aggregate counters from `GET /stats`, displayed as-is with no local
/// recomputation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_clients: u64,
    pub total_bots: u64,
    pub active_bots: u64,
}

/// Body for `POST /register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Response to `POST /register`.
///
/// The backend signals semantic failure in-band: `success: false` with an
/// `error` message rather than a non-2xx status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub success: bool,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub bot_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body for `POST /verify`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub bot_id: String,
}

/// Response to `POST /verify`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub authorized: bool,
}
