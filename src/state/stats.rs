//! Aggregate counters displayed in the console header.
//!
//! DESIGN
//! ======
//! All three counters are backend-computed and shown verbatim. Keeping them
//! out of `DirectoryState` means a failed stats refresh cannot clobber a
//! successful client refresh, and vice versa.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use crate::net::types::StatsResponse;

/// Counters from the last successful `GET /stats`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatsState {
    pub total_clients: u64,
    pub total_bots: u64,
    pub active_bots: u64,
}

impl StatsState {
    /// Replace all counters with a fresh fetch result.
    pub fn replace(&mut self, response: StatsResponse) {
        self.total_clients = response.total_clients;
        self.total_bots = response.total_bots;
        self.active_bots = response.active_bots;
    }
}
