//! In-memory client directory backing the dashboard table and modal.
//!
//! DESIGN
//! ======
//! The list is a direct reflection of the last successful `GET /clients`:
//! every refresh replaces it wholesale. The console never inserts, patches,
//! or infers records locally, so there is no merge logic to get wrong.

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;

use crate::net::types::ClientRecord;

/// Ordered client records from the last successful fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectoryState {
    pub clients: Vec<ClientRecord>,
}

impl DirectoryState {
    /// Replace the full list with a fresh fetch result.
    pub fn replace(&mut self, clients: Vec<ClientRecord>) {
        self.clients = clients;
    }
}
