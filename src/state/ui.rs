//! Local UI chrome state (tabs, form outcome, toast, client modal).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`directory`,
//! `stats`) so rendering controls can evolve independently of wire data.
//! Toast dismissal carries a generation counter: each `show_toast` bumps the
//! sequence and a deferred dismissal only clears the toast it was scheduled
//! for, so a stale timer cannot blank a newer notification.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::net::types::ClientRecord;

/// Mutually exclusive console tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveTab {
    /// Registration form; the initial view.
    #[default]
    Register,
    /// Client directory table and bot verification.
    Dashboard,
}

/// Toast severity, mapped to banner styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient auto-dismissing notification banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

/// Result of the last form submission (registration or verification),
/// rendered inline near the originating form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormOutcome {
    pub success: bool,
    pub message: String,
}

/// UI state for tab selection, form results, toast, and the client modal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub active_tab: ActiveTab,
    pub outcome: Option<FormOutcome>,
    pub toast: Option<Toast>,
    pub toast_seq: u64,
    pub show_client_modal: bool,
    pub selected_client: Option<ClientRecord>,
}

impl UiState {
    /// Switch tabs via a sidebar click. Resets the last form outcome so a
    /// stale result never bleeds into the other tab's form.
    pub fn select_tab(&mut self, tab: ActiveTab) {
        self.active_tab = tab;
        self.outcome = None;
    }

    /// Apply the view transition for a successful registration: clear the
    /// inline result and jump to the directory.
    pub fn registration_succeeded(&mut self) {
        self.outcome = None;
        self.active_tab = ActiveTab::Dashboard;
    }

    /// Show a toast, returning the sequence number its dismissal timer must
    /// present to [`UiState::dismiss_toast`].
    pub fn show_toast(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.toast_seq += 1;
        self.toast = Some(Toast {
            kind,
            message: message.into(),
        });
        self.toast_seq
    }

    /// Clear the toast, but only if `seq` still matches the one on display.
    /// Stale timers from replaced toasts are no-ops.
    pub fn dismiss_toast(&mut self, seq: u64) {
        if self.toast_seq == seq {
            self.toast = None;
        }
    }

    /// Open the modal focused on one record (per-row "View").
    pub fn open_client_detail(&mut self, client: ClientRecord) {
        self.selected_client = Some(client);
        self.show_client_modal = true;
    }

    /// Open the modal without a focused record (header "View All").
    pub fn open_client_modal(&mut self) {
        self.selected_client = None;
        self.show_client_modal = true;
    }

    /// Close the modal and drop the focused record.
    pub fn close_client_modal(&mut self) {
        self.show_client_modal = false;
        self.selected_client = None;
    }
}
