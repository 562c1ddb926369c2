//! Transient notification banner with timed auto-dismissal.
//!
//! DESIGN
//! ======
//! `show_toast` pairs every banner with a one-shot 3-second timer carrying
//! the banner's sequence number; `UiState::dismiss_toast` ignores timers
//! whose banner was already replaced.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

use crate::state::ui::{ToastKind, UiState};

/// Seconds a toast stays visible before auto-dismissal.
pub const TOAST_DISMISS_SECS: u64 = 3;

/// Show a toast and schedule its dismissal.
pub fn show_toast(ui: RwSignal<UiState>, kind: ToastKind, message: &str) {
    let mut seq = 0;
    let text = message.to_owned();
    ui.update(|u| seq = u.show_toast(kind, text));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_secs(TOAST_DISMISS_SECS)).await;
        ui.update(|u| u.dismiss_toast(seq));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = seq;
    }
}

/// CSS class for a toast banner of the given kind.
fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    }
}

/// Banner element rendered at the root; hidden while no toast is active.
#[component]
pub fn ToastBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <Show when=move || ui.get().toast.is_some()>
            <div class=move || {
                ui.get().toast.map_or("toast", |t| toast_class(t.kind))
            }>
                {move || ui.get().toast.map(|t| t.message).unwrap_or_default()}
            </div>
        </Show>
    }
}
