//! Single-page client console: header, tab sidebar, forms, directory.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns directory-sync orchestration: one full fetch of clients and stats on
//! mount, and a re-fetch after every successful mutation. Refresh failures
//! are logged and otherwise silent; stale data stays on screen.

#[cfg(test)]
#[path = "console_test.rs"]
mod console_test;

use leptos::prelude::*;

use crate::components::client_modal::ClientModal;
use crate::components::client_table::ClientTable;
use crate::components::register_form::RegisterForm;
use crate::components::stats_bar::StatsBar;
use crate::components::toast::ToastBanner;
use crate::components::verify_form::VerifyForm;
use crate::state::directory::DirectoryState;
use crate::state::stats::StatsState;
use crate::state::ui::{ActiveTab, UiState};

/// Re-fetch the full client list and the aggregate counters.
///
/// Both requests run independently; either failure leaves its prior state
/// untouched and is reported only to the diagnostic log.
pub fn reload_directory(directory: RwSignal<DirectoryState>, stats: RwSignal<StatsState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_clients().await {
                Ok(clients) => directory.update(|d| d.replace(clients)),
                Err(e) => log::error!("failed to fetch clients: {e}"),
            }
        });
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_stats().await {
                Ok(resp) => stats.update(|s| s.replace(resp)),
                Err(e) => log::error!("failed to fetch stats: {e}"),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (directory, stats);
    }
}

fn tab_class(selected: bool) -> &'static str {
    if selected { "nav-item nav-item--active" } else { "nav-item" }
}

/// The console page. Two tabs: registration (initial) and the dashboard
/// with the directory table and bot verification.
#[component]
pub fn ConsolePage() -> impl IntoView {
    let directory = expect_context::<RwSignal<DirectoryState>>();
    let stats = expect_context::<RwSignal<StatsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    // Initial directory sync, once per mount.
    let loaded = RwSignal::new(false);
    Effect::new(move || {
        if loaded.get() {
            return;
        }
        reload_directory(directory, stats);
        loaded.set(true);
    });

    let refresh = Callback::new(move |()| reload_directory(directory, stats));

    let select_register = move |_| ui.update(|u| u.select_tab(ActiveTab::Register));
    let select_dashboard = move |_| ui.update(|u| u.select_tab(ActiveTab::Dashboard));

    view! {
        <div class="console">
            <StatsBar/>

            <div class="console__layout">
                <nav class="sidebar">
                    <button
                        class=move || tab_class(ui.get().active_tab == ActiveTab::Register)
                        on:click=select_register
                    >
                        <span class="nav-item__icon">"👥"</span>
                        <span class="nav-item__label">"Clients"</span>
                    </button>
                    <button
                        class=move || tab_class(ui.get().active_tab == ActiveTab::Dashboard)
                        on:click=select_dashboard
                    >
                        <span class="nav-item__icon">"🏠"</span>
                        <span class="nav-item__label">"Dashboard"</span>
                    </button>
                </nav>

                <main class="console__main">
                    <Show when=move || ui.get().active_tab == ActiveTab::Register>
                        <RegisterForm on_registered=refresh/>
                    </Show>
                    <Show when=move || ui.get().active_tab == ActiveTab::Dashboard>
                        <ClientTable on_mutated=refresh/>
                        <VerifyForm/>
                    </Show>
                </main>
            </div>

            <ToastBanner/>

            <Show when=move || ui.get().show_client_modal>
                <ClientModal/>
            </Show>
        </div>
    }
}
