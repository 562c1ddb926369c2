//! Console header: brand, aggregate counters, and the View All shortcut.

use leptos::prelude::*;

use crate::state::stats::StatsState;
use crate::state::ui::UiState;

/// Header bar showing backend-computed totals verbatim.
#[component]
pub fn StatsBar() -> impl IntoView {
    let stats = expect_context::<RwSignal<StatsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <header class="header">
            <div class="header__brand">
                <span class="header__brand-icon">"🤖"</span>
                <h1>"BotHub Central"</h1>
            </div>
            <div class="header__stats">
                <div class="stat">
                    <div class="stat__number">{move || stats.get().total_clients}</div>
                    <div class="stat__label">"Total Clients"</div>
                </div>
                <div class="stat">
                    <div class="stat__number">{move || stats.get().total_bots}</div>
                    <div class="stat__label">"Total Bots"</div>
                </div>
                <div class="stat">
                    <div class="stat__number">{move || stats.get().active_bots}</div>
                    <div class="stat__label">"Active Bots"</div>
                </div>
                <button
                    class="btn header__view-all"
                    title="View All Clients"
                    on:click=move |_| ui.update(UiState::open_client_modal)
                >
                    "View All"
                </button>
            </div>
        </header>
    }
}
