//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::pages::console::ConsolePage;
use crate::state::directory::DirectoryState;
use crate::state::stats::StatsState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and mounts the single console page.
/// There is no router: the two-tab view state machine lives in `UiState`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let directory = RwSignal::new(DirectoryState::default());
    let stats = RwSignal::new(StatsState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(directory);
    provide_context(stats);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/bothub-console.css"/>
        <Title text="BotHub Central"/>

        <ConsolePage/>
    }
}
