//! Bot identifier verification form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submits a bot ID and renders the backend's authorization verdict. No
//! retry, no rate limiting, no caching of prior results.

#[cfg(test)]
#[path = "verify_form_test.rs"]
mod verify_form_test;

use leptos::prelude::*;

use crate::net::types::VerifyRequest;
#[cfg(feature = "hydrate")]
use crate::state::ui::FormOutcome;
use crate::state::ui::UiState;

/// Generic user-facing message for verification transport failures.
#[cfg(any(test, feature = "hydrate"))]
const VERIFICATION_FAILED: &str = "Verification failed";

#[cfg(any(test, feature = "hydrate"))]
fn verify_result_message(authorized: bool) -> &'static str {
    if authorized { "Bot Authorized" } else { "Bot Not Authorized" }
}

fn submit_label(busy: bool) -> &'static str {
    if busy { "Verifying..." } else { "Verify Bot" }
}

fn result_class(success: bool) -> &'static str {
    if success { "form-result form-result--ok" } else { "form-result form-result--err" }
}

/// Verification form rendered in the `Dashboard` tab.
#[component]
pub fn VerifyForm() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let bot_id = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let id = bot_id.get().trim().to_owned();
        if id.is_empty() {
            return;
        }
        let request = VerifyRequest { bot_id: id };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::verify_bot(&request).await {
                Ok(resp) => {
                    ui.update(|u| {
                        u.outcome = Some(FormOutcome {
                            success: resp.authorized,
                            message: verify_result_message(resp.authorized).to_owned(),
                        });
                    });
                    if resp.authorized {
                        crate::components::toast::show_toast(
                            ui,
                            crate::state::ui::ToastKind::Success,
                            "Bot verified successfully!",
                        );
                    }
                }
                Err(e) => {
                    log::error!("verification request failed: {e}");
                    ui.update(|u| {
                        u.outcome = Some(FormOutcome {
                            success: false,
                            message: VERIFICATION_FAILED.to_owned(),
                        });
                    });
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    view! {
        <section class="panel panel--verify">
            <div class="panel__header">
                <h2>"Verify Bot"</h2>
            </div>
            <form class="panel__form panel__form--inline" on:submit=on_submit>
                <label class="field">
                    "Bot ID"
                    <input
                        type="text"
                        placeholder="e.g. BA0001"
                        required=true
                        prop:value=move || bot_id.get()
                        on:input=move |ev| bot_id.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || submit_label(busy.get())}
                </button>
            </form>
            <Show when=move || ui.get().outcome.is_some()>
                <p class=move || {
                    ui.get().outcome.map_or("form-result", |o| result_class(o.success))
                }>
                    {move || ui.get().outcome.map(|o| o.message).unwrap_or_default()}
                </p>
            </Show>
        </section>
    }
}
