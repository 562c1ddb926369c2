//! Client registration form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns its three input signals and a busy flag; shared state only changes
//! on completion. Success clears the form, hands the refresh back to the
//! page via `on_registered`, switches to the dashboard tab, and raises a
//! toast. Semantic failures surface the backend's error text inline and
//! leave the form untouched.

#[cfg(test)]
#[path = "register_form_test.rs"]
mod register_form_test;

use leptos::prelude::*;

use crate::net::types::RegisterRequest;
use crate::state::ui::{FormOutcome, UiState};

/// Generic user-facing message for registration transport failures.
#[cfg(any(test, feature = "hydrate"))]
const REGISTRATION_FAILED: &str = "Registration failed";

/// Build the request body, or `None` if any trimmed field is empty.
fn registration_payload(name: &str, email: &str, phone: &str) -> Option<RegisterRequest> {
    let name = name.trim();
    let email = email.trim();
    let phone = phone.trim();
    if name.is_empty() || email.is_empty() || phone.is_empty() {
        return None;
    }
    Some(RegisterRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        phone: phone.to_owned(),
    })
}

fn submit_label(busy: bool) -> &'static str {
    if busy { "Registering..." } else { "Register Client" }
}

/// Registration form rendered in the `Register` tab.
#[component]
pub fn RegisterForm(on_registered: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(request) = registration_payload(&name.get(), &email.get(), &phone.get()) else {
            ui.update(|u| {
                u.outcome = Some(FormOutcome {
                    success: false,
                    message: "All fields are required.".to_owned(),
                });
            });
            return;
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register_client(&request).await {
                Ok(resp) if resp.success => {
                    name.set(String::new());
                    email.set(String::new());
                    phone.set(String::new());
                    on_registered.run(());
                    ui.update(UiState::registration_succeeded);
                    crate::components::toast::show_toast(
                        ui,
                        crate::state::ui::ToastKind::Success,
                        "Client registered successfully!",
                    );
                }
                Ok(resp) => {
                    ui.update(|u| {
                        u.outcome = Some(FormOutcome {
                            success: false,
                            message: resp.error.unwrap_or_else(|| REGISTRATION_FAILED.to_owned()),
                        });
                    });
                }
                Err(e) => {
                    log::error!("registration request failed: {e}");
                    ui.update(|u| {
                        u.outcome = Some(FormOutcome {
                            success: false,
                            message: REGISTRATION_FAILED.to_owned(),
                        });
                    });
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, on_registered);
        }
    };

    view! {
        <section class="panel panel--register">
            <div class="panel__header">
                <h2>"Register New Client"</h2>
            </div>
            <form class="panel__form" on:submit=on_submit>
                <label class="field">
                    "Full Name"
                    <input
                        type="text"
                        placeholder="Enter full name"
                        required=true
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    "Email Address"
                    <input
                        type="email"
                        placeholder="Enter email address"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    "Phone Number"
                    <input
                        type="tel"
                        placeholder="Enter phone number"
                        required=true
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                </label>

                <Show when=move || ui.get().outcome.is_some_and(|o| !o.success)>
                    <p class="form-error">
                        {move || ui.get().outcome.map(|o| o.message).unwrap_or_default()}
                    </p>
                </Show>

                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || submit_label(busy.get())}
                </button>
            </form>
        </section>
    }
}
