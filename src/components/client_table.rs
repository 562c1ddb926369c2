//! Client directory table with per-row view and delete actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The summary table omits phone (the modal shows it). Delete goes through
//! a blocking browser confirmation; a confirmed delete re-fetches the
//! directory and stats via `on_mutated` rather than patching the list
//! locally.

#[cfg(test)]
#[path = "client_table_test.rs"]
mod client_table_test;

use leptos::prelude::*;

use crate::state::directory::DirectoryState;
use crate::state::ui::UiState;
use crate::util::confirm::confirm;

const DELETE_PROMPT: &str = "Are you sure you want to delete this client?";

/// Render the registration date, falling back to `"N/A"` when the backend
/// sent none.
pub(crate) fn created_at_label(created_at: Option<&str>) -> String {
    created_at.map_or_else(|| "N/A".to_owned(), ToOwned::to_owned)
}

fn row_class(index: usize) -> &'static str {
    if index % 2 == 0 { "even" } else { "odd" }
}

/// Confirm and issue a delete for one client. Declining issues no request
/// and changes no state.
fn request_delete(client_id: String, ui: RwSignal<UiState>, on_mutated: Callback<()>) {
    if !confirm(DELETE_PROMPT) {
        return;
    }

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::delete_client(&client_id).await {
            Ok(()) => {
                on_mutated.run(());
                crate::components::toast::show_toast(
                    ui,
                    crate::state::ui::ToastKind::Success,
                    "Client deleted successfully!",
                );
            }
            Err(e) => {
                log::error!("delete request failed: {e}");
                crate::components::toast::show_toast(
                    ui,
                    crate::state::ui::ToastKind::Error,
                    "Failed to delete client",
                );
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (client_id, ui, on_mutated);
    }
}

/// Directory table rendered in the `Dashboard` tab.
#[component]
pub fn ClientTable(on_mutated: Callback<()>) -> impl IntoView {
    let directory = expect_context::<RwSignal<DirectoryState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <section class="panel">
            <div class="panel__header">
                <h2>"Registered Clients"</h2>
            </div>
            <div class="table-container">
                <table>
                    <thead>
                        <tr>
                            <th>"Registered"</th>
                            <th>"Client ID"</th>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Bot ID"</th>
                            <th>"Status"</th>
                            <th>"Action"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            directory
                                .get()
                                .clients
                                .into_iter()
                                .enumerate()
                                .map(|(index, client)| {
                                    let detail = client.clone();
                                    let delete_id = client.client_id.clone();
                                    view! {
                                        <tr class=row_class(index)>
                                            <td class="text-gray">
                                                {created_at_label(client.created_at.as_deref())}
                                            </td>
                                            <td>
                                                <span class="mono-id">{client.client_id.clone()}</span>
                                            </td>
                                            <td class="font-medium">{client.name.clone()}</td>
                                            <td class="text-gray">{client.email.clone()}</td>
                                            <td>
                                                <span class="mono-id">{client.bot_id.clone()}</span>
                                            </td>
                                            <td>
                                                <span class="status-badge status-badge--active">
                                                    "Active"
                                                </span>
                                            </td>
                                            <td>
                                                <button
                                                    class="btn btn--view"
                                                    title="View Client"
                                                    on:click=move |_| {
                                                        ui.update(|u| u.open_client_detail(detail.clone()));
                                                    }
                                                >
                                                    "View"
                                                </button>
                                                <button
                                                    class="btn btn--danger"
                                                    title="Delete Client"
                                                    on:click=move |_| {
                                                        request_delete(delete_id.clone(), ui, on_mutated);
                                                    }
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </div>
        </section>
    }
}
