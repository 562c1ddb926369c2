//! Modal listing every client with every field, including phone.
//!
//! Opened from the header "View All" button or a per-row "View"; the latter
//! highlights the selected record. Backdrop click or the close button
//! dismisses it.

#[cfg(test)]
#[path = "client_modal_test.rs"]
mod client_modal_test;

use leptos::prelude::*;

use crate::components::client_table::created_at_label;
use crate::state::directory::DirectoryState;
use crate::state::ui::UiState;

fn modal_row_class(index: usize, is_selected: bool) -> String {
    let parity = if index % 2 == 0 { "even" } else { "odd" };
    if is_selected {
        format!("{parity} is-selected")
    } else {
        parity.to_owned()
    }
}

/// Full-detail client listing in a modal overlay.
#[component]
pub fn ClientModal() -> impl IntoView {
    let directory = expect_context::<RwSignal<DirectoryState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let close = move |_| ui.update(UiState::close_client_modal);

    view! {
        <div class="modal-backdrop" on:click=close>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal__header">
                    <h3>"All Client Data"</h3>
                    <button class="modal__close" title="Close" on:click=close>
                        "×"
                    </button>
                </div>
                <div class="modal__body table-container">
                    <table>
                        <thead>
                            <tr>
                                <th>"Registered"</th>
                                <th>"Client ID"</th>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Phone"</th>
                                <th>"Bot ID"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let selected_id = ui
                                    .get()
                                    .selected_client
                                    .map(|c| c.client_id);
                                directory
                                    .get()
                                    .clients
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, client)| {
                                        let is_selected =
                                            selected_id.as_deref() == Some(client.client_id.as_str());
                                        view! {
                                            <tr class=modal_row_class(index, is_selected)>
                                                <td class="text-gray">
                                                    {created_at_label(client.created_at.as_deref())}
                                                </td>
                                                <td>
                                                    <span class="mono-id">{client.client_id.clone()}</span>
                                                </td>
                                                <td class="font-medium">{client.name.clone()}</td>
                                                <td class="text-gray">{client.email.clone()}</td>
                                                <td class="text-gray">{client.phone.clone()}</td>
                                                <td>
                                                    <span class="mono-id">{client.bot_id.clone()}</span>
                                                </td>
                                                <td>
                                                    <span class="status-badge status-badge--active">
                                                        "Active"
                                                    </span>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
