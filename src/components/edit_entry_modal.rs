//! Edit modal for a diary entry; saves via PATCH and reloads the list.

use leptos::prelude::*;

use crate::net::api::{self, EntryCallError};
use crate::net::types::EntryPatch;
use crate::session;
use crate::state::entries::EntriesState;

/// Edit modal bound to `entries.editing`; open while a target is set.
#[component]
pub fn EditEntryModal(entries: RwSignal<EntriesState>, on_saved: Callback<()>) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());

    // Seed the inputs whenever a new target opens.
    Effect::new(move || {
        if let Some(target) = entries.get().editing {
            title.set(target.title);
            content.set(target.content);
        }
    });

    let on_cancel = move |_| entries.update(|s| s.editing = None);

    let on_save = move |_| {
        let Some(target) = entries.get_untracked().editing else {
            return;
        };
        leptos::task::spawn_local(async move {
            let patch = EntryPatch {
                title: title.get_untracked(),
                content: content.get_untracked(),
            };
            match api::update_entry(target.id, &patch).await {
                Ok(()) => {
                    entries.update(|s| s.editing = None);
                    on_saved.run(());
                }
                Err(EntryCallError::Unauthorized) => session::browser::redirect_to_login(),
                Err(e) => leptos::logging::warn!("entry update failed: {e}"),
            }
        });
    };

    view! {
        <Show when=move || entries.get().editing.is_some()>
            <div class="modal-backdrop">
                <div class="modal-content">
                    <h2>"Edit entry"</h2>
                    <input
                        id="edit-title"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                    <textarea
                        id="edit-content"
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>
                    <div class="modal-buttons">
                        <button id="save-edit-btn" on:click=on_save>
                            "Save"
                        </button>
                        <button id="cancel-edit-btn" on:click=on_cancel>
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
