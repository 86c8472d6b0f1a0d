//! Diary list page: protected, with sort, edit, and delete.

use leptos::prelude::*;

use crate::components::edit_entry_modal::EditEntryModal;
use crate::components::entry_card::EntryCard;
use crate::net::api::{self, EntryCallError};
use crate::net::types::SortOrder;
use crate::session;
use crate::state::entries::{EditTarget, EntriesState};

/// Protected list page. The gate runs on mount; entries load only after
/// the session is confirmed. A 401 from any later call routes back through
/// the entry point with this page as the pending destination.
#[component]
pub fn ListPage() -> impl IntoView {
    let entries = expect_context::<RwSignal<EntriesState>>();

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            let gate = session::browser_gate();
            if gate.require_session().await.allowed {
                load_entries(entries).await;
            }
        });
    });

    let on_sort = move |ev: leptos::ev::Event| {
        entries.update(|s| s.sort = SortOrder::from_param(&event_target_value(&ev)));
        leptos::task::spawn_local(async move {
            load_entries(entries).await;
        });
    };

    let reload = Callback::new(move |()| {
        leptos::task::spawn_local(async move {
            load_entries(entries).await;
        });
    });

    let on_edit = Callback::new(move |target: EditTarget| {
        entries.update(|s| s.editing = Some(target));
    });

    let on_delete = Callback::new(move |id: i64| {
        leptos::task::spawn_local(async move {
            match api::delete_entry(id).await {
                Ok(()) => load_entries(entries).await,
                Err(EntryCallError::Unauthorized) => session::browser::redirect_to_login(),
                Err(e) => leptos::logging::warn!("entry delete failed: {e}"),
            }
        });
    });

    view! {
        <div class="list-page">
            <header class="list-page__header">
                <h1>"My entries"</h1>
                <select id="sort" on:change=on_sort>
                    <option value="desc">"Newest first"</option>
                    <option value="asc">"Oldest first"</option>
                </select>
            </header>
            <div id="diary-list">
                {move || {
                    let state = entries.get();
                    if state.loading {
                        view! { <p>"Loading entries..."</p> }.into_any()
                    } else if state.items.is_empty() {
                        view! { <p>"No entries yet."</p> }.into_any()
                    } else {
                        view! {
                            <div class="diary-items">
                                {state
                                    .items
                                    .into_iter()
                                    .map(|entry| {
                                        view! {
                                            <EntryCard entry=entry on_edit=on_edit on_delete=on_delete/>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
            <EditEntryModal entries=entries on_saved=reload/>
        </div>
    }
}

/// Fetch the list with the current sort order into the shared state.
async fn load_entries(entries: RwSignal<EntriesState>) {
    entries.update(|s| s.loading = true);
    let sort = entries.get_untracked().sort;
    match api::fetch_entries(sort).await {
        Ok(items) => entries.update(|s| {
            s.items = items;
            s.loading = false;
        }),
        Err(EntryCallError::Unauthorized) => {
            entries.update(|s| s.loading = false);
            session::browser::redirect_to_login();
        }
        Err(e) => {
            leptos::logging::warn!("entry list failed: {e}");
            entries.update(|s| s.loading = false);
        }
    }
}
