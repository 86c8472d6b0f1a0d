//! One diary entry in the list view.

use leptos::prelude::*;

use crate::net::types::DiaryEntry;
use crate::state::entries::EditTarget;
use crate::util::format::format_timestamp;

/// Diary entry card with edit and delete actions.
#[component]
pub fn EntryCard(
    entry: DiaryEntry,
    on_edit: Callback<EditTarget>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let id = entry.id;
    let target = EditTarget {
        id,
        title: entry.title.clone(),
        content: entry.content.clone(),
    };
    let created = entry.created_at.as_deref().map(format_timestamp);
    let image = entry
        .image_path
        .clone()
        .map(|path| view! { <img src=format!("/{path}") alt="attachment"/> });

    view! {
        <div class="diary-item">
            <div class="diary-title">{entry.title.clone()}</div>
            <div class="diary-body">
                {image}
                <div class="diary-text">{entry.content.clone()}</div>
            </div>
            <div class="diary-buttons">
                <button class="edit-btn" on:click=move |_| on_edit.run(target.clone())>
                    "Edit"
                </button>
                <button class="delete-btn" on:click=move |_| on_delete.run(id)>
                    "Delete"
                </button>
            </div>
            {created.map(|ts| view! { <small class="diary-created">{ts}</small> })}
        </div>
    }
}
