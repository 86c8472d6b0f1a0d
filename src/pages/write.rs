//! Write page: protected, creates a new diary entry.

use leptos::prelude::*;

use crate::net::api::{self, EntryCallError};
use crate::net::types::NewEntry;
use crate::session;
use crate::session::gate::Navigator;

/// Protected write form. The mount-time check is delayed: this page is
/// typically reached right after a login on the same page load, and the
/// session cookie may not be observable yet.
#[component]
pub fn WritePage() -> impl IntoView {
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let msg = RwSignal::new(String::new());

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            let gate = session::browser_gate();
            let delay = gate.config().recheck_delay;
            let result = gate.check_session_delayed(delay).await;
            if !result.allowed {
                gate.redirect_to_entry_point(&gate.navigator().current_path());
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        msg.set(String::new());
        leptos::task::spawn_local(async move {
            let entry = NewEntry {
                title: title.get_untracked(),
                content: content.get_untracked(),
            };
            match api::create_entry(&entry).await {
                Ok(()) => {
                    title.set(String::new());
                    content.set(String::new());
                    msg.set("Entry saved.".to_owned());
                }
                Err(EntryCallError::Unauthorized) => session::browser::redirect_to_login(),
                Err(e) => msg.set(e.to_string()),
            }
        });
    };

    view! {
        <div class="write-page">
            <h1>"New entry"</h1>
            <form id="diary-form" on:submit=on_submit>
                <input
                    id="title"
                    type="text"
                    placeholder="Title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <textarea
                    id="content"
                    placeholder="Write your day..."
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
                <button type="submit">"Save"</button>
            </form>
            <p class="form-msg">{move || msg.get()}</p>
            <a href="/list.html">"Back to list"</a>
        </div>
    }
}
