//! Find-ID page: look up a masked account name by email.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::FindIdRequest;

/// Account-name recovery form.
#[component]
pub fn FindIdPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let msg = RwSignal::new(String::new());
    let found = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        msg.set(String::new());
        found.set(false);

        let address = email.get_untracked();
        if !address.contains('@') {
            msg.set("Enter a valid email address.".to_owned());
            return;
        }

        leptos::task::spawn_local(async move {
            match api::find_id(&FindIdRequest { email: address }).await {
                Ok(resp) if resp.success => {
                    found.set(true);
                    match resp.masked_user_id {
                        Some(masked) => msg.set(format!("Your ID: {masked}")),
                        None => msg.set(resp.message.unwrap_or_default()),
                    }
                }
                Ok(resp) => msg.set(
                    resp.message
                        .unwrap_or_else(|| "No account found for that email.".to_owned()),
                ),
                Err(e) => msg.set(e),
            }
        });
    };

    view! {
        <div class="find-id-page">
            <h1>"Find my ID"</h1>
            <form id="findIdForm" on:submit=on_submit>
                <input
                    id="email"
                    type="email"
                    placeholder="Registered email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <button type="submit">"Find"</button>
            </form>
            <p
                id="findIdMessage"
                class=move || if found.get() { "message success" } else { "message error" }
            >
                {move || msg.get()}
            </p>
            <a href="/login.html">"Back to login"</a>
        </div>
    }
}
