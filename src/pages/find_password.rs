//! Find-password page: request a password-reset mail.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::PasswordResetRequest;

/// Password-reset request form; the server matches on account name and
/// registered email together.
#[component]
pub fn FindPasswordPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let msg = RwSignal::new(String::new());
    let sent = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        msg.set(String::new());
        sent.set(false);

        if username.get_untracked().is_empty() || !email.get_untracked().contains('@') {
            msg.set("Enter your username and a valid email address.".to_owned());
            return;
        }

        leptos::task::spawn_local(async move {
            let req = PasswordResetRequest {
                user_id: username.get_untracked(),
                email: email.get_untracked(),
            };
            match api::request_password_reset(&req).await {
                Ok(resp) => {
                    sent.set(resp.success);
                    msg.set(resp.message.unwrap_or_else(|| {
                        "If the account exists, a reset mail is on its way.".to_owned()
                    }));
                }
                Err(e) => msg.set(e),
            }
        });
    };

    view! {
        <div class="find-password-page">
            <h1>"Reset password"</h1>
            <form id="findPasswordForm" on:submit=on_submit>
                <input
                    id="username"
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    id="email"
                    type="email"
                    placeholder="Registered email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <button type="submit">"Send reset mail"</button>
            </form>
            <p
                id="findPasswordMessage"
                class=move || if sent.get() { "message success" } else { "message error" }
            >
                {move || msg.get()}
            </p>
            <a href="/login.html">"Back to login"</a>
        </div>
    }
}
