//! Login page: consumes the pending destination on success.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::LoginRequest;
use crate::session;
use crate::session::destination;
use crate::session::gate::Navigator;

/// Login form. On success the pending destination from the URL is resolved
/// (safety-checked, consumed once) and the browser navigates there; the
/// signup link forwards the same destination so the round trip survives
/// account creation.
#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let msg = RwSignal::new(String::new());

    // Read once from the URL; it survived the full-page navigation here.
    let forwarded = {
        let gate = session::browser_gate();
        destination::from_query(
            &gate.navigator().current_query(),
            &gate.config().redirect_param,
        )
    };
    let signup_href = match &forwarded {
        Some(dest) => destination::forward_url("/signup.html", "redirect", dest),
        None => "/signup.html".to_owned(),
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        msg.set(String::new());
        leptos::task::spawn_local(async move {
            let req = LoginRequest {
                username: username.get_untracked(),
                password: password.get_untracked(),
            };
            match api::login(&req).await {
                Ok(()) => {
                    let gate = session::browser_gate();
                    let target = gate.resolve_pending_destination();
                    gate.navigator().navigate(&target);
                }
                Err(e) => msg.set(e),
            }
        });
    };

    view! {
        <div class="login-page">
            <h1>"Log in"</h1>
            <form id="loginForm" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button type="submit">"Log in"</button>
            </form>
            <p id="msg" class="form-msg">{move || msg.get()}</p>
            <nav class="login-links">
                <a id="signupLinkBtn" href=signup_href>"Sign up"</a>
                <a href="/find-id.html">"Find my ID"</a>
                <a href="/find-password.html">"Forgot password?"</a>
            </nav>
        </div>
    }
}
