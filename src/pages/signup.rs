//! Signup page with live password-match indication.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::SignupRequest;
use crate::session;
use crate::session::destination;
use crate::session::gate::Navigator;

const MIN_PASSWORD_LEN: usize = 6;

/// Signup form. A forwarded pending destination is kept on the login link
/// and followed after successful registration.
#[component]
pub fn SignupPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let msg = RwSignal::new(String::new());

    let forwarded = {
        let gate = session::browser_gate();
        destination::from_query(
            &gate.navigator().current_query(),
            &gate.config().redirect_param,
        )
    };
    let login_href = match &forwarded {
        Some(dest) => destination::forward_url("/login.html", "redirect", dest),
        None => "/login.html".to_owned(),
    };
    let login_target = login_href.clone();

    let match_state = move || {
        let c = confirm.get();
        if c.is_empty() {
            None
        } else {
            Some(password.get() == c)
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        msg.set(String::new());

        if password.get_untracked() != confirm.get_untracked() {
            msg.set("Passwords do not match.".to_owned());
            return;
        }
        if password.get_untracked().len() < MIN_PASSWORD_LEN {
            msg.set(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters."
            ));
            return;
        }

        let target = login_target.clone();
        leptos::task::spawn_local(async move {
            let req = SignupRequest {
                username: username.get_untracked(),
                password: password.get_untracked(),
                email: email.get_untracked(),
            };
            match api::signup(&req).await {
                Ok(()) => {
                    let gate = session::browser_gate();
                    gate.navigator().navigate(&target);
                }
                Err(e) => msg.set(e),
            }
        });
    };

    view! {
        <div class="signup-page">
            <h1>"Sign up"</h1>
            <form id="signupForm" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Confirm password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
                <span
                    id="passwordMatchMsg"
                    class=move || match match_state() {
                        Some(true) => "match-ok",
                        Some(false) => "match-bad",
                        None => "",
                    }
                >
                    {move || match match_state() {
                        Some(true) => "Passwords match",
                        Some(false) => "Passwords differ",
                        None => "",
                    }}
                </span>
                <button type="submit">"Create account"</button>
            </form>
            <p id="msg" class="form-msg">{move || msg.get()}</p>
            <a id="loginLink" href=login_href>"Back to login"</a>
        </div>
    }
}
