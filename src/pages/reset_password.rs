//! Reset-password page: completes a reset with the mailed token.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::ResetPasswordRequest;
use crate::session;
use crate::session::destination;
use crate::session::gate::Navigator;

const MIN_PASSWORD_LEN: usize = 6;

/// Password-reset completion form. The token arrives as a query parameter
/// on the link from the reset mail.
#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let msg = RwSignal::new(String::new());

    let token = {
        let gate = session::browser_gate();
        destination::query_param(&gate.navigator().current_query(), "token")
    };
    let missing_token = token.is_none();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        msg.set(String::new());

        let Some(token) = token.clone() else {
            msg.set("This reset link is invalid or incomplete.".to_owned());
            return;
        };
        if new_password.get_untracked() != confirm.get_untracked() {
            msg.set("Passwords do not match.".to_owned());
            return;
        }
        if new_password.get_untracked().len() < MIN_PASSWORD_LEN {
            msg.set(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters."
            ));
            return;
        }

        leptos::task::spawn_local(async move {
            let req = ResetPasswordRequest {
                token,
                new_password: new_password.get_untracked(),
            };
            match api::reset_password(&req).await {
                Ok(resp) if resp.success => {
                    let gate = session::browser_gate();
                    let entry = gate.config().entry_point.clone();
                    gate.navigator().navigate(&entry);
                }
                Ok(resp) => msg.set(
                    resp.message
                        .unwrap_or_else(|| "Password reset failed.".to_owned()),
                ),
                Err(e) => msg.set(e),
            }
        });
    };

    view! {
        <div class="reset-password-page">
            <h1>"Choose a new password"</h1>
            <Show when=move || missing_token>
                <p class="message error">"This reset link is invalid or incomplete."</p>
            </Show>
            <form id="resetPasswordForm" on:submit=on_submit>
                <input
                    id="newPassword"
                    type="password"
                    placeholder="New password"
                    prop:value=move || new_password.get()
                    on:input=move |ev| new_password.set(event_target_value(&ev))
                />
                <input
                    id="confirmPassword"
                    type="password"
                    placeholder="Confirm new password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
                <button type="submit">"Reset password"</button>
            </form>
            <p id="resetPasswordMessage" class="message">{move || msg.get()}</p>
        </div>
    }
}
