//! Modal shown when a protected action needs a login first.
//!
//! Forwards the pending destination to the login page (or the signup page,
//! which hands it back to login afterwards) so the user lands where they
//! originally wanted to go.

use leptos::prelude::*;

use crate::session;
use crate::session::destination;
use crate::session::gate::Navigator;

/// Login-required modal with login / signup / cancel actions.
#[component]
pub fn LoginRequiredModal(open: RwSignal<bool>, pending: RwSignal<String>) -> impl IntoView {
    let on_login = move |_| {
        let gate = session::browser_gate();
        let path = pending.get_untracked();
        if path.is_empty() {
            let entry = gate.config().entry_point.clone();
            gate.navigator().navigate(&entry);
        } else {
            gate.redirect_to_entry_point(&path);
        }
    };

    let on_signup = move |_| {
        let gate = session::browser_gate();
        let path = pending.get_untracked();
        let url = if path.is_empty() {
            "/signup.html".to_owned()
        } else {
            destination::forward_url("/signup.html", &gate.config().redirect_param, &path)
        };
        gate.navigator().navigate(&url);
    };

    let on_cancel = move |_| {
        open.set(false);
        pending.set(String::new());
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| open.set(false)>
                <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                    <p>"You need to log in first."</p>
                    <div class="modal-buttons">
                        <button id="loginBtn" on:click=on_login>"Log in"</button>
                        <button id="signupBtn" on:click=on_signup>"Sign up"</button>
                        <button id="cancelBtn" on:click=on_cancel>"Cancel"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
