//! Home page: entry points to write/list, behind the session gate.

use leptos::prelude::*;

use crate::components::login_required_modal::LoginRequiredModal;
use crate::net::api;
use crate::session;
use crate::session::gate::Navigator;
use crate::state::auth::{AuthState, SessionState};

/// Home page with gate-checked navigation buttons and a logout action.
///
/// On mount the advisory cache decides what to render immediately; the
/// authoritative check then corrects it. Button clicks re-check the
/// session and either navigate or open the login-required modal with the
/// clicked target remembered as the pending destination.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let show_login = RwSignal::new(false);
    let pending = RwSignal::new(String::new());

    Effect::new(move || {
        let gate = session::browser_gate();
        auth.update(|a| {
            a.session = gate.cached_hint();
            a.loading = true;
        });
        leptos::task::spawn_local(async move {
            let result = gate.check_session().await;
            let user = if result.allowed {
                api::fetch_current_user().await
            } else {
                None
            };
            auth.update(|a| {
                a.session = if result.allowed {
                    SessionState::Authenticated
                } else {
                    SessionState::Unauthenticated
                };
                a.user = user;
                a.loading = false;
            });
        });
    });

    let check_and_navigate = move |path: &'static str| {
        leptos::task::spawn_local(async move {
            let gate = session::browser_gate();
            if gate.check_session().await.allowed {
                gate.navigator().navigate(path);
            } else {
                pending.set(path.to_owned());
                show_login.set(true);
            }
        });
    };

    let on_logout = move |_| {
        leptos::task::spawn_local(async move {
            let gate = session::browser_gate();
            gate.clear_advisory_cache();
            api::logout().await;
            // Plain entry point: logging out carries no pending destination.
            let entry = gate.config().entry_point.clone();
            gate.navigator().navigate(&entry);
        });
    };

    let logged_in = move || auth.get().session == SessionState::Authenticated;

    view! {
        <div class="home-page">
            <h1>"My Diary"</h1>
            <div class="home-actions">
                <button id="writeBtn" on:click=move |_| check_and_navigate("/write.html")>
                    "Write"
                </button>
                <button id="listBtn" on:click=move |_| check_and_navigate("/list.html")>
                    "My entries"
                </button>
                <Show when=logged_in>
                    <button id="logoutBtn" on:click=on_logout>
                        "Log out"
                    </button>
                </Show>
            </div>
            <LoginRequiredModal open=show_login pending=pending/>
        </div>
    }
}
