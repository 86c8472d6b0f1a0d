//! Browser-backed implementations of the gate seams.
//!
//! Client-side (hydrate): real fetch / `window.location` / `localStorage`.
//! Server-side (SSR): inert stubs, since the gate only acts in the browser.

use crate::session::gate::{AdvisoryCache, Authority, GateError, Navigator, SessionGate};
use crate::state::auth::SessionState;

/// The one fixed authority endpoint. Earlier revisions of the site drifted
/// between prefixed and unprefixed paths; the prefixed one is correct.
pub const SESSION_ENDPOINT: &str = "/api/users/me";

/// localStorage key holding the advisory session flag.
#[cfg(feature = "hydrate")]
const CACHE_KEY: &str = "isLoggedIn";

/// Gate wired to the real browser environment.
pub type BrowserGate = SessionGate<FetchAuthority, WindowNavigator, LocalStorageCache>;

/// Build a gate over the real browser seams with default configuration.
pub fn browser_gate() -> BrowserGate {
    SessionGate::new(FetchAuthority, WindowNavigator, LocalStorageCache)
}

/// Route the browser through the login entry point, remembering the
/// current page as the pending destination. Used when a protected call
/// comes back 401 mid-page.
pub fn redirect_to_login() {
    let gate = browser_gate();
    gate.redirect_to_entry_point(&gate.navigator().current_path());
}

/// Authority query via `GET /api/users/me`; the browser attaches the
/// session cookie automatically.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchAuthority;

impl Authority for FetchAuthority {
    async fn current_session(&self) -> Result<(), GateError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(SESSION_ENDPOINT)
                .send()
                .await
                .map_err(|e| GateError::Transport(e.to_string()))?;
            if resp.ok() {
                Ok(())
            } else {
                Err(GateError::Denied(resp.status()))
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(GateError::Transport("no browser environment".to_owned()))
        }
    }
}

/// `window.location` wrapper: current path/query plus full-page navigation.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn current_path(&self) -> String {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_else(|| "/".to_owned())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            "/".to_owned()
        }
    }

    fn current_query(&self) -> String {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            String::new()
        }
    }

    fn navigate(&self, url: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(url) {
                    leptos::logging::warn!("navigation failed: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
        }
    }
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Advisory session flag in `localStorage` under a fixed key.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageCache;

impl AdvisoryCache for LocalStorageCache {
    fn read(&self) -> SessionState {
        #[cfg(feature = "hydrate")]
        {
            match storage().and_then(|s| s.get_item(CACHE_KEY).ok().flatten()) {
                Some(v) if v == "true" => SessionState::Authenticated,
                Some(_) => SessionState::Unauthenticated,
                None => SessionState::Unknown,
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            SessionState::Unknown
        }
    }

    fn write(&self, authenticated: bool) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(s) = storage() {
                let _ = s.set_item(CACHE_KEY, if authenticated { "true" } else { "false" });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = authenticated;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(s) = storage() {
                let _ = s.remove_item(CACHE_KEY);
            }
        }
    }
}
