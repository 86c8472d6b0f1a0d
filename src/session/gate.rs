//! The session gate itself: check, redirect, and return-path resolution.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use std::time::Duration;

use crate::session::destination;
use crate::state::auth::SessionState;

/// Why an authority query did not confirm a session.
///
/// Both variants fold into the same `allowed = false` outcome: whether the
/// server said no or could not be asked, the remediation is identical (send
/// the user through the login entry point).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    /// The query never produced an answer (network unreachable, timeout).
    #[error("transport failure: {0}")]
    Transport(String),
    /// The authority answered with a non-success status.
    #[error("authority denied the session (status {0})")]
    Denied(u16),
}

/// Outcome of a gate check.
///
/// A plain value with no side effects of its own; the caller decides what
/// to do with a denial (the composed [`SessionGate::require_session`] is
/// the variant that also redirects).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GateResult {
    pub allowed: bool,
}

/// The remote service that can authoritatively answer "who is the current
/// caller". Credentials travel ambiently (cookies attached by the browser).
pub trait Authority {
    /// `Ok(())` means the caller holds a valid session.
    async fn current_session(&self) -> Result<(), GateError>;
}

/// The gate's view of the current location and its one effect on the page:
/// full-page navigation.
pub trait Navigator {
    /// Path of the page currently shown, e.g. `/list.html`.
    fn current_path(&self) -> String;

    /// Query string of the current URL, with or without the leading `?`.
    fn current_query(&self) -> String;

    /// Navigate the current view. Any in-flight gate work is simply
    /// abandoned when this tears the page down.
    fn navigate(&self, url: &str);
}

/// Last-known session flag persisted across navigations.
///
/// Advisory only: it may decide whether to optimistically render protected
/// UI while the authoritative check is in flight, never whether to grant
/// access. Access is read-then-overwrite; last write wins.
pub trait AdvisoryCache {
    fn read(&self) -> SessionState;
    fn write(&self, authenticated: bool);
    fn clear(&self);
}

/// Page-variable knobs. One configuration replaces the per-page forks the
/// old scripts carried (differing delays, differing landing pages).
#[derive(Clone, Debug)]
pub struct GateConfig {
    /// The login page, sole destination for denied sessions.
    pub entry_point: String,
    /// Where to land after login when no pending destination survives the
    /// safety check.
    pub default_landing: String,
    /// Query parameter carrying the pending destination.
    pub redirect_param: String,
    /// Delay before a re-check that runs right after a login on the same
    /// page load, giving the session cookie time to become observable.
    pub recheck_delay: Duration,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            entry_point: "/login.html".to_owned(),
            default_landing: "/index.html".to_owned(),
            redirect_param: "redirect".to_owned(),
            recheck_delay: Duration::from_millis(100),
        }
    }
}

/// Session gate over injected collaborators.
///
/// Per page load the gate moves `Initial -> Allowed | Denied`; a denial
/// always routes through the entry point, there is no retry state.
pub struct SessionGate<A, N, C> {
    config: GateConfig,
    authority: A,
    navigator: N,
    cache: C,
}

impl<A, N, C> SessionGate<A, N, C>
where
    A: Authority,
    N: Navigator,
    C: AdvisoryCache,
{
    pub fn new(authority: A, navigator: N, cache: C) -> Self {
        Self::with_config(GateConfig::default(), authority, navigator, cache)
    }

    pub fn with_config(config: GateConfig, authority: A, navigator: N, cache: C) -> Self {
        Self {
            config,
            authority,
            navigator,
            cache,
        }
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// One authoritative query. Success means allowed; denial and transport
    /// failure both mean not allowed. Always resolves, never panics.
    ///
    /// Side effect: the advisory cache is overwritten with the result.
    pub async fn check_session(&self) -> GateResult {
        let allowed = match self.authority.current_session().await {
            Ok(()) => true,
            Err(err) => {
                leptos::logging::warn!("session check failed: {err}");
                false
            }
        };
        self.cache.write(allowed);
        GateResult { allowed }
    }

    /// Same contract as [`check_session`](Self::check_session), but sleeps
    /// first. Used when the check runs right after a login action whose
    /// cookie write may not be externally observable yet.
    pub async fn check_session_delayed(&self, delay: Duration) -> GateResult {
        #[cfg(feature = "hydrate")]
        gloo_timers::future::sleep(delay).await;
        #[cfg(not(feature = "hydrate"))]
        let _ = delay;

        self.check_session().await
    }

    /// The composed check protected pages use: query the authority, then
    /// either proceed or redirect to the entry point with the current path
    /// remembered as the pending destination.
    pub async fn require_session(&self) -> GateResult {
        self.require_session_with(|| {}).await
    }

    /// [`require_session`](Self::require_session) with a continuation that
    /// runs exactly once, and only after the authority query confirmed the
    /// session.
    pub async fn require_session_with(&self, on_allowed: impl FnOnce()) -> GateResult {
        let result = self.check_session().await;
        if result.allowed {
            on_allowed();
        } else {
            self.redirect_to_entry_point(&self.navigator.current_path());
        }
        result
    }

    /// Navigate to the entry point carrying `current_path` as the pending
    /// destination. No-op when the current page already is the entry point,
    /// so the login page never redirects to itself.
    pub fn redirect_to_entry_point(&self, current_path: &str) {
        if current_path == self.config.entry_point {
            return;
        }
        let url = destination::entry_point_url(&self.config, current_path);
        self.navigator.navigate(&url);
    }

    /// Read the pending destination back out of the current URL. Absent or
    /// unsafe values fall back to the default landing path, so the gate can
    /// never be used as an open redirect.
    pub fn resolve_pending_destination(&self) -> String {
        destination::from_query(&self.navigator.current_query(), &self.config.redirect_param)
            .unwrap_or_else(|| self.config.default_landing.clone())
    }

    /// Advisory read of the last known session state. `Unknown` when no
    /// result has been cached.
    pub fn cached_hint(&self) -> SessionState {
        self.cache.read()
    }

    /// Drop the cached flag entirely (logout). A later read returns
    /// `Unknown`, not a stale `Unauthenticated`.
    pub fn clear_advisory_cache(&self) {
        self.cache.clear();
    }
}
