#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Last known session state.
///
/// `Unknown` until the first authoritative check of the page load has
/// completed (or when nothing is cached). The remote authority remains the
/// source of truth; this value only shapes what the UI renders meanwhile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Unknown,
    Authenticated,
    Unauthenticated,
}

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: SessionState,
    pub user: Option<User>,
    pub loading: bool,
}
