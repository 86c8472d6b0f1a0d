use std::cell::{Cell, RefCell};
use std::time::Duration;

use futures::executor::block_on;

use super::*;
use crate::state::auth::SessionState;

// =============================================================
// Test doubles
// =============================================================

/// Authority returning a scripted verdict, counting queries.
struct StubAuthority {
    verdict: Result<(), GateError>,
    calls: Cell<u32>,
}

impl StubAuthority {
    fn granted() -> Self {
        Self {
            verdict: Ok(()),
            calls: Cell::new(0),
        }
    }

    fn denied(status: u16) -> Self {
        Self {
            verdict: Err(GateError::Denied(status)),
            calls: Cell::new(0),
        }
    }

    fn unreachable() -> Self {
        Self {
            verdict: Err(GateError::Transport("connection refused".to_owned())),
            calls: Cell::new(0),
        }
    }
}

impl Authority for StubAuthority {
    async fn current_session(&self) -> Result<(), GateError> {
        self.calls.set(self.calls.get() + 1);
        self.verdict.clone()
    }
}

/// Navigator pinned to a location, recording every navigation.
struct RecordingNavigator {
    path: String,
    query: String,
    navigations: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    fn at(path: &str) -> Self {
        Self::with_query(path, "")
    }

    fn with_query(path: &str, query: &str) -> Self {
        Self {
            path: path.to_owned(),
            query: query.to_owned(),
            navigations: RefCell::new(Vec::new()),
        }
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.path.clone()
    }

    fn current_query(&self) -> String {
        self.query.clone()
    }

    fn navigate(&self, url: &str) {
        self.navigations.borrow_mut().push(url.to_owned());
    }
}

/// In-memory advisory cache.
#[derive(Default)]
struct MemoryCache {
    value: RefCell<Option<bool>>,
}

impl AdvisoryCache for MemoryCache {
    fn read(&self) -> SessionState {
        match *self.value.borrow() {
            Some(true) => SessionState::Authenticated,
            Some(false) => SessionState::Unauthenticated,
            None => SessionState::Unknown,
        }
    }

    fn write(&self, authenticated: bool) {
        *self.value.borrow_mut() = Some(authenticated);
    }

    fn clear(&self) {
        *self.value.borrow_mut() = None;
    }
}

type TestGate = SessionGate<StubAuthority, RecordingNavigator, MemoryCache>;

fn gate_at(path: &str, authority: StubAuthority) -> TestGate {
    SessionGate::new(authority, RecordingNavigator::at(path), MemoryCache::default())
}

fn gate_with_query(path: &str, query: &str, authority: StubAuthority) -> TestGate {
    SessionGate::new(
        authority,
        RecordingNavigator::with_query(path, query),
        MemoryCache::default(),
    )
}

fn navigations(gate: &TestGate) -> Vec<String> {
    gate.navigator().navigations.borrow().clone()
}

// =============================================================
// check_session
// =============================================================

#[test]
fn check_session_allows_on_success() {
    let gate = gate_at("/list.html", StubAuthority::granted());
    let result = block_on(gate.check_session());
    assert!(result.allowed);
}

#[test]
fn check_session_denies_on_authority_denial() {
    let gate = gate_at("/list.html", StubAuthority::denied(401));
    let result = block_on(gate.check_session());
    assert!(!result.allowed);
}

#[test]
fn check_session_denies_on_transport_failure() {
    let gate = gate_at("/list.html", StubAuthority::unreachable());
    let result = block_on(gate.check_session());
    assert!(!result.allowed);
}

#[test]
fn check_session_caches_positive_result() {
    let gate = gate_at("/list.html", StubAuthority::granted());
    block_on(gate.check_session());
    assert_eq!(gate.cached_hint(), SessionState::Authenticated);
}

#[test]
fn check_session_caches_negative_result() {
    let gate = gate_at("/list.html", StubAuthority::denied(401));
    block_on(gate.check_session());
    assert_eq!(gate.cached_hint(), SessionState::Unauthenticated);
}

#[test]
fn check_session_does_not_navigate() {
    let gate = gate_at("/list.html", StubAuthority::denied(401));
    block_on(gate.check_session());
    assert!(navigations(&gate).is_empty());
}

#[test]
fn check_session_delayed_still_resolves() {
    let gate = gate_at("/write.html", StubAuthority::granted());
    let result = block_on(gate.check_session_delayed(Duration::from_millis(100)));
    assert!(result.allowed);
}

// =============================================================
// require_session
// =============================================================

#[test]
fn require_session_allowed_runs_continuation_once() {
    let gate = gate_at("/list.html", StubAuthority::granted());
    let runs = Cell::new(0);

    let result = block_on(gate.require_session_with(|| runs.set(runs.get() + 1)));

    assert!(result.allowed);
    assert_eq!(runs.get(), 1);
    assert!(navigations(&gate).is_empty());
}

#[test]
fn require_session_denied_skips_continuation_and_redirects() {
    let gate = gate_at("/list.html", StubAuthority::denied(401));
    let runs = Cell::new(0);

    let result = block_on(gate.require_session_with(|| runs.set(runs.get() + 1)));

    assert!(!result.allowed);
    assert_eq!(runs.get(), 0);
    assert_eq!(navigations(&gate), vec!["/login.html?redirect=list.html"]);
}

#[test]
fn require_session_queries_authority_exactly_once() {
    let gate = gate_at("/list.html", StubAuthority::denied(401));
    block_on(gate.require_session());
    assert_eq!(gate.authority.calls.get(), 1);
}

#[test]
fn require_session_on_entry_point_does_not_loop() {
    let gate = gate_at("/login.html", StubAuthority::denied(401));
    let result = block_on(gate.require_session());
    assert!(!result.allowed);
    assert!(navigations(&gate).is_empty());
}

// =============================================================
// redirect_to_entry_point
// =============================================================

#[test]
fn redirect_strips_leading_slash_and_encodes() {
    let gate = gate_at("/write.html", StubAuthority::granted());
    gate.redirect_to_entry_point("/write.html");
    assert_eq!(navigations(&gate), vec!["/login.html?redirect=write.html"]);
}

#[test]
fn redirect_from_entry_point_is_noop() {
    let gate = gate_at("/login.html", StubAuthority::granted());
    gate.redirect_to_entry_point("/login.html");
    assert!(navigations(&gate).is_empty());
}

// =============================================================
// resolve_pending_destination
// =============================================================

#[test]
fn pending_destination_round_trip() {
    // Redirect side.
    let denied = gate_at("/write.html", StubAuthority::denied(401));
    block_on(denied.require_session());
    let target = navigations(&denied)[0].clone();
    let query = target.split_once('?').map(|(_, q)| q.to_owned()).unwrap();

    // Entry-point side, after a full page navigation.
    let entry = gate_with_query("/login.html", &query, StubAuthority::granted());
    assert_eq!(entry.resolve_pending_destination(), "/write.html");
}

#[test]
fn missing_destination_falls_back_to_default_landing() {
    let gate = gate_with_query("/login.html", "", StubAuthority::granted());
    assert_eq!(gate.resolve_pending_destination(), "/index.html");
}

#[test]
fn destination_with_scheme_is_rejected() {
    let gate = gate_with_query(
        "/login.html",
        "?redirect=http%3A%2F%2Fevil.example%2Fsteal",
        StubAuthority::granted(),
    );
    assert_eq!(gate.resolve_pending_destination(), "/index.html");
}

#[test]
fn protocol_relative_destination_is_rejected() {
    let gate = gate_with_query(
        "/login.html",
        "?redirect=%2F%2Fevil.example",
        StubAuthority::granted(),
    );
    assert_eq!(gate.resolve_pending_destination(), "/index.html");
}

// =============================================================
// advisory cache
// =============================================================

#[test]
fn clear_advisory_cache_leaves_state_unknown() {
    let gate = gate_at("/list.html", StubAuthority::denied(401));
    block_on(gate.check_session());
    assert_eq!(gate.cached_hint(), SessionState::Unauthenticated);

    gate.clear_advisory_cache();
    assert_eq!(gate.cached_hint(), SessionState::Unknown);
}

#[test]
fn cached_hint_starts_unknown() {
    let gate = gate_at("/list.html", StubAuthority::granted());
    assert_eq!(gate.cached_hint(), SessionState::Unknown);
}
