//! Session gate: the shared authentication check for protected pages.
//!
//! DESIGN
//! ======
//! The gate is generic over its three side-effecting collaborators (the
//! remote authority query, page navigation, and the advisory cache) so the
//! redirect protocol can be tested without a browser. `browser` provides
//! the production implementations.

pub mod browser;
pub mod destination;
pub mod gate;

pub use browser::{BrowserGate, browser_gate};
pub use gate::{
    AdvisoryCache, Authority, GateConfig, GateError, GateResult, Navigator, SessionGate,
};
