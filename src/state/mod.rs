//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `entries`) so individual pages and
//! components can depend on small focused models.

pub mod auth;
pub mod entries;
