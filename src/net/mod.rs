//! Network layer: wire DTOs and REST helpers for the diary server.

pub mod api;
pub mod types;
