//! Pending-destination codec and the open-redirect guard.
//!
//! The destination is carried as one opaque query value: encoded exactly
//! once when the gate redirects to the entry point, decoded exactly once
//! when the entry point reads it back.

#[cfg(test)]
#[path = "destination_test.rs"]
mod destination_test;

use url::form_urlencoded;

use crate::session::gate::GateConfig;

/// Build the entry-point URL carrying `current_path` as the pending
/// destination, e.g. `/login.html?redirect=list.html`.
pub fn entry_point_url(config: &GateConfig, current_path: &str) -> String {
    forward_url(
        &config.entry_point,
        &config.redirect_param,
        current_path,
    )
}

/// Attach `dest` (leading slash stripped, percent-encoded) to `base` as a
/// single query parameter. Also used to hand the destination from the login
/// page to the signup page and back.
pub fn forward_url(base: &str, param: &str, dest: &str) -> String {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair(param, dest.trim_start_matches('/'))
        .finish();
    format!("{base}?{query}")
}

/// Extract the pending destination from a raw query string, decoding it
/// exactly once. Returns the normalized path, or `None` when the parameter
/// is absent or fails [`is_safe`].
pub fn from_query(query: &str, param: &str) -> Option<String> {
    let value = query_param(query, param)?;
    if is_safe(&value) { Some(normalize(&value)) } else { None }
}

/// Single query-parameter lookup with one decode pass. Shared with the
/// reset-password page, which reads its token the same way.
pub fn query_param(query: &str, param: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key.as_ref() == param)
        .map(|(_, value)| value.into_owned())
}

/// Open-redirect guard. A destination must look like a site-local page:
/// rooted (`/...`) or a plain page name (`*.html`), with no scheme
/// separator and no protocol-relative `//`.
pub fn is_safe(value: &str) -> bool {
    if value.is_empty() || value.contains(':') || value.contains("//") {
        return false;
    }
    value.starts_with('/') || value.ends_with(".html")
}

/// Ensure a single leading slash so the destination is always an absolute
/// site-local path.
pub fn normalize(value: &str) -> String {
    format!("/{}", value.trim_start_matches('/'))
}
