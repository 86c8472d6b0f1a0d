use super::*;
use crate::session::gate::GateConfig;

// =============================================================
// is_safe
// =============================================================

#[test]
fn rooted_paths_are_safe() {
    assert!(is_safe("/write.html"));
    assert!(is_safe("/list.html"));
}

#[test]
fn bare_page_names_are_safe() {
    assert!(is_safe("list.html"));
}

#[test]
fn empty_value_is_unsafe() {
    assert!(!is_safe(""));
}

#[test]
fn scheme_separator_is_unsafe() {
    assert!(!is_safe("http://evil.example/steal"));
    assert!(!is_safe("javascript:alert(1)"));
    assert!(!is_safe("/a:b.html"));
}

#[test]
fn protocol_relative_url_is_unsafe() {
    assert!(!is_safe("//evil.example"));
}

#[test]
fn unrooted_non_page_value_is_unsafe() {
    assert!(!is_safe("evil.example"));
}

// =============================================================
// normalize
// =============================================================

#[test]
fn normalize_adds_single_leading_slash() {
    assert_eq!(normalize("list.html"), "/list.html");
    assert_eq!(normalize("/list.html"), "/list.html");
}

// =============================================================
// URL building
// =============================================================

#[test]
fn entry_point_url_strips_leading_slash() {
    let config = GateConfig::default();
    assert_eq!(
        entry_point_url(&config, "/write.html"),
        "/login.html?redirect=write.html"
    );
}

#[test]
fn forward_url_percent_encodes_the_value() {
    let url = forward_url("/signup.html", "redirect", "/a&b.html");
    assert_eq!(url, "/signup.html?redirect=a%26b.html");
}

// =============================================================
// query parsing
// =============================================================

#[test]
fn query_param_handles_leading_question_mark() {
    assert_eq!(
        query_param("?redirect=write.html", "redirect"),
        Some("write.html".to_owned())
    );
    assert_eq!(
        query_param("redirect=write.html", "redirect"),
        Some("write.html".to_owned())
    );
}

#[test]
fn query_param_decodes_exactly_once() {
    // %252F is "%2F" encoded once more; one decode pass must not turn it
    // into a slash.
    assert_eq!(
        query_param("?redirect=%252Fwrite.html", "redirect"),
        Some("%2Fwrite.html".to_owned())
    );
}

#[test]
fn query_param_missing_is_none() {
    assert_eq!(query_param("?other=1", "redirect"), None);
    assert_eq!(query_param("", "redirect"), None);
}

#[test]
fn from_query_normalizes_safe_values() {
    assert_eq!(
        from_query("?redirect=write.html", "redirect"),
        Some("/write.html".to_owned())
    );
}

#[test]
fn from_query_rejects_unsafe_values() {
    assert_eq!(
        from_query("?redirect=http%3A%2F%2Fevil.example", "redirect"),
        None
    );
    assert_eq!(from_query("?redirect=%2F%2Fevil.example", "redirect"), None);
}

#[test]
fn forward_and_parse_round_trip() {
    let url = forward_url("/login.html", "redirect", "/my diary.html");
    let (_, query) = url.split_once('?').unwrap();
    assert_eq!(
        from_query(query, "redirect"),
        Some("/my diary.html".to_owned())
    );
}
