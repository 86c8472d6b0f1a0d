//! Timestamp rendering for entry cards.
//!
//! Uses the browser's locale formatting in the client; falls back to the
//! raw server string elsewhere.

/// Format a server timestamp (ISO-8601-ish) for display.
pub fn format_timestamp(raw: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw));
        if date.get_time().is_nan() {
            return raw.to_owned();
        }
        String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        raw.to_owned()
    }
}
