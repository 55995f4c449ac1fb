use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDocument};

use super::constants::SESSION_COOKIE_NAME;

/// Raw `document.cookie`, empty when unavailable
pub fn read_document_cookie() -> String {
    window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.dyn_into::<HtmlDocument>().ok())
        .and_then(|doc| doc.cookie().ok())
        .unwrap_or_default()
}

/// Whether a `name=value; name=value` cookie string carries the session cookie
pub fn has_session_cookie(cookie_header: &str) -> bool {
    cookie_header
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .any(|(name, value)| name.trim() == SESSION_COOKIE_NAME && !value.trim().is_empty())
}
