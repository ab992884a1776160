//! User-visible notifications and the global error filter.
//!
//! SYSTEM CONTEXT
//! ==============
//! Errors and warnings surface as transient banners appended to the
//! document body, fire-and-forget. Two filters sit in front of the
//! banner:
//!
//! - the generic business-failure text is suppressed entirely, since
//!   callers show field-level feedback for those cases themselves;
//! - uncaught browser errors pass a signature filter that drops known
//!   benign extension noise and announces only core failure shapes.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use crate::net::http::BUSINESS_FALLBACK_MSG;

#[cfg(feature = "csr")]
const BANNER_DISMISS_MS: u64 = 3_000;
#[cfg(feature = "csr")]
const GENERIC_SYSTEM_ERROR: &str = "system error, please try again later";

/// Substring signatures of known-benign browser/extension errors that
/// must never reach the user.
const BENIGN_SIGNATURES: &[&str] = &[
    "v[w] is not a function",
    "zybTracker",
    "hybridaction",
    "message channel closed",
    "a listener indicated an asynchronous response",
];

/// Message signatures that still warrant a generic banner when they
/// reach the global filter uncaught.
const CORE_SIGNATURES: &[&str] = &["Network Error", "500", "403", "401"];

/// What the global filter does with one uncaught error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlobalErrorAction {
    /// Benign noise: log at warn level, never show.
    Ignore,
    /// Core failure: show one generic system-error banner.
    Announce,
    /// Everything else: drop without user-visible output.
    Silent,
}

/// Whether an uncaught error matches the benign-noise list, by
/// substring against either the message or the stack.
pub fn is_benign_signature(message: &str, stack: &str) -> bool {
    BENIGN_SIGNATURES.iter().any(|sig| message.contains(sig) || stack.contains(sig))
}

/// Decide the filter action for one uncaught error. Benign noise wins
/// over everything else.
pub fn global_error_action(message: &str, stack: &str) -> GlobalErrorAction {
    if is_benign_signature(message, stack) {
        return GlobalErrorAction::Ignore;
    }
    if CORE_SIGNATURES.iter().any(|sig| message.contains(sig)) {
        return GlobalErrorAction::Announce;
    }
    GlobalErrorAction::Silent
}

fn is_suppressed(message: &str) -> bool {
    message.contains(BUSINESS_FALLBACK_MSG)
}

/// Fire-and-forget error banner.
pub fn error(message: &str) {
    if is_suppressed(message) {
        leptos::logging::warn!("suppressed generic failure notice: {message}");
        return;
    }
    show_banner(message, "notice notice-error");
}

/// Fire-and-forget warning banner.
pub fn warning(message: &str) {
    show_banner(message, "notice notice-warning");
}

/// Fire-and-forget success banner.
pub fn success(message: &str) {
    show_banner(message, "notice notice-success");
}

fn show_banner(message: &str, class: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(body) = document.body() else {
            return;
        };
        let Ok(node) = document.create_element("div") else {
            return;
        };
        node.set_class_name(class);
        node.set_text_content(Some(message));
        if body.append_child(&node).is_err() {
            return;
        }
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(BANNER_DISMISS_MS))
                .await;
            node.remove();
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = class;
        leptos::logging::warn!("notice (off-browser): {message}");
    }
}

/// Hook the window's `error` event so uncaught failures pass the
/// signature filter instead of dying silently in the console.
#[cfg(feature = "csr")]
pub fn install_global_filter() {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };
    let handler = Closure::<dyn Fn(web_sys::ErrorEvent)>::new(|event: web_sys::ErrorEvent| {
        let message = event.message();
        let stack = js_sys::Reflect::get(&event.error(), &wasm_bindgen::JsValue::from_str("stack"))
            .ok()
            .and_then(|value| value.as_string())
            .unwrap_or_default();
        match global_error_action(&message, &stack) {
            GlobalErrorAction::Ignore => {
                leptos::logging::warn!("ignored benign error: {message}");
            }
            GlobalErrorAction::Announce => {
                leptos::logging::error!("uncaught core error: {message}");
                error(GENERIC_SYSTEM_ERROR);
            }
            GlobalErrorAction::Silent => {}
        }
    });
    if window
        .add_event_listener_with_callback("error", handler.as_ref().unchecked_ref())
        .is_ok()
    {
        handler.forget();
    }
}
