//! Telegram Mini App bridge.
//!
//! The game lives in Telegram's WebView, where the client API hangs off
//! `window.Telegram.WebApp`. Everything is looked up dynamically through
//! `js_sys::Reflect`, so a plain browser tab degrades to no-ops plus the
//! clipboard fallback for sharing.

#[cfg(target_arch = "wasm32")]
use js_sys::{Function, Reflect};
#[cfg(target_arch = "wasm32")]
use web_sys::wasm_bindgen::{JsCast, JsValue};

/// Outcome of a share attempt, for the results toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareStatus {
    /// Handed off to the Telegram share sheet.
    Shared,
    /// No Telegram around; the text went to the clipboard.
    Copied,
    /// Neither path worked.
    Failed,
}

/// Tell Telegram the app is ready and ask for full height.
#[cfg(target_arch = "wasm32")]
pub fn init() {
    if let Some(app) = web_app() {
        call0(&app, "ready");
        call0(&app, "expand");
    }
}

/// Tap feedback for game actions. `style` is `"light"` or `"medium"`.
#[cfg(target_arch = "wasm32")]
pub fn haptic_impact(style: &str) {
    if let Some(haptic) = haptic_feedback() {
        call1(&haptic, "impactOccurred", &JsValue::from_str(style));
    }
}

/// End-of-run feedback. `kind` is `"success"` or `"error"`.
#[cfg(target_arch = "wasm32")]
pub fn haptic_notify(kind: &str) {
    if let Some(haptic) = haptic_feedback() {
        call1(&haptic, "notificationOccurred", &JsValue::from_str(kind));
    }
}

#[cfg(target_arch = "wasm32")]
const FALLBACK_URL: &str = "https://t.me";

/// Open the Telegram share sheet with `text`. Outside Telegram the text
/// goes to the clipboard instead.
#[cfg(target_arch = "wasm32")]
pub fn share(text: &str) -> ShareStatus {
    if let Some(app) = web_app() {
        let base = String::from(js_sys::encode_uri_component(FALLBACK_URL));
        let encoded = String::from(js_sys::encode_uri_component(text));
        let url = format!("https://t.me/share/url?url={}&text={}", base, encoded);
        if call1(&app, "openTelegramLink", &JsValue::from_str(&url)) {
            return ShareStatus::Shared;
        }
    }
    copy_to_clipboard(text)
}

#[cfg(target_arch = "wasm32")]
fn copy_to_clipboard(text: &str) -> ShareStatus {
    match web_sys::window() {
        Some(window) => {
            // Fire and forget: the promise resolves after the toast anyway.
            let _ = window.navigator().clipboard().write_text(text);
            ShareStatus::Copied
        }
        None => ShareStatus::Failed,
    }
}

/// `window.Telegram.WebApp`, when running inside Telegram.
#[cfg(target_arch = "wasm32")]
fn web_app() -> Option<JsValue> {
    let window = web_sys::window()?;
    let telegram = Reflect::get(window.as_ref(), &JsValue::from_str("Telegram")).ok()?;
    if telegram.is_undefined() || telegram.is_null() {
        return None;
    }
    let app = Reflect::get(&telegram, &JsValue::from_str("WebApp")).ok()?;
    if app.is_undefined() || app.is_null() {
        return None;
    }
    Some(app)
}

#[cfg(target_arch = "wasm32")]
fn haptic_feedback() -> Option<JsValue> {
    let app = web_app()?;
    let haptic = Reflect::get(&app, &JsValue::from_str("HapticFeedback")).ok()?;
    if haptic.is_undefined() || haptic.is_null() {
        return None;
    }
    Some(haptic)
}

#[cfg(target_arch = "wasm32")]
fn call0(target: &JsValue, name: &str) -> bool {
    match method(target, name) {
        Some(func) => func.call0(target).is_ok(),
        None => false,
    }
}

#[cfg(target_arch = "wasm32")]
fn call1(target: &JsValue, name: &str, arg: &JsValue) -> bool {
    match method(target, name) {
        Some(func) => func.call1(target, arg).is_ok(),
        None => false,
    }
}

#[cfg(target_arch = "wasm32")]
fn method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

// Host builds (tests) have no WebView; the bridge flattens to no-ops.

#[cfg(not(target_arch = "wasm32"))]
pub fn init() {}

#[cfg(not(target_arch = "wasm32"))]
pub fn haptic_impact(_style: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn haptic_notify(_kind: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn share(_text: &str) -> ShareStatus {
    ShareStatus::Failed
}
