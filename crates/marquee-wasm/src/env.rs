//! Environment probing - user agent and host-injected bridge globals
//!
//! The native shells mark their web views with a sentinel user agent and
//! inject a messaging global. Both markers are snapshotted into a plain
//! [`HostEnvironment`] so classification itself stays DOM-free.

use js_sys::Reflect;
use marquee_core::HostEnvironment;
use wasm_bindgen::JsValue;

/// Snapshot the markers the platform classifier inspects.
pub fn snapshot() -> HostEnvironment {
    let user_agent = web_sys::window()
        .map(|window| window.navigator().user_agent().unwrap_or_default())
        .unwrap_or_default();

    HostEnvironment {
        user_agent,
        ios_video_handler: ios_video_handler().is_some(),
        android_video_bridge: android_video_bridge().is_some(),
    }
}

/// `window.webkit.messageHandlers.video`, when the iOS shell injected it
pub fn ios_video_handler() -> Option<JsValue> {
    let window: JsValue = web_sys::window()?.into();
    let webkit = get(&window, "webkit")?;
    let handlers = get(&webkit, "messageHandlers")?;
    get(&handlers, "video")
}

/// The global `AndroidBridge`, when it exposes a defined `videoMessage`
pub fn android_video_bridge() -> Option<JsValue> {
    let window: JsValue = web_sys::window()?.into();
    let bridge = get(&window, "AndroidBridge")?;

    // The capability only has to be defined, its value is the host's business.
    let video_message = Reflect::get(&bridge, &JsValue::from_str("videoMessage")).ok()?;
    if video_message.is_undefined() {
        return None;
    }
    Some(bridge)
}

// Reflect lookup that treats null and undefined as absent.
fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    let value = Reflect::get(target, &JsValue::from_str(key)).ok()?;
    if value.is_undefined() || value.is_null() {
        None
    } else {
        Some(value)
    }
}
