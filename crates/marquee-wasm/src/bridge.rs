//! Outbound native bridges - command delivery into the host shells
//!
//! iOS receives the command object through `postMessage`; Android receives a
//! JSON string through the injected bridge's `videoMessage` method. Both are
//! fire-and-forget: a failed delivery is logged and dropped, never retried.

use js_sys::{Function, Reflect};
use marquee_core::{BridgeSender, Error, OutboundCommand, Platform, Result};
use wasm_bindgen::{JsCast, JsValue};

use crate::env;

/// Sender posting into `window.webkit.messageHandlers.video`
pub struct IosVideoBridge {
    handler: JsValue,
}

impl IosVideoBridge {
    /// Wrap the host-injected message handler, if present
    pub fn locate() -> Option<Self> {
        env::ios_video_handler().map(|handler| Self { handler })
    }
}

impl BridgeSender for IosVideoBridge {
    fn send(&self, command: &OutboundCommand) -> Result<()> {
        let payload = serde_wasm_bindgen::to_value(command)
            .map_err(|e| Error::CommandEncode(e.to_string()))?;
        method(&self.handler, "postMessage")?
            .call1(&self.handler, &payload)
            .map_err(|e| Error::BridgeDelivery(describe(&e)))?;
        Ok(())
    }
}

/// Sender invoking the Android shell's `AndroidBridge.videoMessage`
pub struct AndroidVideoBridge {
    bridge: JsValue,
}

impl AndroidVideoBridge {
    /// Wrap the injected global bridge object, if present
    pub fn locate() -> Option<Self> {
        env::android_video_bridge().map(|bridge| Self { bridge })
    }
}

impl BridgeSender for AndroidVideoBridge {
    fn send(&self, command: &OutboundCommand) -> Result<()> {
        let payload = command.to_json()?;
        method(&self.bridge, "videoMessage")?
            .call1(&self.bridge, &JsValue::from_str(&payload))
            .map_err(|e| Error::BridgeDelivery(describe(&e)))?;
        Ok(())
    }
}

/// Locate the outbound sender for an already-classified platform
pub fn native_bridge_for(platform: Platform) -> Option<Box<dyn BridgeSender>> {
    match platform {
        Platform::NativeIos => {
            IosVideoBridge::locate().map(|bridge| Box::new(bridge) as Box<dyn BridgeSender>)
        }
        Platform::NativeAndroid => {
            AndroidVideoBridge::locate().map(|bridge| Box::new(bridge) as Box<dyn BridgeSender>)
        }
        Platform::Web => None,
    }
}

/// Deliver one command, containing any failure as a console diagnostic.
pub fn send_logged(bridge: &dyn BridgeSender, command: &OutboundCommand) {
    if let Err(err) = bridge.send(command) {
        web_sys::console::log_1(&err.to_string().into());
    }
}

fn method(target: &JsValue, name: &str) -> Result<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
        .ok_or_else(|| Error::BridgeDelivery(format!("{name} is not callable")))
}

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}
