//! Marquee WASM - Browser Playback Bootstrap
//!
//! Hunts for the page's video source element and initializes the correct
//! player for the runtime environment:
//! - web: the embedded player library
//! - iOS/Android: the native shell's player, driven over the host bridge
//!
//! Once the embedded player starts there are no follow-up actions. Native
//! shells report status back into the DOM, so a mutation observer keeps the
//! page controls and session time in sync.
//!
//! ## Integration
//!
//! ```javascript
//! import init, { initialize_video_playback } from '@marquee/wasm';
//!
//! await init();
//! initialize_video_playback();
//! ```

use wasm_bindgen::prelude::*;

mod bootstrap;
mod bridge;
mod dom;
mod env;
mod observer;
mod web_player;

pub use bridge::{AndroidVideoBridge, IosVideoBridge};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"[Marquee WASM] Initialized".into());
}

/// Library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Detect the video source element and initialize playback.
///
/// Call once per page load. Pages without a `#video-player-source` element
/// are left untouched.
#[wasm_bindgen]
pub fn initialize_video_playback() {
    if let Some(video_source) = dom::get_by_id(dom::VIDEO_SOURCE_ID) {
        bootstrap::initialize_player(video_source);
    }
}
