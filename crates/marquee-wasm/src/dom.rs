//! DOM lookup and control-class helpers
//!
//! The element ids here are the fixed contract with the page markup.

use marquee_core::ControlHighlight;
use web_sys::{Document, Element};

/// Source element carrying `data-meta` and the host's `data-message`
pub const VIDEO_SOURCE_ID: &str = "video-player-source";

/// Pause control button
pub const PAUSE_BUTTON_ID: &str = "pause-butt";

/// Play control button
pub const PLAY_BUTTON_ID: &str = "play-butt";

/// Class marking the currently highlighted control button
const ACTIVE_CLASS: &str = "active";

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn get_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Move the `active` class onto one control button and off the other.
pub fn set_control_highlight(highlight: ControlHighlight) {
    let (active, inactive) = match highlight {
        ControlHighlight::Pause => (PAUSE_BUTTON_ID, PLAY_BUTTON_ID),
        ControlHighlight::Play => (PLAY_BUTTON_ID, PAUSE_BUTTON_ID),
    };

    if let Some(button) = get_by_id(active) {
        let _ = button.class_list().add_1(ACTIVE_CLASS);
    }
    if let Some(button) = get_by_id(inactive) {
        let _ = button.class_list().remove_1(ACTIVE_CLASS);
    }
}
