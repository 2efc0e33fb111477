//! One-shot page bootstrap - branch on platform and wire the chosen path
//!
//! Runs once per page load. Web pages hand playback to the embedded library
//! and need nothing further; native pages wire the outbound bridge, the
//! click-to-refocus handler, and the inbound mutation observer, then send a
//! single initial play command. All later interaction is event-driven.

use std::cell::RefCell;
use std::rc::Rc;

use marquee_core::{
    resume_from_url, time_to_seconds, BridgeSender, ControlHighlight, PlaybackSession,
    TimecodeValue, VideoMetadata,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::{bridge, dom, env, observer, web_player};

/// Attribute carrying the video descriptor JSON
pub const META_ATTRIBUTE: &str = "data-meta";

/// Class added to the player element when a native shell owns playback
const NATIVE_CLASS: &str = "native";

/// Initialize playback for the detected video source element.
pub fn initialize_player(video_source: Element) {
    let resume = resume_seconds();
    let Some(metadata) = read_metadata(&video_source) else {
        return;
    };

    let platform = env::snapshot().classify();
    let Some(sender) = bridge::native_bridge_for(platform) else {
        // The embedded player needs no follow-up once it starts.
        web_player::start(resume, metadata);
        return;
    };

    // One session per page load, shared by the click handler and the
    // mutation observer. Neither copy is duplicated; both see every update.
    let session = Rc::new(RefCell::new(PlaybackSession::new(resume.to_string())));
    let sender: Rc<dyn BridgeSender> = Rc::from(sender);

    wire_player_surface(&metadata, Rc::clone(&session), Rc::clone(&sender));
    dom::set_control_highlight(ControlHighlight::Pause);
    observer::observe(&video_source, Rc::clone(&session));

    // Exactly one initial play command, carrying the parsed resume time.
    bridge::send_logged(sender.as_ref(), &session.borrow().focus_command(&metadata));
}

/// Attach the focus re-request to the player surface and mark it native.
fn wire_player_surface(
    metadata: &VideoMetadata,
    session: Rc<RefCell<PlaybackSession>>,
    sender: Rc<dyn BridgeSender>,
) {
    let Some(player_element) = dom::get_by_id(&metadata.player_element_id()) else {
        web_sys::console::log_1(
            &format!("Element not found: #{}", metadata.player_element_id()).into(),
        );
        return;
    };

    let _ = player_element.class_list().add_1(NATIVE_CLASS);

    let on_click =
        Closure::wrap(Box::new(move || request_focus(&session, sender.as_ref())) as Box<dyn FnMut()>);
    let _ = player_element
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    // The listener lives for the page lifetime.
    on_click.forget();
}

/// Click on the player surface: ask the host to take playback back up from
/// the last reported position.
fn request_focus(session: &Rc<RefCell<PlaybackSession>>, sender: &dyn BridgeSender) {
    // Metadata is re-derived on every click, exactly like the initial load.
    let Some(metadata) =
        dom::get_by_id(dom::VIDEO_SOURCE_ID).and_then(|source| read_metadata(&source))
    else {
        return;
    };

    dom::set_control_highlight(ControlHighlight::Pause);
    bridge::send_logged(sender, &session.borrow().focus_command(&metadata));
}

fn read_metadata(video_source: &Element) -> Option<VideoMetadata> {
    let decoded = video_source
        .get_attribute(META_ATTRIBUTE)
        .ok_or(marquee_core::Error::MetadataMissing)
        .and_then(|raw| VideoMetadata::from_json(&raw));

    match decoded {
        Ok(metadata) => Some(metadata),
        Err(err) => {
            web_sys::console::log_1(&format!("Unable to load video metadata: {err}").into());
            None
        }
    }
}

fn resume_seconds() -> TimecodeValue {
    let href = web_sys::window()
        .and_then(|window| window.location().href().ok())
        .unwrap_or_default();
    let parameter = resume_from_url(&href).unwrap_or_else(|| "0".to_string());
    time_to_seconds(&parameter)
}
