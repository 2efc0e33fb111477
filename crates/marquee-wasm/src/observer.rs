//! Inbound host channel - attribute mutations on the source element
//!
//! The native host reports status by rewriting `data-message` on
//! `#video-player-source`. A `MutationObserver` translates those mutations
//! into typed signals applied to the shared session. Messages arrive in
//! mutation order on the single browser callback queue.

use std::cell::RefCell;
use std::rc::Rc;

use marquee_core::{Error, InboundMessage, PlaybackSession};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, MutationObserver, MutationObserverInit, MutationRecord};

use crate::dom;

/// Attribute the host writes status messages into
pub const MESSAGE_ATTRIBUTE: &str = "data-message";

/// Watch the source element and reflect host signals into the session and
/// the page controls. The observer is never disconnected; the page teardown
/// reclaims it.
pub fn observe(video_source: &Element, session: Rc<RefCell<PlaybackSession>>) {
    let callback = Closure::wrap(Box::new(
        move |mutations: js_sys::Array, _observer: MutationObserver| {
            for mutation in mutations.iter() {
                if let Ok(record) = mutation.dyn_into::<MutationRecord>() {
                    handle_mutation(&record, &session);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, MutationObserver)>);

    match MutationObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => {
            let init = MutationObserverInit::new();
            init.set_attributes(true);
            if observer.observe_with_options(video_source, &init).is_err() {
                web_sys::console::log_1(&"Unable to observe the video source element".into());
            }
        }
        Err(err) => web_sys::console::log_1(&err),
    }

    // Leaked on purpose: inbound messages are delivered for the page
    // lifetime, matching the observer itself.
    callback.forget();
}

fn handle_mutation(record: &MutationRecord, session: &Rc<RefCell<PlaybackSession>>) {
    if record.type_() != "attributes" {
        return;
    }

    // Re-read the attribute from the source element rather than the record;
    // the latest payload wins when mutations batch up.
    let raw = dom::get_by_id(dom::VIDEO_SOURCE_ID)
        .and_then(|element| element.get_attribute(MESSAGE_ATTRIBUTE));

    let decoded = raw
        .ok_or_else(|| Error::MessageParse("message attribute is missing".to_string()))
        .and_then(|raw| InboundMessage::decode(&raw));

    let message = match decoded {
        Ok(message) => message,
        Err(err) => {
            // Decode failure discards this mutation only.
            web_sys::console::log_1(&err.to_string().into());
            return;
        }
    };

    if let Some(highlight) = session.borrow_mut().apply(message.signal()) {
        dom::set_control_highlight(highlight);
    }
}
