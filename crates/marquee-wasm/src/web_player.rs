//! Embedded player glue - waits for the library global, then configures it
//!
//! The player library loads from its own script tag, so availability is
//! polled on a short fixed interval. The poll self-cancels on the first
//! success and deliberately has no retry limit: if the library never loads,
//! the loop runs for the page lifetime.

use gloo_timers::future::TimeoutFuture;
use js_sys::{Function, Reflect};
use marquee_core::{PlayerSetup, TimecodeValue, VideoMetadata, LIBRARY_POLL_INTERVAL_MS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Global factory function the player library installs
const LIBRARY_GLOBAL: &str = "jwplayer";

/// Start the embedded web player once its library is available, seeking to
/// `resume` after the first frame when nonzero. No follow-up interaction
/// happens after setup.
pub fn start(resume: TimecodeValue, metadata: VideoMetadata) {
    wasm_bindgen_futures::spawn_local(async move {
        let factory = loop {
            if let Some(factory) = library_factory() {
                break factory;
            }
            TimeoutFuture::new(LIBRARY_POLL_INTERVAL_MS).await;
        };

        if let Err(err) = setup_player(&factory, &resume, &metadata) {
            web_sys::console::log_1(&err);
        }
    });
}

fn setup_player(
    factory: &Function,
    resume: &TimecodeValue,
    metadata: &VideoMetadata,
) -> std::result::Result<(), JsValue> {
    let element_id = JsValue::from_str(&metadata.player_element_id());
    let player = factory.call1(&JsValue::UNDEFINED, &element_id)?;

    let options = serde_wasm_bindgen::to_value(&PlayerSetup::from_metadata(metadata))
        .map_err(JsValue::from)?;
    call_method(&player, "setup", &[options])?;

    // A zero resume time starts from the beginning with no extra handlers.
    if resume.is_zero() {
        return Ok(());
    }

    let seconds = resume.as_seconds() as f64;
    let on_ready = Closure::once_into_js(move |_event: JsValue| {
        if let Some(player) = singleton() {
            let _ = call_method(&player, "play", &[]);
        }
    });
    let on_first_frame = Closure::once_into_js(move || {
        if let Some(player) = singleton() {
            let _ = call_method(&player, "seek", &[JsValue::from_f64(seconds)]);
        }
    });

    if let Some(player) = singleton() {
        call_method(&player, "on", &[JsValue::from_str("ready"), on_ready])?;
        call_method(&player, "on", &[JsValue::from_str("firstFrame"), on_first_frame])?;
    }

    Ok(())
}

fn library_factory() -> Option<Function> {
    let window: JsValue = web_sys::window()?.into();
    Reflect::get(&window, &JsValue::from_str(LIBRARY_GLOBAL))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
}

// The library's no-argument call returns the player singleton; resume
// handlers re-fetch it at fire time.
fn singleton() -> Option<JsValue> {
    let factory = library_factory()?;
    factory.call0(&JsValue::UNDEFINED).ok()
}

fn call_method(
    target: &JsValue,
    name: &str,
    args: &[JsValue],
) -> std::result::Result<JsValue, JsValue> {
    let method = Reflect::get(target, &JsValue::from_str(name))?
        .dyn_into::<Function>()
        .map_err(|_| JsValue::from_str(&format!("{name} is not a function")))?;

    let arguments = js_sys::Array::new();
    for arg in args {
        arguments.push(arg);
    }
    method.apply(target, &arguments)
}
