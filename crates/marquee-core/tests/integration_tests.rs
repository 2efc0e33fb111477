//! Integration tests for Marquee Core

use marquee_core::{
    time_to_seconds, ControlHighlight, HostEnvironment, HostSignal, InboundMessage,
    OutboundCommand, PlaybackSession, Platform, PlayerSetup, TimecodeValue, VideoMetadata,
};

// =============================================================================
// Platform Classification Tests
// =============================================================================

#[test]
fn test_every_environment_classifies_exactly_once() {
    let agents = ["DEV-Native-ios", "DEV-Native-android", "Mozilla/5.0", ""];

    for agent in agents {
        for ios in [false, true] {
            for android in [false, true] {
                let environment = HostEnvironment {
                    user_agent: agent.to_string(),
                    ios_video_handler: ios,
                    android_video_bridge: android,
                };

                let platform = environment.classify();
                let expected = if agent == "DEV-Native-ios" && ios {
                    Platform::NativeIos
                } else if agent == "DEV-Native-android" && android {
                    Platform::NativeAndroid
                } else {
                    Platform::Web
                };
                assert_eq!(platform, expected, "agent={agent:?} ios={ios} android={android}");
            }
        }
    }
}

#[test]
fn test_web_is_the_fallback() {
    assert_eq!(HostEnvironment::default().classify(), Platform::Web);
}

// =============================================================================
// Timecode Tests
// =============================================================================

#[test]
fn test_bare_seconds_pass_through_unchanged() {
    assert_eq!(time_to_seconds("45"), TimecodeValue::Verbatim("45".to_string()));
    assert_eq!(time_to_seconds("45").to_string(), "45");
}

#[test]
fn test_minute_and_hour_timecodes() {
    assert_eq!(time_to_seconds("1:30"), TimecodeValue::Seconds(90));
    assert_eq!(time_to_seconds("1:02:03"), TimecodeValue::Seconds(3723));
}

// =============================================================================
// Metadata Tests
// =============================================================================

#[test]
fn test_partial_metadata_parses_and_degrades() {
    let metadata = VideoMetadata::from_json(r#"{"id":"x1"}"#).unwrap();
    assert_eq!(metadata.id, "x1");
    assert_eq!(metadata.video_source_url, "");
}

#[test]
fn test_malformed_metadata_is_a_logged_error_not_a_panic() {
    assert!(VideoMetadata::from_json(r#"{"id":"x1""#).is_err());
}

// =============================================================================
// Protocol Tests
// =============================================================================

/// Bridge stub that records every command it is asked to deliver.
#[derive(Default)]
struct RecordingBridge {
    sent: std::cell::RefCell<Vec<OutboundCommand>>,
}

impl marquee_core::BridgeSender for RecordingBridge {
    fn send(&self, command: &OutboundCommand) -> marquee_core::Result<()> {
        self.sent.borrow_mut().push(command.clone());
        Ok(())
    }
}

fn sample_metadata() -> VideoMetadata {
    VideoMetadata {
        id: "42".to_string(),
        video_source_url: "https://cdn.example.com/v.m3u8".to_string(),
        video_code: "abc123".to_string(),
        video_thumbnail_url: "https://cdn.example.com/thumb.jpg".to_string(),
        video_closed_caption_track_url: "https://cdn.example.com/cc.vtt".to_string(),
    }
}

#[test]
fn test_initial_load_sends_one_play_with_resume_seconds() {
    use marquee_core::BridgeSender;

    // The native bootstrap sequence: parse resume time, seed the session,
    // send exactly one play command before any user interaction.
    let resume = time_to_seconds("1:30");
    let metadata = sample_metadata();
    let session = PlaybackSession::new(resume.to_string());

    let bridge = RecordingBridge::default();
    bridge
        .send(&OutboundCommand::play(
            metadata.video_source_url.clone(),
            session.current_time(),
        ))
        .unwrap();

    let sent = bridge.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].action, "play");
    assert_eq!(sent[0].seconds, "90");
}

#[test]
fn test_tick_then_focus_replays_from_reported_position() {
    let metadata = sample_metadata();
    let mut session = PlaybackSession::new("0");

    let tick = InboundMessage::decode(r#"{"action":"tick","currentTime":"12"}"#).unwrap();
    assert_eq!(session.apply(tick.signal()), None);

    let command = session.focus_command(&metadata);
    assert_eq!(command.seconds, "12");
}

#[test]
fn test_pause_and_tick_touch_disjoint_state() {
    let mut session = PlaybackSession::new("0");

    let tick = InboundMessage::decode(r#"{"action":"tick","currentTime":"12"}"#).unwrap();
    assert_eq!(session.apply(tick.signal()), None);
    assert_eq!(session.current_time(), "12");

    let pause = InboundMessage::decode(r#"{"action":"pause"}"#).unwrap();
    assert_eq!(session.apply(pause.signal()), Some(ControlHighlight::Play));
    assert_eq!(session.current_time(), "12");
}

#[test]
fn test_highlight_states_are_inverses() {
    // A host pause activates the play button; a user focus request activates
    // the pause button. The two highlights are deliberately opposite - this
    // pins the shipped behavior so nobody "fixes" one side alone.
    let mut session = PlaybackSession::new("0");

    let on_pause = session.apply(HostSignal::Pause).unwrap();
    let on_focus = ControlHighlight::Pause;

    assert_eq!(on_pause, ControlHighlight::Play);
    assert_ne!(on_pause, on_focus);
}

#[test]
fn test_message_decode_failure_discards_only_that_message() {
    let mut session = PlaybackSession::new("7");

    assert!(InboundMessage::decode("{not json").is_err());
    // Session state is untouched by the failed decode.
    assert_eq!(session.current_time(), "7");

    let tick = InboundMessage::decode(r#"{"action":"tick","currentTime":"8"}"#).unwrap();
    session.apply(tick.signal());
    assert_eq!(session.current_time(), "8");
}

// =============================================================================
// Web Player Setup Tests
// =============================================================================

#[test]
fn test_player_setup_wire_shape() {
    let json = serde_json::to_value(PlayerSetup::from_metadata(&sample_metadata())).unwrap();

    assert_eq!(json["file"], "https://cdn.example.com/v.m3u8");
    assert_eq!(json["mediaid"], "abc123");
    assert_eq!(json["autostart"], true);
    assert_eq!(json["image"], "https://cdn.example.com/thumb.jpg");
    assert_eq!(json["playbackRateControls"], true);
    assert_eq!(json["tracks"][0]["label"], "English");
    assert_eq!(json["tracks"][0]["default"], false);
}
