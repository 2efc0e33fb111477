//! Platform classification - decides which playback path owns the page
//!
//! A page is driven either by the embedded web player or by a native mobile
//! shell that renders its own player UI outside the page. The two paths are
//! mutually exclusive; exactly one initializes per page load.

use serde::{Deserialize, Serialize};

/// User agent the iOS shell installs in its web view
pub const IOS_USER_AGENT: &str = "DEV-Native-ios";

/// User agent the Android shell installs in its web view
pub const ANDROID_USER_AGENT: &str = "DEV-Native-android";

/// Playback path for the current page load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    /// Page is hosted inside the iOS shell's web view
    NativeIos,
    /// Page is hosted inside the Android shell's web view
    NativeAndroid,
    /// Plain web browser
    Web,
}

impl Platform {
    /// Returns true when a native shell owns the actual player UI
    pub fn is_native(&self) -> bool {
        matches!(self, Platform::NativeIos | Platform::NativeAndroid)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::NativeIos => write!(f, "native-ios"),
            Platform::NativeAndroid => write!(f, "native-android"),
            Platform::Web => write!(f, "web"),
        }
    }
}

/// Snapshot of the environment markers the classifier inspects.
///
/// Built by the browser adapter from `navigator.userAgent` and probes for
/// the host-injected bridge globals. A plain struct keeps the classifier
/// testable without a DOM.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostEnvironment {
    /// Exact user agent string reported by the browser
    pub user_agent: String,
    /// `window.webkit.messageHandlers.video` exists
    pub ios_video_handler: bool,
    /// A global `AndroidBridge` exists with a defined `videoMessage` member
    pub android_video_bridge: bool,
}

impl HostEnvironment {
    /// Classify the environment into exactly one playback path.
    ///
    /// Both native predicates require the exact sentinel user agent AND the
    /// matching bridge global; anything else falls through to `Web`. A
    /// missing global simply fails the predicate, it is never an error.
    pub fn classify(&self) -> Platform {
        if self.user_agent == IOS_USER_AGENT && self.ios_video_handler {
            Platform::NativeIos
        } else if self.user_agent == ANDROID_USER_AGENT && self.android_video_bridge {
            Platform::NativeAndroid
        } else {
            Platform::Web
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(user_agent: &str, ios: bool, android: bool) -> HostEnvironment {
        HostEnvironment {
            user_agent: user_agent.to_string(),
            ios_video_handler: ios,
            android_video_bridge: android,
        }
    }

    #[test]
    fn ios_requires_sentinel_and_handler() {
        assert_eq!(env(IOS_USER_AGENT, true, false).classify(), Platform::NativeIos);
        assert_eq!(env(IOS_USER_AGENT, false, false).classify(), Platform::Web);
        assert_eq!(env("Mozilla/5.0", true, false).classify(), Platform::Web);
    }

    #[test]
    fn android_requires_sentinel_and_bridge() {
        assert_eq!(
            env(ANDROID_USER_AGENT, false, true).classify(),
            Platform::NativeAndroid
        );
        assert_eq!(env(ANDROID_USER_AGENT, false, false).classify(), Platform::Web);
        assert_eq!(env("Mozilla/5.0", false, true).classify(), Platform::Web);
    }

    #[test]
    fn web_is_the_default() {
        assert_eq!(env("", false, false).classify(), Platform::Web);
        assert_eq!(env("Mozilla/5.0 (X11; Linux)", false, false).classify(), Platform::Web);
    }

    #[test]
    fn sentinel_match_is_exact() {
        // A browser that merely contains the sentinel does not qualify.
        assert_eq!(
            env("Mozilla/5.0 DEV-Native-ios", true, false).classify(),
            Platform::Web
        );
        assert_eq!(env("dev-native-ios", true, false).classify(), Platform::Web);
    }

    #[test]
    fn mismatched_bridge_does_not_cross_platforms() {
        // The iOS sentinel with only the Android bridge present (and vice
        // versa) is still a plain web browser.
        assert_eq!(env(IOS_USER_AGENT, false, true).classify(), Platform::Web);
        assert_eq!(env(ANDROID_USER_AGENT, true, false).classify(), Platform::Web);
    }

    #[test]
    fn native_platforms_report_native() {
        assert!(Platform::NativeIos.is_native());
        assert!(Platform::NativeAndroid.is_native());
        assert!(!Platform::Web.is_native());
    }
}
