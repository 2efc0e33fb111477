//! Timecode parsing - resume-time extraction and conversion
//!
//! The resume time arrives as the page-URL query parameter `t`, formatted as
//! `HH:MM:SS`, `MM:SS`, or plain seconds.

use url::Url;

/// Result of converting a colon-delimited timecode.
///
/// Inputs shorter than three characters pass through verbatim; everything
/// else is reduced to whole seconds. The split preserves the shape the
/// command channel has always carried: verbatim values are forwarded as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimecodeValue {
    /// Input returned unchanged (bare second counts of one or two digits)
    Verbatim(String),
    /// Parsed total seconds
    Seconds(i64),
}

impl TimecodeValue {
    /// Total seconds, reading verbatim values on demand
    pub fn as_seconds(&self) -> i64 {
        match self {
            TimecodeValue::Verbatim(raw) => raw.trim().parse().unwrap_or(0),
            TimecodeValue::Seconds(secs) => *secs,
        }
    }

    /// True when playback should start from the beginning
    pub fn is_zero(&self) -> bool {
        self.as_seconds() == 0
    }
}

impl std::fmt::Display for TimecodeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimecodeValue::Verbatim(raw) => write!(f, "{}", raw),
            TimecodeValue::Seconds(secs) => write!(f, "{}", secs),
        }
    }
}

/// Convert a colon-delimited timecode to seconds.
///
/// The branch is chosen by string length, not component count: fewer than
/// three characters is already a bare second count and passes through
/// unchanged; up to five characters is read as `M:SS`/`MM:SS`; anything
/// longer is read as `H:MM:SS`. A missing or non-numeric component voids the
/// whole conversion to zero; empty components count as zero on their own.
pub fn time_to_seconds(hms: &str) -> TimecodeValue {
    if hms.len() < 3 {
        return TimecodeValue::Verbatim(hms.to_string());
    }

    let parts: Vec<&str> = hms.split(':').collect();
    let total = if hms.len() < 6 {
        minutes_seconds(&parts)
    } else {
        hours_minutes_seconds(&parts)
    };
    TimecodeValue::Seconds(total.unwrap_or(0))
}

fn minutes_seconds(parts: &[&str]) -> Option<i64> {
    Some(component(parts.first())? * 60 + component(parts.get(1))?)
}

fn hours_minutes_seconds(parts: &[&str]) -> Option<i64> {
    Some(
        component(parts.first())? * 3600
            + component(parts.get(1))? * 60
            + component(parts.get(2))?,
    )
}

// Lenient numeric read: an empty component is zero, a missing or
// non-numeric one voids the conversion.
fn component(raw: Option<&&str>) -> Option<i64> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return Some(0);
    }
    raw.parse().ok()
}

/// Extract the `t` resume parameter from the page URL.
///
/// Returns `None` when the URL does not parse or carries no `t` parameter.
/// Values are percent-decoded, with `+` read as a space.
pub fn resume_from_url(href: &str) -> Option<String> {
    let url = Url::parse(href).ok()?;
    url.query_pairs()
        .find(|(name, _)| name == "t")
        .map(|(_, value)| value.into_owned())
}
