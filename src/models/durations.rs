//! Conversion between the canonical `H:MM:SS.mmm` display string and an
//! integer millisecond count.
//!
//! `format_duration` is the one true way to render a duration;
//! `parse_duration` additionally accepts the legacy `MM:SS.mmm` shape that
//! older rows used for sub-hour runs (hours implicitly zero).

/// How an empty duration renders.
pub const ZERO_DURATION: &str = "0:00:00.000";

/// Parses a textual duration into milliseconds.
///
/// Tolerant by contract: a non-numeric or missing sub-part counts as zero,
/// and anything that is not a two- or three-group colon-delimited string
/// parses as a zero duration. Never fails, never returns a negative value.
pub fn parse_duration(text: &str) -> i64 {
    let mut groups = text.split(':');
    let (first, second, third) = (groups.next(), groups.next(), groups.next());
    if groups.next().is_some() {
        return 0;
    }
    let (hours, minutes, seconds) = match (first, second, third) {
        (Some(h), Some(m), Some(s)) => (sub_part(h), sub_part(m), s),
        (Some(m), Some(s), None) => (0, sub_part(m), s),
        _ => return 0,
    };
    let (secs, millis) = match seconds.split_once('.') {
        Some((secs, millis)) => (sub_part(secs), sub_part(millis)),
        None => (sub_part(seconds), 0),
    };

    hours
        .saturating_mul(3_600_000)
        .saturating_add(minutes.saturating_mul(60_000))
        .saturating_add(secs.saturating_mul(1000))
        .saturating_add(millis)
}

/// Renders milliseconds as `H:MM:SS.mmm`. Hours are unpadded and may be 0.
///
/// Callers must not pass a negative count; durations are non-negative
/// everywhere in this crate.
pub fn format_duration(ms: i64) -> String {
    let hours = ms / 3_600_000;
    let minutes = ms % 3_600_000 / 60_000;
    let seconds = ms % 60_000 / 1000;
    let millis = ms % 1000;
    format!("{hours}:{minutes:02}:{seconds:02}.{millis:03}")
}

// Sub-parts parse unsigned, so a stray sign is just another malformed part.
fn sub_part(text: &str) -> i64 {
    text.parse::<u64>()
        .ok()
        .and_then(|value| i64::try_from(value).ok())
        .unwrap_or(0)
}
