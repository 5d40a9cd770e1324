//! Text formatting helpers shared by the table and the plain log

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Timestamp layout used by both the table and the plain log
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M";

const ELLIPSIS: &str = "...";

/// Format a timestamp as `YYYY/MM/DD HH:MM` in its own timezone
pub fn format_timestamp<Tz>(timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Format an intensity as a zero-padded `NN/10`
pub fn format_intensity(intensity: u8) -> String {
    format!("{:02}/10", intensity)
}

/// Join tags with `", "`, preserving order and duplicates
pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

/// Shorten `text` to at most `max_width` characters.
///
/// Text longer than `max_width` keeps its first `max_width - 3` characters
/// followed by `...`. Widths under 3 fall back to a hard cut.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.chars().count() <= max_width {
        return text.to_string();
    }

    if max_width < ELLIPSIS.len() {
        return text.chars().take(max_width).collect();
    }

    let kept: String = text.chars().take(max_width - ELLIPSIS.len()).collect();
    format!("{kept}{ELLIPSIS}")
}

/// Truncate or right-pad `text` so it spans exactly `width` characters
pub fn fit_to_width(text: &str, width: usize) -> String {
    let truncated = truncate_with_ellipsis(text, width);
    let padding = width.saturating_sub(truncated.chars().count());
    format!("{truncated}{}", " ".repeat(padding))
}
