//! Plain (non-interactive) output: the ASCII banner and one-line entries.

use chrono::Local;
use crossterm::style::{Color, Stylize};

use crate::entry::Entry;
use crate::utils::color::mood_style;
use crate::utils::format::{format_intensity, format_timestamp, join_tags};

const BANNER: [(&str, u8); 6] = [
    ("█▀▄▀█ ████▄ ████▄ ██▄     ▄▀  ▄█    ▄▄▄▄▀", 201),
    ("█ █ █ █   █ █   █ █  █  ▄▀    ██ ▀▀▀ █   ", 165),
    ("█ ▄ █ █   █ █   █ █   █ █ ▀▄  ██     █   ", 129),
    ("█   █ ▀████ ▀████ █  █  █   █ ▐█    █    ", 93),
    ("   █              ███▀   ███   ▐    ▀    ", 57),
    ("  ▀                                      ", 21),
];

/// Print the gradient moodgit banner surrounded by blank lines
pub fn print_banner() {
    println!();
    for (line, color) in BANNER {
        println!("{}", line.with(Color::AnsiValue(color)));
    }
    println!();
}

/// One entry as `date | NN/10 mood | "message" | [tags]` without styling.
///
/// Message and tag parts are omitted when empty.
pub fn entry_line(entry: &Entry) -> String {
    compose_line(entry, entry.mood.to_string())
}

/// Same as [`entry_line`] with the mood colored by mood and intensity
pub fn styled_entry_line(entry: &Entry) -> String {
    let mood = mood_style(entry.mood, entry.intensity).apply(entry.mood.as_str());
    compose_line(entry, mood.to_string())
}

fn compose_line(entry: &Entry, mood: String) -> String {
    let mut parts = vec![
        format_timestamp(&entry.created_at.with_timezone(&Local)),
        format!("{} {}", format_intensity(entry.intensity), mood),
    ];

    if !entry.message.is_empty() {
        parts.push(format!("\"{}\"", entry.message));
    }

    if !entry.tags.is_empty() {
        parts.push(format!("[{}]", join_tags(&entry.tags)));
    }

    parts.join(" | ")
}

/// Print entries one per line, newest first as given
pub fn print_history(entries: &[Entry]) {
    for entry in entries {
        println!("{}", styled_entry_line(entry));
    }
}
