use chrono::{FixedOffset, Local, TimeZone, Utc};
use crossterm::style::{Attribute, Color};
use moodgit::display::entry_line;
use moodgit::entry::Entry;
use moodgit::mood::Mood;
use moodgit::utils::color::{intensity_attributes, mood_color, mood_style};
use moodgit::utils::format::{fit_to_width, format_intensity, format_timestamp, join_tags, truncate_with_ellipsis};

#[test]
fn test_format_timestamp_uses_given_zone() {
    let utc = Utc.with_ymd_and_hms(2024, 12, 31, 23, 5, 0).unwrap();
    assert_eq!(format_timestamp(&utc), "2024/12/31 23:05");

    let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
    assert_eq!(format_timestamp(&utc.with_timezone(&tokyo)), "2025/01/01 08:05");
}

#[test]
fn test_format_intensity_is_zero_padded() {
    assert_eq!(format_intensity(0), "00/10");
    assert_eq!(format_intensity(7), "07/10");
    assert_eq!(format_intensity(10), "10/10");
}

#[test]
fn test_join_tags_keeps_order_and_duplicates() {
    assert_eq!(join_tags(&[]), "");
    let tags = vec!["b".to_string(), "a".to_string(), "b".to_string()];
    assert_eq!(join_tags(&tags), "b, a, b");
}

#[test]
fn test_truncate_with_ellipsis() {
    assert_eq!(truncate_with_ellipsis("short", 28), "short");

    let exact = "x".repeat(28);
    assert_eq!(truncate_with_ellipsis(&exact, 28), exact);

    let long = "y".repeat(29);
    let cut = truncate_with_ellipsis(&long, 28);
    assert_eq!(cut, format!("{}...", "y".repeat(25)));
    assert_eq!(cut.chars().count(), 28);

    // Counted in characters, not bytes
    let accented = "é".repeat(30);
    assert_eq!(truncate_with_ellipsis(&accented, 10), format!("{}...", "é".repeat(7)));

    // Too narrow for an ellipsis
    assert_eq!(truncate_with_ellipsis("abcdef", 2), "ab");
    assert_eq!(truncate_with_ellipsis("abcdef", 0), "");
}

#[test]
fn test_fit_to_width_pads_and_cuts() {
    assert_eq!(fit_to_width("abc", 6), "abc   ");
    assert_eq!(fit_to_width("abcdefgh", 6), "abc...");
    assert_eq!(fit_to_width("abc", 0), "");
}

#[test]
fn test_intensity_attributes_by_band() {
    assert_eq!(intensity_attributes(10), &[Attribute::Bold, Attribute::Italic]);
    assert_eq!(intensity_attributes(8), &[Attribute::Bold, Attribute::Italic]);
    assert_eq!(intensity_attributes(7), &[Attribute::Bold]);
    assert_eq!(intensity_attributes(6), &[Attribute::Bold]);
    assert!(intensity_attributes(5).is_empty());
    assert!(intensity_attributes(4).is_empty());
    assert_eq!(intensity_attributes(3), &[Attribute::Dim]);
    assert_eq!(intensity_attributes(2), &[Attribute::Dim]);
    assert_eq!(intensity_attributes(1), &[Attribute::Dim, Attribute::Italic]);
    assert_eq!(intensity_attributes(0), &[Attribute::Dim, Attribute::Italic]);
}

#[test]
fn test_mood_style_carries_color_and_attributes() {
    assert_eq!(mood_color(Mood::Happy), Color::Green);

    let style = mood_style(Mood::Happy, 9);
    assert_eq!(style.foreground_color, Some(Color::Green));
    assert!(style.attributes.has(Attribute::Bold));
    assert!(style.attributes.has(Attribute::Italic));

    let style = mood_style(Mood::Sad, 5);
    assert_eq!(style.foreground_color, Some(mood_color(Mood::Sad)));
    assert!(style.attributes.is_empty());
}

#[test]
fn test_entry_line_omits_empty_parts() {
    let at = Utc.with_ymd_and_hms(2024, 4, 2, 7, 15, 0).unwrap();
    let date = at.with_timezone(&Local).format("%Y/%m/%d %H:%M").to_string();

    let full = Entry {
        id: 1,
        intensity: 8,
        mood: Mood::Happy,
        message: "coffee with sam".to_string(),
        tags: vec!["friends".to_string(), "morning".to_string()],
        created_at: at,
        updated_at: at,
    };
    assert_eq!(
        entry_line(&full),
        format!("{date} | 08/10 happy | \"coffee with sam\" | [friends, morning]")
    );

    let bare = Entry {
        message: String::new(),
        tags: Vec::new(),
        ..full
    };
    assert_eq!(entry_line(&bare), format!("{date} | 08/10 happy"));
}
