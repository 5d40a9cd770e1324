use crossterm::style::{Attribute, Color, ContentStyle, Stylize};

use crate::mood::Mood;

/// Terminal color associated with each mood
#[must_use]
pub fn mood_color(mood: Mood) -> Color {
    match mood {
        Mood::Happy => Color::Green,
        Mood::Sad => Color::Blue,
        Mood::Angry => Color::DarkRed,
        Mood::Anxious => Color::Yellow,
        Mood::Excited => Color::Magenta,
        Mood::Calm => Color::Cyan,
        Mood::Stressed => Color::Red,
        Mood::Tired => Color::Grey,
        Mood::Neutral => Color::White,
    }
}

/// Text attributes that get stronger as intensity rises
#[must_use]
pub fn intensity_attributes(intensity: u8) -> &'static [Attribute] {
    match intensity {
        8.. => &[Attribute::Bold, Attribute::Italic],
        6..=7 => &[Attribute::Bold],
        4..=5 => &[],
        2..=3 => &[Attribute::Dim],
        _ => &[Attribute::Dim, Attribute::Italic],
    }
}

/// Combined style for rendering a mood literal at a given intensity
#[must_use]
pub fn mood_style(mood: Mood, intensity: u8) -> ContentStyle {
    intensity_attributes(intensity)
        .iter()
        .fold(ContentStyle::new().with(mood_color(mood)), |style, attribute| {
            style.attribute(*attribute)
        })
}
