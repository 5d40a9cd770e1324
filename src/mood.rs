//! Mood vocabulary and the filter cycle used by the log browser.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The fixed set of moods an entry can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Anxious,
    Excited,
    Calm,
    Stressed,
    Tired,
    Neutral,
}

impl Mood {
    /// Every mood, in filter-cycle order.
    pub const ALL: [Mood; 9] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Angry,
        Mood::Anxious,
        Mood::Excited,
        Mood::Calm,
        Mood::Stressed,
        Mood::Tired,
        Mood::Neutral,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Anxious => "anxious",
            Mood::Excited => "excited",
            Mood::Calm => "calm",
            Mood::Stressed => "stressed",
            Mood::Tired => "tired",
            Mood::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mood '{0}'")]
pub struct UnknownMood(pub String);

impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .iter()
            .copied()
            .find(|mood| mood.as_str() == s)
            .ok_or_else(|| UnknownMood(s.to_string()))
    }
}

/// Mood restriction applied to queries: everything, or one exact mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MoodFilter {
    #[default]
    All,
    Only(Mood),
}

impl MoodFilter {
    /// Filter-cycle order: `all` followed by every mood.
    pub const CYCLE: [MoodFilter; 10] = [
        MoodFilter::All,
        MoodFilter::Only(Mood::Happy),
        MoodFilter::Only(Mood::Sad),
        MoodFilter::Only(Mood::Angry),
        MoodFilter::Only(Mood::Anxious),
        MoodFilter::Only(Mood::Excited),
        MoodFilter::Only(Mood::Calm),
        MoodFilter::Only(Mood::Stressed),
        MoodFilter::Only(Mood::Tired),
        MoodFilter::Only(Mood::Neutral),
    ];

    /// Next filter in the cycle, wrapping from `neutral` back to `all`.
    pub fn next(self) -> Self {
        let position = Self::CYCLE.iter().position(|f| *f == self).unwrap_or(0);
        Self::CYCLE[(position + 1) % Self::CYCLE.len()]
    }

    pub fn mood(self) -> Option<Mood> {
        match self {
            MoodFilter::All => None,
            MoodFilter::Only(mood) => Some(mood),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MoodFilter::All => "all",
            MoodFilter::Only(mood) => mood.as_str(),
        }
    }
}

impl fmt::Display for MoodFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoodFilter {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" => Ok(MoodFilter::All),
            other => other.parse().map(MoodFilter::Only),
        }
    }
}
