use std::fmt;
use std::str::FromStr;

use crate::foundation::error::DanmakuError;

/// Closed set of emotion categories a snippet can carry.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Joy,
    Love,
    Gratitude,
    Pride,
    Excitement,
    Calm,
    Relief,
    Hope,
    Sadness,
    Anxiety,
    Stress,
    Fatigue,
    Overwhelm,
    Lonely,
    Anger,
    Frustration,
    Shame,
    Guilt,
    Jealousy,
    Envy,
    Confusion,
    Bored,
    #[default]
    Neutral,
}

impl Mood {
    /// Every mood, in declaration order.
    pub const ALL: [Mood; 23] = [
        Mood::Joy,
        Mood::Love,
        Mood::Gratitude,
        Mood::Pride,
        Mood::Excitement,
        Mood::Calm,
        Mood::Relief,
        Mood::Hope,
        Mood::Sadness,
        Mood::Anxiety,
        Mood::Stress,
        Mood::Fatigue,
        Mood::Overwhelm,
        Mood::Lonely,
        Mood::Anger,
        Mood::Frustration,
        Mood::Shame,
        Mood::Guilt,
        Mood::Jealousy,
        Mood::Envy,
        Mood::Confusion,
        Mood::Bored,
        Mood::Neutral,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Joy => "joy",
            Mood::Love => "love",
            Mood::Gratitude => "gratitude",
            Mood::Pride => "pride",
            Mood::Excitement => "excitement",
            Mood::Calm => "calm",
            Mood::Relief => "relief",
            Mood::Hope => "hope",
            Mood::Sadness => "sadness",
            Mood::Anxiety => "anxiety",
            Mood::Stress => "stress",
            Mood::Fatigue => "fatigue",
            Mood::Overwhelm => "overwhelm",
            Mood::Lonely => "lonely",
            Mood::Anger => "anger",
            Mood::Frustration => "frustration",
            Mood::Shame => "shame",
            Mood::Guilt => "guilt",
            Mood::Jealousy => "jealousy",
            Mood::Envy => "envy",
            Mood::Confusion => "confusion",
            Mood::Bored => "bored",
            Mood::Neutral => "neutral",
        }
    }

    /// `true` for the uplifting half of the set.
    pub fn is_positive(self) -> bool {
        matches!(
            self,
            Mood::Joy
                | Mood::Love
                | Mood::Gratitude
                | Mood::Pride
                | Mood::Excitement
                | Mood::Calm
                | Mood::Relief
                | Mood::Hope
        )
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = DanmakuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Mood::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| DanmakuError::validation(format!("unknown mood '{s}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mood/model.rs"]
mod tests;
