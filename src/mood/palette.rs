use std::collections::BTreeMap;

use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::DanmakuResult;
use crate::mood::model::Mood;

/// Mood to display color lookup handed to the render layer.
///
/// The scheduler never reads colors; this only travels alongside planned items.
#[derive(Clone, Debug, PartialEq)]
pub struct MoodPalette {
    colors: BTreeMap<Mood, Rgba8Premul>,
}

impl MoodPalette {
    /// Built-in colors, warm for positive moods and cool or muted for the rest.
    pub fn builtin() -> Self {
        let colors = Mood::ALL
            .into_iter()
            .map(|m| {
                let [r, g, b] = default_rgb(m);
                (m, Rgba8Premul::from_straight_rgba(r, g, b, 255))
            })
            .collect();
        Self { colors }
    }

    /// Built-in palette with hex overrides applied on top.
    pub fn with_overrides(overrides: &BTreeMap<Mood, String>) -> DanmakuResult<Self> {
        let mut palette = Self::builtin();
        for (mood, hex) in overrides {
            palette.colors.insert(*mood, Rgba8Premul::from_hex(hex)?);
        }
        Ok(palette)
    }

    pub fn color(&self, mood: Mood) -> Rgba8Premul {
        self.colors
            .get(&mood)
            .copied()
            .unwrap_or_else(|| Rgba8Premul::from_straight_rgba(200, 200, 200, 255))
    }
}

impl Default for MoodPalette {
    fn default() -> Self {
        Self::builtin()
    }
}

fn default_rgb(mood: Mood) -> [u8; 3] {
    match mood {
        Mood::Joy => [0xFF, 0xC8, 0x3D],
        Mood::Love => [0xFF, 0x6F, 0x91],
        Mood::Gratitude => [0xFF, 0xA9, 0x4D],
        Mood::Pride => [0xF5, 0x9E, 0x0B],
        Mood::Excitement => [0xFF, 0x5C, 0x5C],
        Mood::Calm => [0x7E, 0xD9, 0xC3],
        Mood::Relief => [0x9B, 0xE1, 0x8C],
        Mood::Hope => [0x8F, 0xD3, 0xFF],
        Mood::Sadness => [0x6B, 0x8C, 0xC7],
        Mood::Anxiety => [0xB3, 0x9D, 0xDB],
        Mood::Stress => [0xE0, 0x7A, 0x5F],
        Mood::Fatigue => [0x9E, 0x9E, 0xB8],
        Mood::Overwhelm => [0x8E, 0x6C, 0xB8],
        Mood::Lonely => [0x7A, 0x8B, 0xA6],
        Mood::Anger => [0xE5, 0x48, 0x48],
        Mood::Frustration => [0xD9, 0x7B, 0x48],
        Mood::Shame => [0xC4, 0x8B, 0x9F],
        Mood::Guilt => [0xA6, 0x8A, 0x7A],
        Mood::Jealousy => [0x7C, 0xB3, 0x42],
        Mood::Envy => [0x5E, 0xA8, 0x6B],
        Mood::Confusion => [0xB0, 0xA8, 0x9A],
        Mood::Bored => [0xA0, 0xA0, 0xA0],
        Mood::Neutral => [0xDD, 0xDD, 0xDD],
    }
}
