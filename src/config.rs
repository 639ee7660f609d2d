use std::collections::BTreeMap;
use std::path::Path;

use crate::foundation::core::{DurationRange, Viewport};
use crate::foundation::error::{DanmakuError, DanmakuResult};
use crate::mood::model::Mood;
use crate::mood::palette::MoodPalette;

/// Batch-level settings for one overlay.
///
/// Every field has a default, so `{}` is a valid configuration document.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DanmakuConfig {
    /// Upper bound on items shown per batch.
    pub max_messages: usize,
    /// Upper bound on lanes (the lower bound is `tuning.min_lanes`).
    pub max_lanes: usize,
    pub duration_range: DurationRange,
    /// Horizontal clearance kept between consecutive items in one lane.
    pub lane_min_gap_px: f64,
    /// Host-reported viewport; unusable values fall back to 1200x800.
    pub viewport_width: Option<f64>,
    pub viewport_height: Option<f64>,
    /// Fixed RNG seed for reproducible runs.
    pub seed: Option<u64>,
    pub tuning: SchedulerTuning,
    /// Hex color overrides for the display palette.
    pub palette: BTreeMap<Mood, String>,
}

impl Default for DanmakuConfig {
    fn default() -> Self {
        Self {
            max_messages: 28,
            max_lanes: 14,
            duration_range: DurationRange::default(),
            lane_min_gap_px: 80.0,
            viewport_width: None,
            viewport_height: None,
            seed: None,
            tuning: SchedulerTuning::default(),
            palette: BTreeMap::new(),
        }
    }
}

impl DanmakuConfig {
    pub fn from_json_str(s: &str) -> DanmakuResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_file(path: &Path) -> DanmakuResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            DanmakuError::Other(
                anyhow::Error::new(e).context(format!("read config '{}'", path.display())),
            )
        })?;
        Self::from_json_str(&s)
    }

    pub fn validate(&self) -> DanmakuResult<()> {
        if self.max_lanes == 0 {
            return Err(DanmakuError::validation("max_lanes must be > 0"));
        }
        DurationRange::new(self.duration_range.min, self.duration_range.max)?;
        if !self.lane_min_gap_px.is_finite() || self.lane_min_gap_px < 0.0 {
            return Err(DanmakuError::validation(
                "lane_min_gap_px must be finite and >= 0",
            ));
        }
        self.tuning.validate()?;
        for (mood, hex) in &self.palette {
            crate::foundation::core::Rgba8Premul::from_hex(hex).map_err(|e| {
                DanmakuError::validation(format!("palette entry '{mood}': {e}"))
            })?;
        }
        Ok(())
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::resolve(self.viewport_width, self.viewport_height)
    }

    pub fn palette(&self) -> DanmakuResult<MoodPalette> {
        MoodPalette::with_overrides(&self.palette)
    }
}

/// Approximation constants used by the lane scheduler.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchedulerTuning {
    /// Fixed part of the text width estimate (padding, chip chrome).
    pub base_width_px: f64,
    /// Width added per character of text.
    pub per_char_width_px: f64,
    /// Extra distance past the viewport edge before an item counts as gone.
    pub travel_margin_px: f64,
    /// Upper bound of the random delay added on top of a lane's free time.
    pub max_jitter_secs: f64,
    /// Upper bound of the random horizontal start offset.
    pub max_start_offset_px: f64,
    /// Row height as a fraction of viewport height, before clamping.
    pub row_height_ratio: f64,
    pub row_height_min_px: f64,
    pub row_height_max_px: f64,
    /// Lower bound on lane count regardless of viewport height.
    pub min_lanes: usize,
}

impl Default for SchedulerTuning {
    fn default() -> Self {
        Self {
            base_width_px: 32.0,
            per_char_width_px: 18.0,
            travel_margin_px: 40.0,
            max_jitter_secs: 0.6,
            max_start_offset_px: 160.0,
            row_height_ratio: 0.045,
            row_height_min_px: 26.0,
            row_height_max_px: 46.0,
            min_lanes: 4,
        }
    }
}

impl SchedulerTuning {
    pub fn validate(&self) -> DanmakuResult<()> {
        let non_negative = [
            ("base_width_px", self.base_width_px),
            ("per_char_width_px", self.per_char_width_px),
            ("travel_margin_px", self.travel_margin_px),
            ("max_jitter_secs", self.max_jitter_secs),
            ("max_start_offset_px", self.max_start_offset_px),
        ];
        for (name, v) in non_negative {
            if !v.is_finite() || v < 0.0 {
                return Err(DanmakuError::validation(format!(
                    "tuning.{name} must be finite and >= 0"
                )));
            }
        }
        if !self.row_height_ratio.is_finite() || self.row_height_ratio <= 0.0 {
            return Err(DanmakuError::validation(
                "tuning.row_height_ratio must be > 0",
            ));
        }
        if !(self.row_height_min_px > 0.0 && self.row_height_min_px <= self.row_height_max_px)
            || !self.row_height_max_px.is_finite()
        {
            return Err(DanmakuError::validation(
                "tuning row height bounds must satisfy 0 < min <= max",
            ));
        }
        if self.min_lanes == 0 {
            return Err(DanmakuError::validation("tuning.min_lanes must be > 0"));
        }
        Ok(())
    }
}
