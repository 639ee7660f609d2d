use rand::Rng;

use crate::config::{DanmakuConfig, SchedulerTuning};
use crate::foundation::core::{DurationRange, Viewport};
use crate::foundation::error::{DanmakuError, DanmakuResult};
use crate::message::input::ClassifiedMessage;
use crate::schedule::plan::PlannedItem;

/// Horizontal bands the overlay is divided into.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LaneLayout {
    pub row_height_px: f64,
    pub lane_count: usize,
}

impl LaneLayout {
    /// Derive band height and count from the viewport height.
    ///
    /// The count never drops below `tuning.min_lanes`, even when that many
    /// bands overflow a very short viewport. Unusable viewport dimensions
    /// resolve to the fallback viewport.
    pub fn compute(
        viewport: Viewport,
        max_lanes: usize,
        tuning: &SchedulerTuning,
    ) -> DanmakuResult<Self> {
        tuning.validate()?;
        let viewport = Viewport::resolve(Some(viewport.width), Some(viewport.height));
        let row_height_px = (viewport.height * tuning.row_height_ratio)
            .clamp(tuning.row_height_min_px, tuning.row_height_max_px);
        let fit = (viewport.height / row_height_px).floor().max(0.0) as usize;
        let upper = max_lanes.max(tuning.min_lanes);
        Ok(Self {
            row_height_px,
            lane_count: fit.clamp(tuning.min_lanes, upper),
        })
    }

    /// Top edge of `lane`'s band in pixels.
    pub fn lane_top_px(&self, lane: usize) -> f64 {
        lane as f64 * self.row_height_px
    }

    pub fn lane_center_px(&self, lane: usize) -> f64 {
        self.lane_top_px(lane) + self.row_height_px * 0.5
    }
}

/// Greedy least-loaded lane assignment.
///
/// Each item goes to the lane that frees up earliest (lowest index on ties) and
/// reserves it long enough that the next item on that lane, whatever its speed,
/// starts only after this one has pulled `lane_min_gap_px` ahead of the entry edge.
/// There is no backtracking; one busy lane can drift far into the future.
#[derive(Clone, Debug)]
pub struct LaneScheduler {
    viewport: Viewport,
    layout: LaneLayout,
    duration_range: DurationRange,
    lane_min_gap_px: f64,
    tuning: SchedulerTuning,
}

impl LaneScheduler {
    pub fn new(config: &DanmakuConfig) -> DanmakuResult<Self> {
        Self::from_parts(
            config.viewport(),
            config.max_lanes,
            config.duration_range,
            config.lane_min_gap_px,
            config.tuning,
        )
    }

    pub fn from_parts(
        viewport: Viewport,
        max_lanes: usize,
        duration_range: DurationRange,
        lane_min_gap_px: f64,
        tuning: SchedulerTuning,
    ) -> DanmakuResult<Self> {
        let duration_range = DurationRange::new(duration_range.min, duration_range.max)?;
        if !lane_min_gap_px.is_finite() || lane_min_gap_px < 0.0 {
            return Err(DanmakuError::validation(
                "lane_min_gap_px must be finite and >= 0",
            ));
        }
        let viewport = Viewport::resolve(Some(viewport.width), Some(viewport.height));
        let layout = LaneLayout::compute(viewport, max_lanes, &tuning)?;
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            row_height = layout.row_height_px,
            lanes = layout.lane_count,
            "lane layout"
        );
        Ok(Self {
            viewport,
            layout,
            duration_range,
            lane_min_gap_px,
            tuning,
        })
    }

    pub fn layout(&self) -> LaneLayout {
        self.layout
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Rough rendered width of `text`. Counts chars, not glyph advances.
    pub fn estimate_width(&self, text: &str) -> f64 {
        self.tuning.base_width_px + self.tuning.per_char_width_px * text.chars().count() as f64
    }

    /// Plan every message in the given order.
    #[tracing::instrument(skip_all, fields(items = messages.len(), lanes = self.layout.lane_count))]
    pub fn plan<R>(&self, messages: Vec<ClassifiedMessage>, rng: &mut R) -> Vec<PlannedItem>
    where
        R: Rng + ?Sized,
    {
        let mut next_free = vec![0.0f64; self.layout.lane_count];
        let mut out = Vec::with_capacity(messages.len());

        for msg in messages {
            let estimated_width_px = self.estimate_width(&msg.text);
            let duration = self.duration_range.sample(rng);
            let travel_px = self.viewport.width + self.tuning.travel_margin_px + estimated_width_px;
            let speed = travel_px / duration;

            let lane = least_loaded(&next_free);
            let delay = next_free[lane] + uniform_below(rng, self.tuning.max_jitter_secs);
            let start_offset = uniform_below(rng, self.tuning.max_start_offset_px);

            let reserve_secs = (estimated_width_px + self.lane_min_gap_px) / speed;
            next_free[lane] = delay + reserve_secs;

            out.push(PlannedItem {
                text: msg.text,
                mood: msg.mood,
                lane,
                delay,
                duration,
                start_offset,
                estimated_width_px,
                travel_px,
                reserve_secs,
            });
        }

        tracing::debug!(
            planned = out.len(),
            horizon = next_free.iter().copied().fold(0.0, f64::max),
            "schedule planned"
        );
        out
    }
}

fn least_loaded(next_free: &[f64]) -> usize {
    let mut best = 0;
    for (i, &t) in next_free.iter().enumerate().skip(1) {
        if t < next_free[best] {
            best = i;
        }
    }
    best
}

fn uniform_below<R: Rng + ?Sized>(rng: &mut R, max: f64) -> f64 {
    if max > 0.0 {
        rng.gen_range(0.0..max)
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/lane.rs"]
mod tests;
