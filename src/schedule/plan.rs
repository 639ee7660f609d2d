use crate::foundation::error::{DanmakuError, DanmakuResult};
use crate::mood::model::Mood;
use crate::schedule::lane::LaneLayout;

/// Animation parameters for one snippet.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlannedItem {
    pub text: String,
    pub mood: Mood,
    /// Lane index in `[0, lane_count)`.
    pub lane: usize,
    /// Seconds from batch open until the item starts moving.
    pub delay: f64,
    /// Seconds the item takes to cross `travel_px`.
    pub duration: f64,
    /// Initial horizontal shift in pixels.
    pub start_offset: f64,
    pub estimated_width_px: f64,
    /// Viewport width plus margin plus item width.
    pub travel_px: f64,
    /// Time the lane stays reserved after `delay` so a follower cannot catch up.
    pub reserve_secs: f64,
}

impl PlannedItem {
    pub fn speed_px_per_sec(&self) -> f64 {
        self.travel_px / self.duration
    }

    /// Seconds from batch open until the item has left the screen.
    pub fn end_secs(&self) -> f64 {
        self.delay + self.duration
    }
}

/// Output of one scheduling pass plus the lane geometry it was planned against.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScheduleRun {
    pub total: usize,
    pub lane_count: usize,
    pub row_height_px: f64,
    pub items: Vec<PlannedItem>,
}

impl ScheduleRun {
    pub fn new(items: Vec<PlannedItem>, layout: LaneLayout) -> Self {
        Self {
            total: items.len(),
            lane_count: layout.lane_count,
            row_height_px: layout.row_height_px,
            items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Latest finish time across all items; `0.0` for an empty run.
    pub fn span_secs(&self) -> f64 {
        self.items
            .iter()
            .map(PlannedItem::end_secs)
            .fold(0.0, f64::max)
    }

    /// Items assigned to `lane`, in assignment order.
    pub fn lane_items(&self, lane: usize) -> impl Iterator<Item = &PlannedItem> {
        self.items.iter().filter(move |it| it.lane == lane)
    }

    /// Check that no lane hosts an item before its predecessor's reservation ends
    /// and that every lane index is in range.
    pub fn verify_lane_spacing(&self) -> DanmakuResult<()> {
        let mut last: Vec<Option<&PlannedItem>> = vec![None; self.lane_count];
        for (i, item) in self.items.iter().enumerate() {
            let Some(slot) = last.get_mut(item.lane) else {
                return Err(DanmakuError::validation(format!(
                    "item {i} uses lane {} of {}",
                    item.lane, self.lane_count
                )));
            };
            if let Some(prev) = slot {
                let free_at = prev.delay + prev.reserve_secs;
                if item.delay + 1e-9 < free_at {
                    return Err(DanmakuError::validation(format!(
                        "item {i} starts at {:.3}s on lane {} before it frees at {free_at:.3}s",
                        item.delay, item.lane
                    )));
                }
            }
            *slot = Some(item);
        }
        Ok(())
    }
}
