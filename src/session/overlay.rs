use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::completion::tracker::CompletionTracker;
use crate::config::DanmakuConfig;
use crate::foundation::error::DanmakuResult;
use crate::message::input::InputMessage;
use crate::message::normalize::normalize;
use crate::mood::palette::MoodPalette;
use crate::schedule::lane::LaneScheduler;
use crate::schedule::plan::ScheduleRun;
use crate::schedule::sample::sample;

/// Normalize, sample and lane-pack one batch.
pub fn plan_batch<R>(
    messages: &[InputMessage],
    config: &DanmakuConfig,
    rng: &mut R,
) -> DanmakuResult<ScheduleRun>
where
    R: Rng + ?Sized,
{
    config.validate()?;
    let classified = normalize(messages);
    let picked = sample(classified, config.max_messages, rng);
    let scheduler = LaneScheduler::new(config)?;
    let items = scheduler.plan(picked, rng);
    Ok(ScheduleRun::new(items, scheduler.layout()))
}

/// RNG for a batch: seeded from `config.seed` when set, otherwise from OS entropy.
pub fn batch_rng(config: &DanmakuConfig) -> ChaCha8Rng {
    match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

struct Live {
    tracker: CompletionTracker,
    seen: Vec<bool>,
}

/// One open overlay: the planned schedule plus its completion bookkeeping.
///
/// The render layer reports `item_finished(index)` as each item's animation ends.
/// Closing the overlay drops the tracker; later reports are ignored and the
/// completion callback will not run.
pub struct OverlaySession {
    run: ScheduleRun,
    palette: MoodPalette,
    live: Option<Live>,
    /// Set when the tracker is dropped after the batch had already completed.
    completed_before_close: bool,
}

impl OverlaySession {
    #[tracing::instrument(skip_all, fields(input = messages.len()))]
    pub fn open<R>(
        messages: &[InputMessage],
        config: &DanmakuConfig,
        rng: &mut R,
        on_all_finished: impl FnOnce() + Send + 'static,
    ) -> DanmakuResult<Self>
    where
        R: Rng + ?Sized,
    {
        let palette = config.palette()?;
        let run = plan_batch(messages, config, rng)?;
        tracing::info!(
            total = run.total,
            lanes = run.lane_count,
            span_secs = run.span_secs(),
            "overlay opened"
        );
        let live = Live {
            tracker: CompletionTracker::new(run.total, on_all_finished),
            seen: vec![false; run.total],
        };
        Ok(Self {
            run,
            palette,
            live: Some(live),
            completed_before_close: false,
        })
    }

    /// Open with the RNG from [`batch_rng`].
    pub fn open_with_config_seed(
        messages: &[InputMessage],
        config: &DanmakuConfig,
        on_all_finished: impl FnOnce() + Send + 'static,
    ) -> DanmakuResult<Self> {
        let mut rng = batch_rng(config);
        Self::open(messages, config, &mut rng, on_all_finished)
    }

    pub fn run(&self) -> &ScheduleRun {
        &self.run
    }

    pub fn palette(&self) -> &MoodPalette {
        &self.palette
    }

    /// Report that item `index` finished animating.
    ///
    /// Repeated reports for one item count once. Returns `true` when this report
    /// completed the batch.
    pub fn item_finished(&mut self, index: usize) -> bool {
        let Some(live) = self.live.as_mut() else {
            tracing::debug!(index, "finish after close ignored");
            return false;
        };
        let Some(seen) = live.seen.get_mut(index) else {
            tracing::debug!(index, total = self.run.total, "finish for unknown item ignored");
            return false;
        };
        if *seen {
            tracing::debug!(index, "duplicate finish ignored");
            return false;
        }
        *seen = true;
        live.tracker.on_item_finished()
    }

    /// Dismiss the overlay. Idempotent.
    pub fn close(&mut self) {
        let Some(live) = self.live.take() else {
            return;
        };
        if live.tracker.is_complete() {
            self.completed_before_close = true;
        } else {
            tracing::info!(
                finished = live.tracker.finished(),
                total = live.tracker.total(),
                "overlay closed before completion"
            );
        }
    }

    pub fn is_closed(&self) -> bool {
        self.live.is_none()
    }

    /// `true` once every item has finished, including after a later `close`.
    /// A batch closed early never becomes complete.
    pub fn is_complete(&self) -> bool {
        match &self.live {
            Some(live) => live.tracker.is_complete(),
            None => self.completed_before_close,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/overlay.rs"]
mod tests;
