//! Danmaku schedules mood-tagged text snippets as a floating overlay.
//!
//! A batch flows through four stages:
//!
//! 1. [`normalize`]: coerce raw input into [`ClassifiedMessage`]s, inferring moods with [`classify`]
//! 2. [`sample`]: shuffle and cap the batch at `max_messages`
//! 3. [`LaneScheduler::plan`]: assign lane, delay, duration and start offset per item
//! 4. [`CompletionTracker`]: fold per-item finish signals into one completion callback
//!
//! [`OverlaySession`] wires all four together for one overlay lifetime. Rendering is left to the
//! host; it receives an immutable [`ScheduleRun`] and reports finished items back.
#![forbid(unsafe_code)]

pub mod completion;
pub mod config;
pub mod foundation;
pub mod message;
pub mod mood;
pub mod schedule;
pub mod session;

pub use completion::tracker::CompletionTracker;
pub use config::{DanmakuConfig, SchedulerTuning};
pub use foundation::core::{DurationRange, Rgba8Premul, Viewport};
pub use foundation::error::{DanmakuError, DanmakuResult};
pub use message::input::{ClassifiedMessage, InputMessage};
pub use message::normalize::normalize;
pub use mood::classify::{MOOD_RULES, MoodRule, classify};
pub use mood::model::Mood;
pub use mood::palette::MoodPalette;
pub use schedule::lane::{LaneLayout, LaneScheduler};
pub use schedule::plan::{PlannedItem, ScheduleRun};
pub use schedule::sample::sample;
pub use session::overlay::{OverlaySession, batch_rng, plan_batch};
