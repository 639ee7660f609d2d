use super::*;
use crate::mood::model::Mood;
use crate::schedule::plan::ScheduleRun;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn scheduler(height: f64, max_lanes: usize) -> LaneScheduler {
    LaneScheduler::from_parts(
        Viewport::new(1200.0, height),
        max_lanes,
        DurationRange::default(),
        80.0,
        SchedulerTuning::default(),
    )
    .unwrap()
}

fn msgs(n: usize) -> Vec<ClassifiedMessage> {
    (0..n)
        .map(|i| ClassifiedMessage::new(format!("消息{i}号有点长的文本"), Mood::Neutral))
        .collect()
}

#[test]
fn layout_follows_viewport_height() {
    let t = SchedulerTuning::default();
    let l = LaneLayout::compute(Viewport::new(1200.0, 800.0), 14, &t).unwrap();
    assert!((l.row_height_px - 36.0).abs() < 1e-9);
    assert_eq!(l.lane_count, 14);

    let l = LaneLayout::compute(Viewport::new(1200.0, 300.0), 14, &t).unwrap();
    assert_eq!(l.row_height_px, 26.0);
    assert_eq!(l.lane_count, 11);

    let l = LaneLayout::compute(Viewport::new(1200.0, 2000.0), 14, &t).unwrap();
    assert_eq!(l.row_height_px, 46.0);
    assert_eq!(l.lane_count, 14);
}

#[test]
fn layout_never_drops_below_min_lanes() {
    let t = SchedulerTuning::default();
    let l = LaneLayout::compute(Viewport::new(1200.0, 50.0), 14, &t).unwrap();
    assert_eq!(l.lane_count, 4);
    let l = LaneLayout::compute(Viewport::new(1200.0, 800.0), 2, &t).unwrap();
    assert_eq!(l.lane_count, 4);
}

#[test]
fn inverted_duration_range_is_rejected() {
    let inverted = DurationRange {
        min: 18.0,
        max: 10.0,
    };
    let r = LaneScheduler::from_parts(
        Viewport::new(1200.0, 800.0),
        14,
        inverted,
        80.0,
        SchedulerTuning::default(),
    );
    assert!(matches!(r, Err(DanmakuError::Validation(_))));
}

#[test]
fn bad_row_height_bounds_are_rejected() {
    let t = SchedulerTuning {
        row_height_min_px: 50.0,
        row_height_max_px: 20.0,
        ..SchedulerTuning::default()
    };
    assert!(matches!(
        LaneLayout::compute(Viewport::new(1200.0, 800.0), 14, &t),
        Err(DanmakuError::Validation(_))
    ));
    let r = LaneScheduler::from_parts(
        Viewport::new(1200.0, 800.0),
        14,
        DurationRange::default(),
        80.0,
        t,
    );
    assert!(r.is_err());
}

#[test]
fn negative_gap_is_rejected() {
    let r = LaneScheduler::from_parts(
        Viewport::new(1200.0, 800.0),
        14,
        DurationRange::default(),
        f64::NAN,
        SchedulerTuning::default(),
    );
    assert!(r.is_err());
    let r = LaneScheduler::from_parts(
        Viewport::new(1200.0, 800.0),
        14,
        DurationRange::default(),
        -1.0,
        SchedulerTuning::default(),
    );
    assert!(r.is_err());
}

#[test]
fn lane_bands_stack_downwards() {
    let l = LaneLayout {
        row_height_px: 30.0,
        lane_count: 5,
    };
    assert_eq!(l.lane_top_px(0), 0.0);
    assert_eq!(l.lane_top_px(3), 90.0);
    assert_eq!(l.lane_center_px(1), 45.0);
}

#[test]
fn width_estimate_counts_chars() {
    let s = scheduler(800.0, 14);
    assert_eq!(s.estimate_width(""), 32.0);
    assert_eq!(s.estimate_width("开心"), 32.0 + 36.0);
    assert_eq!(s.estimate_width("ab"), 32.0 + 36.0);
}

#[test]
fn empty_input_plans_nothing() {
    let s = scheduler(800.0, 14);
    assert!(s.plan(vec![], &mut ChaCha8Rng::seed_from_u64(0)).is_empty());
}

#[test]
fn first_round_fills_lanes_in_index_order() {
    let tuning = SchedulerTuning {
        max_jitter_secs: 0.0,
        ..SchedulerTuning::default()
    };
    let s = LaneScheduler::from_parts(
        Viewport::new(1200.0, 800.0),
        14,
        DurationRange::default(),
        80.0,
        tuning,
    )
    .unwrap();
    let items = s.plan(msgs(14), &mut ChaCha8Rng::seed_from_u64(1));
    let lanes: Vec<usize> = items.iter().map(|it| it.lane).collect();
    assert_eq!(lanes, (0..14).collect::<Vec<_>>());
    assert!(items.iter().all(|it| it.delay == 0.0));
}

#[test]
fn planned_items_respect_bounds_and_spacing() {
    for seed in 0..20u64 {
        let s = scheduler(800.0, 14);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let items = s.plan(msgs(60), &mut rng);
        assert_eq!(items.len(), 60);
        for it in &items {
            assert!(it.lane < 14);
            assert!(DurationRange::default().contains(it.duration));
            assert!((0.0..160.0).contains(&it.start_offset));
            assert!(it.delay >= 0.0);
        }
        ScheduleRun::new(items, s.layout())
            .verify_lane_spacing()
            .unwrap();
    }
}

#[test]
fn reservation_matches_speed_and_gap() {
    let s = scheduler(800.0, 14);
    let items = s.plan(msgs(1), &mut ChaCha8Rng::seed_from_u64(5));
    let it = &items[0];
    assert_eq!(it.travel_px, 1200.0 + 40.0 + it.estimated_width_px);
    let expected = (it.estimated_width_px + 80.0) / it.speed_px_per_sec();
    assert!((it.reserve_secs - expected).abs() < 1e-9);
}

#[test]
fn follower_waits_for_reservation() {
    let tuning = SchedulerTuning {
        min_lanes: 1,
        max_jitter_secs: 0.0,
        ..SchedulerTuning::default()
    };
    let s = LaneScheduler::from_parts(
        Viewport::new(1200.0, 800.0),
        1,
        DurationRange::default(),
        80.0,
        tuning,
    )
    .unwrap();
    assert_eq!(s.layout().lane_count, 1);
    let items = s.plan(msgs(3), &mut ChaCha8Rng::seed_from_u64(11));
    assert!(items.iter().all(|it| it.lane == 0));
    assert_eq!(items[1].delay, items[0].delay + items[0].reserve_secs);
    assert_eq!(items[2].delay, items[1].delay + items[1].reserve_secs);
}

#[test]
fn same_seed_same_plan() {
    let s = scheduler(800.0, 14);
    let a = s.plan(msgs(20), &mut ChaCha8Rng::seed_from_u64(42));
    let b = s.plan(msgs(20), &mut ChaCha8Rng::seed_from_u64(42));
    assert_eq!(a, b);
}

#[test]
fn least_loaded_prefers_lowest_index_on_ties() {
    assert_eq!(least_loaded(&[1.0, 0.5, 0.5, 2.0]), 1);
    assert_eq!(least_loaded(&[0.0, 0.0]), 0);
    assert_eq!(least_loaded(&[3.0]), 0);
}
