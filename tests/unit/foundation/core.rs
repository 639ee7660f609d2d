use super::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn viewport_resolve_falls_back_per_axis() {
    assert_eq!(Viewport::resolve(None, None), Viewport::FALLBACK);
    assert_eq!(
        Viewport::resolve(Some(640.0), Some(f64::NAN)),
        Viewport::new(640.0, 800.0)
    );
    assert_eq!(
        Viewport::resolve(Some(0.0), Some(300.0)),
        Viewport::new(1200.0, 300.0)
    );
    assert_eq!(
        Viewport::resolve(Some(1920.0), Some(1080.0)),
        Viewport::new(1920.0, 1080.0)
    );
}

#[test]
fn duration_range_rejects_bad_bounds() {
    assert!(DurationRange::new(0.0, 5.0).is_err());
    assert!(DurationRange::new(6.0, 5.0).is_err());
    assert!(DurationRange::new(1.0, f64::INFINITY).is_err());
    assert!(DurationRange::new(5.0, 5.0).is_ok());
}

#[test]
fn duration_range_samples_stay_inside() {
    let range = DurationRange::default();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..500 {
        assert!(range.contains(range.sample(&mut rng)));
    }
    let fixed = DurationRange::new(3.0, 3.0).unwrap();
    assert_eq!(fixed.sample(&mut rng), 3.0);
}

#[test]
fn duration_range_deserializes_array_and_object() {
    let a: DurationRange = serde_json::from_str("[4, 9]").unwrap();
    let b: DurationRange = serde_json::from_str(r#"{"min": 4, "max": 9}"#).unwrap();
    assert_eq!(a, b);
    assert!(serde_json::from_str::<DurationRange>("[9, 4]").is_err());
}

#[test]
fn hex_colors_parse_and_premultiply() {
    assert_eq!(
        Rgba8Premul::from_hex("#ff8000").unwrap(),
        Rgba8Premul { r: 255, g: 128, b: 0, a: 255 }
    );
    assert_eq!(
        Rgba8Premul::from_hex("fff").unwrap(),
        Rgba8Premul { r: 255, g: 255, b: 255, a: 255 }
    );
    let half = Rgba8Premul::from_hex("#ffffff80").unwrap();
    assert_eq!(half.a, 128);
    assert_eq!(half.r, 128);
    assert!(Rgba8Premul::from_hex("#12").is_err());
    assert!(Rgba8Premul::from_hex("#zzzzzz").is_err());
    assert!(Rgba8Premul::from_hex("+f+f+f").is_err());
    assert!(Rgba8Premul::from_hex("#+ff").is_err());
}
