use super::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn length_is_min_of_max_and_input() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert_eq!(sample((0..10).collect(), 4, &mut rng).len(), 4);
    assert_eq!(sample((0..3).collect(), 28, &mut rng).len(), 3);
    assert_eq!(sample((0..3).collect(), 0, &mut rng).len(), 0);
    assert!(sample(Vec::<u8>::new(), 5, &mut rng).is_empty());
}

#[test]
fn output_is_a_permutation_when_not_truncated() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let mut out = sample((0..50).collect::<Vec<u32>>(), 50, &mut rng);
    out.sort_unstable();
    assert_eq!(out, (0..50).collect::<Vec<u32>>());
}

#[test]
fn same_seed_same_sample() {
    let a = sample((0..30).collect::<Vec<u32>>(), 10, &mut ChaCha8Rng::seed_from_u64(9));
    let b = sample((0..30).collect::<Vec<u32>>(), 10, &mut ChaCha8Rng::seed_from_u64(9));
    assert_eq!(a, b);
}

#[test]
fn every_position_is_reachable_for_every_item() {
    // Coarse uniformity check: each of 4 items should lead the output
    // roughly a quarter of the time.
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut first = [0u32; 4];
    for _ in 0..4000 {
        let out = sample(vec![0usize, 1, 2, 3], 1, &mut rng);
        first[out[0]] += 1;
    }
    for count in first {
        assert!((800..1200).contains(&count), "{first:?}");
    }
}
