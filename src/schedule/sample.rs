use rand::Rng;
use rand::seq::SliceRandom;

/// Uniformly random subset of at most `max` items, in shuffled order.
///
/// One Fisher–Yates pass over the whole batch, then truncation.
pub fn sample<T, R>(mut items: Vec<T>, max: usize, rng: &mut R) -> Vec<T>
where
    R: Rng + ?Sized,
{
    items.shuffle(rng);
    items.truncate(max);
    items
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/sample.rs"]
mod tests;
