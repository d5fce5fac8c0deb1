use rand::Rng;

use crate::game_engine::shuffle::shuffled;

/// Pairs per session when the caller has no preference.
pub const DEFAULT_ROUND_SIZE: usize = 5;

/// Pick up to `k` items for one session, in random order.
///
/// When `items.len() <= k` every item comes back, shuffled. The input is
/// never modified.
pub fn sample_round<T: Clone, R: Rng>(items: &[T], k: usize, rng: &mut R) -> Vec<T> {
    let mut out = shuffled(items, rng);
    out.truncate(k);
    out
}
