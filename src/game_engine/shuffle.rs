use rand::Rng;

/// Shuffle `items` in place with Fisher-Yates.
///
/// Walks from the last index down to 1 and swaps each element with a
/// uniformly chosen index in `0..=i`. Empty and single-element slices are
/// left untouched.
pub fn shuffle_in_place<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Return a shuffled copy of `items`, leaving the input as it was.
pub fn shuffled<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle_in_place(&mut out, rng);
    out
}
