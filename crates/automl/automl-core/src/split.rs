//! Seeded dataset splits

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn shuffled(n: usize, seed: u64) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(&mut StdRng::seed_from_u64(seed));
    indices
}

/// Split `0..n` into (train, validation) index sets.
///
/// The validation set holds `round(n * ratio)` rows, at least one whenever
/// `n >= 2`, and never all of them.
pub fn train_validation_split(n: usize, ratio: f64, seed: u64) -> (Vec<usize>, Vec<usize>) {
    let indices = shuffled(n, seed);
    let mut held_out = (n as f64 * ratio).round() as usize;
    if n >= 2 {
        held_out = held_out.clamp(1, n - 1);
    } else {
        held_out = 0;
    }
    let (validation, train) = indices.split_at(held_out);
    (train.to_vec(), validation.to_vec())
}

/// Assign `0..n` to `k` folds and return (train, test) index sets per fold.
///
/// Fold sizes differ by at most one.
pub fn k_fold_indices(n: usize, k: usize, seed: u64) -> Vec<(Vec<usize>, Vec<usize>)> {
    let indices = shuffled(n, seed);
    (0..k)
        .map(|fold| {
            let (test, train): (Vec<(usize, usize)>, Vec<(usize, usize)>) = indices
                .iter()
                .copied()
                .enumerate()
                .partition(|(pos, _)| pos % k == fold);
            (
                train.into_iter().map(|(_, i)| i).collect(),
                test.into_iter().map(|(_, i)| i).collect(),
            )
        })
        .collect()
}
