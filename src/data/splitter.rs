// ============================================================
// Layer 4 — Seeded Train/Validation Splitter
// ============================================================
// Shuffles samples with a seeded RNG and cuts them into two
// sets:
//   - kept:      the new training set
//   - held out:  the new validation set
//
// The caller passes the KEPT fraction. A reader asked for
// valid_portion = 0.1 calls split_train_val(train, 0.9, seed).
//
// Determinism:
//   StdRng::seed_from_u64(seed) yields the same permutation for
//   the same seed and input length, so two reads with the same
//   split_seed produce identical partitions.
//
// Cut point: round(N * keep_fraction), clamped to [0, N].
//
// Stratified variant:
//   Groups samples by a key (the label), applies the same cut
//   inside every group, then shuffles each side once more so
//   labels are interleaved again. Every label keeps roughly the
//   same share in both sets.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Shuffle `samples` with `seed` and split into (kept, held_out).
///
/// # Arguments
/// * `samples`       - All samples (consumed)
/// * `keep_fraction` - Proportion kept, e.g. 0.9 keeps 90%
/// * `seed`          - Seed for the shuffle
pub fn split_train_val<T>(mut samples: Vec<T>, keep_fraction: f64, seed: u64) -> (Vec<T>, Vec<T>) {
    let mut rng = StdRng::seed_from_u64(seed);
    samples.shuffle(&mut rng);

    let total    = samples.len();
    let split_at = cut_point(total, keep_fraction);

    // split_off(n) leaves [0..n] in `samples` and returns [n..]
    let held_out = samples.split_off(split_at);

    tracing::debug!(
        "Split {} samples: {} kept, {} held out (seed {})",
        total,
        samples.len(),
        held_out.len(),
        seed,
    );

    (samples, held_out)
}

/// Like [`split_train_val`] but cuts every group returned by `key`
/// separately.
pub fn split_stratified<T, K, F>(
    samples:       Vec<T>,
    keep_fraction: f64,
    seed:          u64,
    key:           F,
) -> (Vec<T>, Vec<T>)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut rng = StdRng::seed_from_u64(seed);

    // BTreeMap so groups are visited in a stable order
    let mut groups: BTreeMap<K, Vec<T>> = BTreeMap::new();
    for s in samples {
        groups.entry(key(&s)).or_default().push(s);
    }

    let mut kept     = Vec::new();
    let mut held_out = Vec::new();

    for (_, mut group) in groups {
        group.shuffle(&mut rng);
        let split_at = cut_point(group.len(), keep_fraction);
        let rest     = group.split_off(split_at);
        kept.extend(group);
        held_out.extend(rest);
    }

    kept.shuffle(&mut rng);
    held_out.shuffle(&mut rng);

    tracing::debug!(
        "Stratified split: {} kept, {} held out (seed {})",
        kept.len(),
        held_out.len(),
        seed,
    );

    (kept, held_out)
}

fn cut_point(total: usize, keep_fraction: f64) -> usize {
    let at = ((total as f64) * keep_fraction).round();
    if at <= 0.0 {
        0
    } else {
        (at as usize).min(total)
    }
}
