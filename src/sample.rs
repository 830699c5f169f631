//! Picking `n` words from a list.
//!
//! Two policies:
//! - **unique** (default): deduplicate, Fisher–Yates shuffle, take a prefix.
//!   No distinct word appears twice; the result is capped at the distinct count.
//! - **with replacement**: `n` independent uniform draws from the original list.
//!
//! With a seed the draws come from [`Mulberry32`], so the output is a pure
//! function of `(words, n, seed, unique)`. Without one they come from
//! `rand::rng()`.
//!
//! Notes:
//! - `*_with_rng` entrypoints take the random source explicitly, for tests and
//!   for callers that manage their own RNG.

use std::collections::HashSet;
use std::hash::Hash;

use rand::RngCore;

use crate::prng::Mulberry32;

/// Parameters for one [`sample`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleOptions {
    /// How many words to return.
    pub n: usize,
    /// Deterministic when set.
    pub seed: Option<u32>,
    /// Sample without replacement. Defaults to `true`.
    pub unique: bool,
}

impl SampleOptions {
    /// `n` unique words from an unseeded source.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            seed: None,
            unique: true,
        }
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Allow repeats.
    pub fn with_replacement(mut self) -> Self {
        self.unique = false;
        self
    }

    /// Set the uniqueness flag directly.
    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Pick words according to `opts`.
///
/// Empty input or `n == 0` yields an empty vector.
pub fn sample<T: Clone + Eq + Hash>(words: &[T], opts: SampleOptions) -> Vec<T> {
    tracing::trace!(
        len = words.len(),
        n = opts.n,
        seed = ?opts.seed,
        unique = opts.unique,
        "sample"
    );

    let mut rng: Box<dyn RngCore> = match opts.seed {
        Some(s) => Box::new(Mulberry32::new(s)),
        None => Box::new(rand::rng()),
    };
    sample_with_rng(words, opts.n, opts.unique, rng.as_mut())
}

/// [`sample`] with a caller-supplied RNG.
pub fn sample_with_rng<T, R>(words: &[T], n: usize, unique: bool, rng: &mut R) -> Vec<T>
where
    T: Clone + Eq + Hash,
    R: RngCore + ?Sized,
{
    if words.is_empty() || n == 0 {
        return Vec::new();
    }

    if unique {
        let mut base = dedup_in_order(words);
        shuffle_with_rng(&mut base, rng);
        base.truncate(n);
        base
    } else {
        (0..n)
            .map(|_| words[pick_index(rng, words.len())].clone())
            .collect()
    }
}

/// In-place Fisher–Yates shuffle, walking from the back.
///
/// Uses [`pick_index`] for every swap, so a seeded [`Mulberry32`] gives the
/// same permutation on every platform.
pub fn shuffle_with_rng<T, R: RngCore + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = pick_index(rng, i + 1);
        items.swap(i, j);
    }
}

/// Uniform index in `0..bound`, computed as `floor(u * bound)` where
/// `u = next_u32 / 2^32`.
///
/// Integer multiply-shift instead of float math; the results are identical.
///
/// # Panics
///
/// Panics if `bound == 0`.
#[inline]
pub fn pick_index<R: RngCore + ?Sized>(rng: &mut R, bound: usize) -> usize {
    assert!(bound > 0, "pick_index: bound must be > 0");
    let x = u128::from(rng.next_u32());
    ((x * bound as u128) >> 32) as usize
}

/// Distinct values in first-occurrence order.
fn dedup_in_order<T: Clone + Eq + Hash>(words: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(words.len());
    words
        .iter()
        .filter(|w| seen.insert(*w))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn words(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_list_or_zero_n_is_empty() {
        let empty: Vec<String> = Vec::new();
        assert!(sample(&empty, SampleOptions::new(5)).is_empty());
        assert!(sample(&empty, SampleOptions::new(5).with_replacement()).is_empty());

        let w = words(&["a", "b"]);
        assert!(sample(&w, SampleOptions::new(0)).is_empty());
        assert!(sample(&w, SampleOptions::new(0).with_replacement()).is_empty());
    }

    #[test]
    fn seeded_unique_fixture() {
        let w = words(&["a", "b", "c", "d"]);
        let got = sample(&w, SampleOptions::new(2).with_seed(42));
        assert_eq!(got, words(&["a", "b"]));
    }

    #[test]
    fn seeded_full_permutation_fixture() {
        let w = words(&["a", "b", "c", "d", "e"]);
        let got = sample(&w, SampleOptions::new(5).with_seed(123));
        assert_eq!(got, words(&["b", "a", "e", "d", "c"]));
    }

    #[test]
    fn seeded_replacement_fixture() {
        let w = words(&["a", "b", "c"]);
        let got = sample(&w, SampleOptions::new(6).with_seed(7).with_replacement());
        assert_eq!(got, words(&["c", "b", "b", "b", "c", "b"]));
    }

    #[test]
    fn seeded_is_repeatable() {
        let w = words(&["x", "y", "z", "w", "v", "u"]);
        let opts = SampleOptions::new(4).with_seed(2024);
        assert_eq!(sample(&w, opts), sample(&w, opts));

        let opts = opts.with_replacement();
        assert_eq!(sample(&w, opts), sample(&w, opts));
    }

    #[test]
    fn unique_caps_at_distinct_count() {
        let w = words(&["a", "a", "b", "b", "c"]);
        let got = sample(&w, SampleOptions::new(10).with_seed(1));
        assert_eq!(got.len(), 3);
        let set: HashSet<_> = got.iter().collect();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn duplicate_input_order_does_not_leak_into_seeded_output() {
        // Dedup keeps first occurrences, so these two lists share a base order.
        let a = words(&["a", "b", "a", "c"]);
        let b = words(&["a", "b", "c", "c", "b"]);
        let opts = SampleOptions::new(3).with_seed(99);
        assert_eq!(sample(&a, opts), sample(&b, opts));
    }

    #[test]
    fn replacement_returns_exactly_n_from_input() {
        let w = words(&["a", "b"]);
        let got = sample(&w, SampleOptions::new(50).with_replacement());
        assert_eq!(got.len(), 50);
        assert!(got.iter().all(|g| w.contains(g)));
    }

    #[test]
    fn input_is_not_mutated() {
        let w = words(&["d", "c", "b", "a"]);
        let before = w.clone();
        let _ = sample(&w, SampleOptions::new(4).with_seed(5));
        assert_eq!(w, before);
    }

    #[test]
    fn works_with_non_string_items() {
        let xs = [1u32, 2, 3, 4, 5];
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let got = sample_with_rng(&xs, 3, true, &mut rng);
        assert_eq!(got.len(), 3);
        assert!(got.iter().all(|x| xs.contains(x)));
    }

    #[test]
    fn pick_index_stays_in_bounds() {
        let mut rng = Mulberry32::new(11);
        for bound in 1..200 {
            assert!(pick_index(&mut rng, bound) < bound);
        }
    }

    #[test]
    fn unique_distribution_uniform() {
        // Chi-squared smoke test on how often each item lands in a 1-of-n pick.
        let n = 20;
        let trials = 20_000u32;
        let items: Vec<usize> = (0..n).collect();
        let mut counts = vec![0usize; n];

        for t in 0..trials {
            let mut rng = Mulberry32::new(t);
            let got = sample_with_rng(&items, 1, true, &mut rng);
            counts[got[0]] += 1;
        }

        let expected = f64::from(trials) / n as f64;
        let chi2: f64 = counts
            .iter()
            .map(|&c| {
                let diff = c as f64 - expected;
                (diff * diff) / expected
            })
            .sum();

        // df = 19; cutoff is far in the tail.
        assert!(chi2 < 60.0, "chi2 too large (chi2={chi2:.2}). counts={counts:?}");
    }

    #[test]
    fn options_builder_defaults() {
        let o = SampleOptions::new(3);
        assert_eq!(o.seed, None);
        assert!(o.unique);
        let o = o.with_seed(4).with_replacement();
        assert_eq!(o.seed, Some(4));
        assert!(!o.unique);
        assert!(o.unique(true).unique);
        assert_eq!(SampleOptions::default().n, 1);
    }
}
