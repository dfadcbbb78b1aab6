use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;

/// Source of randomness for shuffling and sampling.
///
/// Every `rand::Rng` is a `RandomSource`, so seeded generators can be passed
/// to the `*_with` operations directly.
pub trait RandomSource {
    /// Uniform index in `[0, n)`. Requires `n > 0`.
    fn random_index(&mut self, n: usize) -> usize;

    /// Uniformly random permutation of `items` in place.
    fn permute<T>(&mut self, items: &mut [T]);
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn random_index(&mut self, n: usize) -> usize {
        assert!(n > 0, "cannot draw an index from an empty range");
        self.random_range(0..n)
    }

    fn permute<T>(&mut self, items: &mut [T]) {
        items.shuffle(self);
    }
}

/// The process-wide default source: the lazily seeded thread-local generator.
pub fn default_source() -> ThreadRng {
    rand::rng()
}
