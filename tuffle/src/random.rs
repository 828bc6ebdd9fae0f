use rand::{rngs::ThreadRng, Rng};
use squirrel_rng::SquirrelRng;

/// A source of uniformly distributed indices.
///
/// Secret selection goes through this trait rather than a global generator so that tests can
/// substitute a seeded or scripted source.
pub trait RandomSource {
    /// Returns a value in `0..n`. `n` must be greater than zero.
    fn next_in_range(&mut self, n: usize) -> usize;
}

impl RandomSource for SquirrelRng {
    fn next_in_range(&mut self, n: usize) -> usize {
        self.gen_range(0..n)
    }
}

impl RandomSource for ThreadRng {
    fn next_in_range(&mut self, n: usize) -> usize {
        self.gen_range(0..n)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_in_range(&mut self, n: usize) -> usize {
        (**self).next_in_range(n)
    }
}
