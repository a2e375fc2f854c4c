//! Injectable source of randomness for tie-breaks.

use rand::Rng;
use rand::rngs::{StdRng, ThreadRng};

/// Picks uniformly among `len` candidates.
///
/// The opponent only needs "pick one of these"; implementing this trait
/// for a scripted type lets tests assert exact choices.
pub trait RandomSource {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

impl RandomSource for StdRng {
    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

impl RandomSource for ThreadRng {
    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Always picks the first candidate. Deterministic stand-in for tests and
/// reproducible demos.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidate;

impl RandomSource for FirstCandidate {
    fn pick(&mut self, _len: usize) -> usize {
        0
    }
}
