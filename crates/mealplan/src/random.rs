use rand::Rng;
use rand::rngs::{StdRng, ThreadRng};

/// Source of uniform picks used by the generator.
///
/// Production code uses the thread RNG; tests pass a seeded [`StdRng`] or
/// their own scripted source.
pub trait RandomSource {
    /// Uniform index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl RandomSource for ThreadRng {
    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

impl RandomSource for StdRng {
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
