//! Injectable source of uniform rolls.

use rand::Rng;

/// Produces uniform values in `[0, 1)`.
///
/// Every `rand::Rng` is a source, so seeded generators drive both the UI and
/// the statistical tests.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen_range(0.0..1.0)
    }
}
