use std::fmt::Debug;

use num_traits::Float;
use rand::distr::uniform::SampleUniform;
use rand::distr::weighted::{Weight, WeightedIndex};
use rand::distr::Distribution;
use rand::Rng;

use crate::error::{Error, Result};

/// Element type of a point set.
///
/// Implemented for `f32` and `f64`. Every quantity derived from a point set
/// (distances, probabilities, codevectors) is computed in the same type.
pub trait Scalar: Float + SampleUniform + Weight + Debug + Send + Sync + 'static {}

impl Scalar for f32 {}
impl Scalar for f64 {}

/// Source of randomness for the seeding loop.
///
/// Any [`rand::Rng`] is a `RandomSource`; seeding one (e.g. `StdRng::seed_from_u64`)
/// makes the whole selection sequence reproducible.
pub trait RandomSource {
    /// Draw a position uniformly from `0..n`. `n` is at least 1.
    fn uniform_index(&mut self, n: usize) -> usize;

    /// Draw a position with probability `probabilities[i]`.
    ///
    /// `probabilities` is non-empty, non-negative and sums to 1 up to rounding.
    fn weighted_index<T: Scalar>(&mut self, probabilities: &[T]) -> Result<usize>;
}

impl<R: Rng> RandomSource for R {
    fn uniform_index(&mut self, n: usize) -> usize {
        self.random_range(0..n)
    }

    fn weighted_index<T: Scalar>(&mut self, probabilities: &[T]) -> Result<usize> {
        let dist =
            WeightedIndex::new(probabilities).map_err(|e| Error::Sampling(e.to_string()))?;
        Ok(dist.sample(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn uniform_index_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for n in 1..20 {
            for _ in 0..50 {
                assert!(rng.uniform_index(n) < n);
            }
        }
    }

    #[test]
    fn weighted_index_never_picks_zero_weight() {
        let mut rng = StdRng::seed_from_u64(11);
        let p = [0.0f32, 0.5, 0.0, 0.5];
        for _ in 0..500 {
            let i = rng.weighted_index(&p).unwrap();
            assert!(i == 1 || i == 3);
        }
    }

    #[test]
    fn weighted_index_rejects_all_zero() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = rng.weighted_index(&[0.0f64, 0.0]).unwrap_err();
        assert!(matches!(err, Error::Sampling(_)));
    }
}
