use super::traits::{RandomSource, Scalar};
use crate::error::{Error, Result};

/// Turn squared distances into a selection distribution, in place.
///
/// `iteration` is the index of the codevector being selected and only feeds the error.
pub(crate) fn normalize_in_place<T: Scalar>(weights: &mut [T], iteration: usize) -> Result<()> {
    let total = weights.iter().fold(T::zero(), |acc, &w| acc + w);

    if !total.is_finite() {
        return Err(Error::NonFiniteDistance { iteration });
    }
    if total == T::zero() {
        return Err(Error::DegenerateDistribution {
            iteration,
            remaining: weights.len(),
        });
    }

    for w in weights.iter_mut() {
        *w = *w / total;
    }
    Ok(())
}

/// Normalize `weights` and draw one position from the result.
pub(crate) fn sample_proportional<T: Scalar, R: RandomSource + ?Sized>(
    rng: &mut R,
    weights: &mut [T],
    iteration: usize,
) -> Result<usize> {
    normalize_in_place(weights, iteration)?;
    rng.weighted_index(&*weights)
}
