//! Squared Euclidean distances from a batch of candidates to one reference point.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::points::PointSet;
use super::traits::Scalar;
use crate::error::{Error, Result};

#[inline]
pub(crate) fn squared_euclidean<T: Scalar>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).fold(T::zero(), |acc, (&x, &y)| {
        let d = x - y;
        acc + d * d
    })
}

/// Squared Euclidean distance from each candidate point to `reference`.
///
/// `candidates` are indices into `points`; entry `j` of the result is
/// `Σ_d (points[candidates[j]][d] - reference[d])²`, computed in `T`.
///
/// Fails with [`Error::IndexOutOfRange`] if a candidate is not a point of `points`,
/// and with [`Error::DimensionMismatch`] if `reference` has the wrong dimension.
///
/// With the `parallel` feature the batch is split across threads. Each entry is
/// still accumulated by a single worker in dimension order, so the output does
/// not depend on the split.
pub fn pairwise_squared_distances<T: Scalar>(
    points: &PointSet<'_, T>,
    candidates: &[usize],
    reference: &[T],
) -> Result<Vec<T>> {
    if let Some(&index) = candidates.iter().find(|&&i| i >= points.len()) {
        return Err(Error::IndexOutOfRange {
            index,
            len: points.len(),
        });
    }

    let mut out = Vec::with_capacity(candidates.len());
    squared_distances_into(points, candidates, reference, &mut out)?;
    Ok(out)
}

/// Like [`pairwise_squared_distances`], but writes into `out` (cleared first) so the
/// seeding loop can reuse one buffer. Candidates are not bounds-checked.
pub(crate) fn squared_distances_into<T: Scalar>(
    points: &PointSet<'_, T>,
    candidates: &[usize],
    reference: &[T],
    out: &mut Vec<T>,
) -> Result<()> {
    if reference.len() != points.dim() {
        return Err(Error::DimensionMismatch {
            expected: points.dim(),
            found: reference.len(),
        });
    }

    out.clear();

    #[cfg(feature = "parallel")]
    out.par_extend(
        candidates
            .par_iter()
            .map(|&i| squared_euclidean(points.point(i), reference)),
    );

    #[cfg(not(feature = "parallel"))]
    out.extend(
        candidates
            .iter()
            .map(|&i| squared_euclidean(points.point(i), reference)),
    );

    Ok(())
}
