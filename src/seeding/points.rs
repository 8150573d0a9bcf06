//! Point storage: a borrowed input [`PointSet`] and the owned output [`Codebook`].

use super::traits::Scalar;
use crate::error::{Error, Result};

/// An immutable set of `N` points of dimension `D`, stored point-major in one flat buffer.
///
/// Point `i` occupies `data[i * dim..(i + 1) * dim]`.
#[derive(Debug, Clone, Copy)]
pub struct PointSet<'a, T> {
    data: &'a [T],
    dim: usize,
}

impl<'a, T: Scalar> PointSet<'a, T> {
    /// Wrap a flat point-major buffer.
    ///
    /// Fails if `dim` is zero or `data.len()` is not a multiple of `dim`.
    pub fn from_flat(data: &'a [T], dim: usize) -> Result<Self> {
        if dim == 0 {
            return Err(Error::InvalidParameter {
                name: "dimension",
                message: "must be at least 1",
            });
        }
        if data.len() % dim != 0 {
            return Err(Error::DimensionMismatch {
                expected: dim,
                found: data.len() % dim,
            });
        }
        Ok(Self { data, dim })
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.data.len() / self.dim
    }

    /// `true` if the set holds no points.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Dimensionality of every point.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The `i`-th point. Panics if `i >= len()`.
    #[inline]
    pub fn point(&self, i: usize) -> &'a [T] {
        &self.data[i * self.dim..(i + 1) * self.dim]
    }
}

/// Flatten row vectors into a point-major buffer, checking that all rows share a dimension.
///
/// Returns the buffer and the dimension.
pub fn flatten_rows<T: Scalar>(rows: &[Vec<T>]) -> Result<(Vec<T>, usize)> {
    let first = rows.first().ok_or(Error::EmptyInput)?;
    let d = first.len();
    if d == 0 {
        return Err(Error::InvalidParameter {
            name: "dimension",
            message: "must be at least 1",
        });
    }

    let mut flat: Vec<T> = Vec::with_capacity(rows.len() * d);
    for row in rows {
        if row.len() != d {
            return Err(Error::DimensionMismatch {
                expected: d,
                found: row.len(),
            });
        }
        flat.extend_from_slice(row);
    }
    Ok((flat, d))
}

/// An ordered set of codevectors, each a copy of a distinct point of the source [`PointSet`].
#[derive(Debug, Clone, PartialEq)]
pub struct Codebook<T> {
    data: Vec<T>,
    dim: usize,
    sources: Vec<usize>,
}

impl<T: Scalar> Codebook<T> {
    pub(crate) fn with_capacity(dim: usize, k: usize) -> Self {
        Self {
            data: Vec::with_capacity(dim * k),
            dim,
            sources: Vec::with_capacity(k),
        }
    }

    /// Append a copy of `points[index]`.
    pub(crate) fn push(&mut self, points: &PointSet<'_, T>, index: usize) {
        self.data.extend_from_slice(points.point(index));
        self.sources.push(index);
    }

    /// Number of codevectors.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// `true` if no codevector has been selected.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Dimensionality of every codevector.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The `n`-th codevector, in selection order. Panics if `n >= len()`.
    pub fn codevector(&self, n: usize) -> &[T] {
        &self.data[n * self.dim..(n + 1) * self.dim]
    }

    /// The most recently selected codevector.
    pub fn last(&self) -> Option<&[T]> {
        self.len().checked_sub(1).map(|n| self.codevector(n))
    }

    /// Iterate over codevectors in selection order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        self.data.chunks_exact(self.dim)
    }

    /// Source point index of each codevector, in selection order.
    pub fn source_indices(&self) -> &[usize] {
        &self.sources
    }

    /// Consume the codebook, returning its flat buffer.
    pub fn into_flat(self) -> Vec<T> {
        self.data
    }

    /// Copy the codevectors out as row vectors.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.iter().map(<[T]>::to_vec).collect()
    }
}
