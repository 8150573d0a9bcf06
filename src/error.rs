use thiserror::Error;

/// Errors returned by the seeding routines in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Point set is empty.
    #[error("empty input")]
    EmptyInput,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Requested codebook size is incompatible with the point set.
    #[error("invalid codebook size: requested {requested}, but point set has {n_items} points")]
    InvalidCodebookSize {
        /// Requested number of codevectors.
        requested: usize,
        /// Number of points available.
        n_items: usize,
    },

    /// Two vectors (or a flat buffer and its declared dimension) disagree in length.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// Every remaining point coincides with the reference codevector, so the
    /// squared distances sum to zero and no distribution can be formed.
    #[error(
        "degenerate distribution at iteration {iteration}: \
         all {remaining} remaining points coincide with the last codevector"
    )]
    DegenerateDistribution {
        /// Index of the codevector being selected.
        iteration: usize,
        /// Size of the remaining pool.
        remaining: usize,
    },

    /// The squared distances summed to NaN or infinity: either the sum overflowed
    /// (e.g. `f32` coordinates around 1e19) or the input contains NaN/inf.
    #[error(
        "non-finite distance sum at iteration {iteration}: \
         distance sum overflowed or input contains NaN/inf"
    )]
    NonFiniteDistance {
        /// Index of the codevector being selected.
        iteration: usize,
    },

    /// A point index does not address a point of the set.
    #[error("point index {index} out of range for {len} points")]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Number of points in the set.
        len: usize,
    },

    /// The weighted sampler rejected its input.
    #[error("sampling failed: {0}")]
    Sampling(String),
}

impl Error {
    /// `true` for errors caused by caller-supplied arguments, detected before any work.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::EmptyInput | Error::InvalidParameter { .. } | Error::InvalidCodebookSize { .. }
        )
    }
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
