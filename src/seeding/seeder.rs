//! The seeding loop.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, instrument};

use super::distance::squared_distances_into;
use super::points::{Codebook, PointSet};
use super::progress::Progress;
use super::sampling::sample_proportional;
use super::traits::{RandomSource, Scalar};
use crate::error::{Error, Result};

/// Which selected codevectors a remaining point's weight is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Weighting {
    /// Squared distance to the most recently selected codevector only.
    #[default]
    LastCenter,
    /// Squared distance to the nearest of all selected codevectors (canonical k-means++).
    NearestCenter,
}

/// Default interval between progress events.
pub const DEFAULT_PROGRESS_INTERVAL: Duration = Duration::from_secs(5);

/// k-means++-style initial codebook selection.
#[derive(Debug, Clone)]
pub struct Seeder {
    k: usize,
    weighting: Weighting,
    seed: Option<u64>,
    progress_interval: Option<Duration>,
}

impl Seeder {
    /// Create a seeder that selects `k` codevectors.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            weighting: Weighting::default(),
            seed: None,
            progress_interval: Some(DEFAULT_PROGRESS_INTERVAL),
        }
    }

    /// Set the weighting rule.
    pub fn with_weighting(mut self, weighting: Weighting) -> Self {
        self.weighting = weighting;
        self
    }

    /// Seed the internal RNG used by [`Seeder::seed`].
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Emit an `info` progress event at most once per `interval`; `None` disables them.
    pub fn with_progress_interval(mut self, interval: Option<Duration>) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Number of codevectors this seeder selects.
    pub fn k(&self) -> usize {
        self.k
    }

    /// The configured weighting rule.
    pub fn weighting(&self) -> Weighting {
        self.weighting
    }

    /// Select a codebook using the configured seed, or thread-local entropy if none.
    pub fn seed<T: Scalar>(&self, points: &PointSet<'_, T>) -> Result<Codebook<T>> {
        match self.seed {
            Some(s) => self.seed_with(points, &mut StdRng::seed_from_u64(s)),
            None => self.seed_with(points, &mut rand::rng()),
        }
    }

    /// Select a codebook, drawing all randomness from `rng`.
    #[instrument(
        level = "debug",
        skip_all,
        fields(n_points = points.len(), dim = points.dim(), k = self.k, weighting = ?self.weighting)
    )]
    pub fn seed_with<T: Scalar, R: RandomSource + ?Sized>(
        &self,
        points: &PointSet<'_, T>,
        rng: &mut R,
    ) -> Result<Codebook<T>> {
        let n = points.len();
        let k = self.k;
        if n == 0 {
            return Err(Error::EmptyInput);
        }
        if k == 0 || k > n {
            return Err(Error::InvalidCodebookSize {
                requested: k,
                n_items: n,
            });
        }

        let mut progress = Progress::new(k, self.progress_interval);
        let mut codebook = Codebook::with_capacity(points.dim(), k);
        let mut remaining: Vec<usize> = (0..n).collect();

        let first = rng.uniform_index(remaining.len());
        codebook.push(points, remaining.remove(first));
        debug!(index = codebook.source_indices()[0], "selected first codevector");

        // Scratch buffers, reused across iterations.
        let mut dist2: Vec<T> = Vec::with_capacity(n);
        let mut nearest: Vec<T> = match self.weighting {
            Weighting::LastCenter => Vec::new(),
            Weighting::NearestCenter => vec![T::infinity(); remaining.len()],
        };

        for iteration in 1..k {
            progress.tick(iteration);

            let last = codebook.codevector(iteration - 1);
            squared_distances_into(points, &remaining, last, &mut dist2)?;

            if self.weighting == Weighting::NearestCenter {
                for (m, &d) in nearest.iter_mut().zip(dist2.iter()) {
                    if d < *m {
                        *m = d;
                    }
                }
                dist2.clear();
                dist2.extend_from_slice(&nearest);
            }

            let pos = sample_proportional(rng, &mut dist2, iteration)?;
            codebook.push(points, remaining.remove(pos));
            if self.weighting == Weighting::NearestCenter {
                nearest.remove(pos);
            }
        }

        progress.finish();
        debug!(elapsed = ?progress.elapsed(), "seeding complete");
        Ok(codebook)
    }
}

/// Select `k` distinct points of `points` as an initial codebook.
///
/// The first codevector is drawn uniformly; each following one is drawn with
/// probability proportional to its squared distance to the previously selected
/// codevector. Progress reporting is off.
///
/// # Errors
///
/// - [`Error::EmptyInput`] / [`Error::InvalidCodebookSize`] if `k` is 0 or exceeds the
///   number of points (checked before any sampling).
/// - [`Error::DegenerateDistribution`] if at some step every remaining point equals the
///   previous codevector.
/// - [`Error::NonFiniteDistance`] if a distance sum overflows or the points contain NaN
///   or infinite coordinates.
///
/// ```rust
/// use kseed::{select_initial_codebook, PointSet};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let data = [0.0f32, 0.0, 0.1, 0.1, 10.0, 10.0, 10.1, 10.1];
/// let points = PointSet::from_flat(&data, 2).unwrap();
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let codebook = select_initial_codebook(&points, 2, &mut rng).unwrap();
/// assert_eq!(codebook.len(), 2);
/// assert_ne!(codebook.source_indices()[0], codebook.source_indices()[1]);
/// ```
pub fn select_initial_codebook<T: Scalar, R: RandomSource + ?Sized>(
    points: &PointSet<'_, T>,
    k: usize,
    rng: &mut R,
) -> Result<Codebook<T>> {
    Seeder::new(k)
        .with_progress_interval(None)
        .seed_with(points, rng)
}
