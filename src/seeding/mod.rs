//! Initial codebook selection for vector quantization and k-means.
//!
//! ## The problem
//!
//! Iterative codebook refinement (Lloyd / LBG / k-means) only finds a local optimum,
//! and which one depends on where it starts. Drawing k random points as the start
//! tends to put several codevectors in the same dense region and none in sparse ones,
//! which costs extra iterations and often a worse final distortion.
//!
//! ## Distance-biased seeding
//!
//! The seeder picks points one at a time, preferring points far from what was just
//! picked:
//!
//! ```text
//! c_0   ~ Uniform(X)
//! c_n   ~ P(x) = D(x)² / Σ_{y ∈ R} D(y)²      for x ∈ R = X \ {c_0, …, c_{n-1}}
//! ```
//!
//! Sampling is without replacement, so the k codevectors are k distinct input points.
//!
//! ### Weighting
//!
//! By default `D(x)` is the distance to the **most recently selected** codevector
//! `c_{n-1}` ([`Weighting::LastCenter`]). Canonical k-means++ (Arthur & Vassilvitskii,
//! 2007) uses the distance to the **nearest** selected codevector instead; that rule is
//! available as [`Weighting::NearestCenter`]. The two agree for the second codevector
//! and diverge afterwards.
//!
//! ### Degenerate input
//!
//! If every remaining point coincides with the reference codevector, `Σ D²` is zero
//! and there is no distribution to draw from. The seeder reports
//! [`Error::DegenerateDistribution`](crate::Error::DegenerateDistribution) rather than
//! falling back to a uniform draw.
//!
//! ## Cost
//!
//! Each iteration computes one squared distance per remaining point, so the whole run
//! is O(k · N · D) time and O(N + k · D) extra space. No point data is copied apart from
//! the selected codevectors.
//!
//! ## Usage
//!
//! ```rust
//! use kseed::seeding::{PointSet, Seeder, Weighting};
//!
//! let data = vec![
//!     vec![0.0f64, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//! ];
//! let (flat, dim) = kseed::seeding::flatten_rows(&data).unwrap();
//! let points = PointSet::from_flat(&flat, dim).unwrap();
//!
//! let codebook = Seeder::new(3)
//!     .with_seed(42)
//!     .with_weighting(Weighting::LastCenter)
//!     .with_progress_interval(None)
//!     .seed(&points)
//!     .unwrap();
//!
//! assert_eq!(codebook.len(), 3);
//! assert_eq!(codebook.dim(), 2);
//! ```

mod distance;
mod points;
mod progress;
mod sampling;
mod seeder;
mod traits;

pub use distance::pairwise_squared_distances;
pub use points::{flatten_rows, Codebook, PointSet};
pub use seeder::{select_initial_codebook, Seeder, Weighting, DEFAULT_PROGRESS_INTERVAL};
pub use traits::{RandomSource, Scalar};
