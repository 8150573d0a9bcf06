//! Initial codebook seeding.
//!
//! `kseed` selects k representative points ("codevectors") from a dense point set with
//! a k-means++-style, distance-biased sampling loop. The result is meant as the
//! starting codebook for an iterative refinement (k-means, LBG).
//!
//! The public API is under [`seeding`]:
//! - [`select_initial_codebook`]: the one-call entry point
//! - [`Seeder`]: builder with seed, weighting rule and progress reporting
//! - [`PointSet`] / [`Codebook`]: flat `f32` or `f64` point storage, in and out

#![forbid(unsafe_code)]

pub mod error;
pub mod seeding;

pub use error::{Error, Result};
pub use seeding::{
    pairwise_squared_distances, select_initial_codebook, Codebook, PointSet, RandomSource,
    Scalar, Seeder, Weighting,
};
