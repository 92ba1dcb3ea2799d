//! Geometric level generator.

use rand::RngCore;
use thiserror::Error;

use crate::level_generator::{LevelGenerator, Mt19937};

/// The default branching factor: a node grows one more level with
/// probability `1/4`, as in LevelDB and Pugh's original paper.
pub const BRANCHING_FACTOR: u32 = 4;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
/// Errors that can occur when creating a [`Geometric`] level generator.
#[expect(
    clippy::module_name_repetitions,
    reason = "Using 'Error' would be too generic and may cause confusion."
)]
#[non_exhaustive]
pub enum GeometricError {
    /// The maximum number of levels must be non-zero.
    #[error("max must be non-zero.")]
    ZeroMax,
    /// The maximum number of levels must be less than `i32::MAX`.
    #[error("max must be less than i32::MAX.")]
    MaxTooLarge,
    /// The branching factor must be at least 2.
    #[error("branching factor must be at least 2.")]
    InvalidBranching,
}

/// A level generator using a geometric distribution.
///
/// Every node starts at height 1. While the height is below the total, one
/// integer is drawn from the random source and the node grows by one level if
/// that integer is a multiple of the branching factor `$b$`. The probability
/// of a node reaching height `$h$` is therefore `$b^{-(h - 1)}$`, truncated at
/// the maximum number of levels allowed.
///
/// Because the process only relies on integer draws, a given random source
/// and seed produce the same heights on every platform.
#[derive(Debug, Clone)]
pub struct Geometric<R = Mt19937> {
    /// The total number of levels that are assumed to exist.
    total: usize,
    /// Inverse of the probability that a node grows one more level.
    branching: u32,
    /// The random number generator.
    rng: R,
}

impl Geometric {
    /// Create a new geometric level generator with `total` levels and the
    /// given `branching` factor, driven by an [`Mt19937`] engine seeded with
    /// `seed`.
    ///
    /// # Errors
    ///
    /// `total` must be in `[1, i32::MAX]`, and `branching` must be greater
    /// or equal to 2.
    #[inline]
    pub fn new(total: usize, branching: u32, seed: u32) -> Result<Self, GeometricError> {
        Self::with_rng(total, branching, Mt19937::new(seed))
    }
}

impl<R: RngCore> Geometric<R> {
    /// Create a new geometric level generator drawing from an arbitrary random
    /// source.
    ///
    /// # Errors
    ///
    /// `total` must be in `[1, i32::MAX]`, and `branching` must be greater
    /// or equal to 2.
    #[inline]
    pub fn with_rng(total: usize, branching: u32, rng: R) -> Result<Self, GeometricError> {
        if total == 0 {
            return Err(GeometricError::ZeroMax);
        }
        if i32::try_from(total).is_err() {
            return Err(GeometricError::MaxTooLarge);
        }
        if branching < 2 {
            return Err(GeometricError::InvalidBranching);
        }
        Ok(Geometric {
            total,
            branching,
            rng,
        })
    }

    /// The branching factor of the distribution.
    #[inline]
    #[must_use]
    pub fn branching(&self) -> u32 {
        self.branching
    }
}

impl<R: RngCore> LevelGenerator for Geometric<R> {
    #[inline]
    fn total(&self) -> usize {
        self.total
    }

    #[inline]
    fn height(&mut self) -> usize {
        let mut height = 1;
        while height < self.total && self.rng.next_u32() % self.branching == 0 {
            height += 1;
        }
        height
    }
}
