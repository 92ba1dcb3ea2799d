//! Skiplists use a probabilistic distribution of nodes over the internal
//! levels, whereby the lowest level (level 0) contains all the nodes, and each
//! level $n > 0$ will contain a random subset of the nodes on level `n - 1`.
//!
//! Most commonly, a geometric distribution is used whereby the chance that a
//! node occupies level $n$ is $p$ times the chance of occupying level $n-1$
//! (with $0 < p < 1$). Here $p$ is expressed through an integer branching
//! factor $b$ with $p = 1 / b$, so that the process can be simulated exactly
//! with integer draws and is identical on every platform.
//!
//! It is very unlikely that this will need to be changed as the default should
//! suffice, but if need be custom level generators can be implemented.

pub mod geometric;
pub mod mt19937;

pub use geometric::{BRANCHING_FACTOR, Geometric, GeometricError};
pub use mt19937::Mt19937;

// ////////////////////////////////////////////////////////////////////////////
// Level Generator
// ////////////////////////////////////////////////////////////////////////////

/// Upon the insertion of a new node in the list, the node is replicated to high
/// levels with a certain probability as determined by a [`LevelGenerator`].
///
/// Generators own their random state. Two generators constructed with the same
/// parameters must produce the same sequence of heights, which is what makes
/// the shape of a list reproducible.
pub trait LevelGenerator {
    /// The total number of levels that are assumed to exist.
    #[must_use]
    fn total(&self) -> usize;

    /// Generate a random height for a new node in the range `[1, total]`.
    ///
    /// This function should _never_ return zero, nor a height greater than
    /// [`total`][LevelGenerator::total].
    #[must_use]
    fn height(&mut self) -> usize;
}
