//! A skiplist is a way of storing elements in such a way that elements can be efficiently
//! accessed, inserted and removed, all in `O(log(n))` on average.
//!
//! Conceptually, a skiplist resembles something like:
//!
//! ```text
//! <head> ----------> [2] --------------------------------------------------> [9] ---------->
//! <head> ----------> [2] ------------------------------------[7] ----------> [9] ---------->
//! <head> ----------> [2] ----------> [4] ------------------> [7] ----------> [9] --> [10] ->
//! <head> --> [1] --> [2] --> [3] --> [4] --> [5] --> [6] --> [7] --> [8] --> [9] --> [10] ->
//! ```
//!
//! where we each node `[x]` has references to nodes further down the list, allowing the algorithm
//! to effectively skip ahead.
//!
//! This crate provides [`SkipList`], an ordered set of unique keys intended as the in-memory
//! sorted index of a storage engine (for example a memtable). Its distinguishing feature is that
//! node heights come from a random source owned and seeded by the list itself, so the shape of a
//! list is fully reproducible:
//!
//! ```
//! use skipset::SkipList;
//!
//! let mut skiplist: SkipList<i32> = SkipList::new();
//! for key in [12, 16, 2, 6, 15] {
//!     assert!(skiplist.insert(key));
//! }
//! assert!(!skiplist.insert(6));
//! assert!(skiplist.contains(&15));
//! assert!(skiplist.erase(&2));
//! assert_eq!(skiplist.len(), 4);
//! ```
//!
//! The list has an associated ordering which **must** be a strict weak ordering; see
//! [`Comparator`].
//!
//! **Failure to satisfy these properties can result in unexpected behaviour, such as keys which
//! cannot be found or duplicates which are not detected.**

mod comparator;
pub mod level_generator;
mod skiplist;
mod skipnode;

pub use crate::{
    comparator::{Ascending, Comparator, Descending},
    level_generator::{BRANCHING_FACTOR, Geometric, GeometricError, LevelGenerator, Mt19937},
    skiplist::{DEFAULT_MAX_HEIGHT, DEFAULT_SEED, Layout, Options, SkipList},
};
