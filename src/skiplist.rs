//! An ordered skiplist set with seeded, reproducible node heights.

use std::{fmt, iter};

use tracing::{debug, trace};

use crate::{
    comparator::{Ascending, Comparator},
    level_generator::{BRANCHING_FACTOR, Geometric, GeometricError, LevelGenerator},
    skipnode::{Arena, NodeId, SkipNode},
};

/// Number of levels used when none is specified.
pub const DEFAULT_MAX_HEIGHT: usize = 14;

/// Seed of the height generator used when none is specified.
pub const DEFAULT_SEED: u32 = 15445;

// ////////////////////////////////////////////////////////////////////////////
// Options
// ////////////////////////////////////////////////////////////////////////////

/// Construction parameters of a [`SkipList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Options {
    /// The maximum height of any node, which is also the number of levels.
    pub max_height: usize,
    /// Seed of the list's own random source. Lists built with the same options
    /// and fed the same operations have identical shapes.
    pub seed: u32,
}

impl Default for Options {
    #[inline]
    fn default() -> Self {
        Options {
            max_height: DEFAULT_MAX_HEIGHT,
            seed: DEFAULT_SEED,
        }
    }
}

impl Options {
    /// Build the geometric level generator described by these options.
    ///
    /// # Errors
    ///
    /// Returns [`GeometricError::ZeroMax`] if `max_height` is zero, and
    /// [`GeometricError::MaxTooLarge`] if it does not fit in an `i32`.
    #[inline]
    pub fn level_generator(&self) -> Result<Geometric, GeometricError> {
        Geometric::new(self.max_height, BRANCHING_FACTOR, self.seed)
    }
}

// ////////////////////////////////////////////////////////////////////////////
// SkipList
// ////////////////////////////////////////////////////////////////////////////

/// A position in the list from which forward links can be followed: either
/// the header or a resident node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    Head,
    Node(NodeId),
}

/// An ordered set of unique keys backed by a skiplist.
///
/// Keys are kept sorted according to the comparator `C`, and two keys are
/// considered the same when neither precedes the other. Each insertion draws
/// the height of the new node from the list's own level generator `G`, so two
/// lists built with the same seed and fed the same operations have exactly the
/// same shape.
///
/// Insertion, removal and lookup are all `O(log(n))` on average.
///
/// Nodes live in an arena and link to each other by index. Dropping or
/// clearing a list therefore never recurses, however long it is.
///
/// The list does no internal locking; all mutation goes through `&mut self`.
pub struct SkipList<K, C = Ascending, G = Geometric> {
    // Forward links of the header, one per level.
    head: Box<[Option<NodeId>]>,
    nodes: Arena<K>,
    len: usize,
    compare: C,
    level_generator: G,
}

// ///////////////////////////////////////////////
// Inherent methods
// ///////////////////////////////////////////////

impl<K: Ord> SkipList<K> {
    /// Create a new skiplist sorted in ascending order, with 14 levels and the
    /// default seed.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipList;
    ///
    /// let mut skiplist: SkipList<i64> = SkipList::new();
    /// assert!(skiplist.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(Ascending)
    }

    /// Create a new skiplist sorted in ascending order with the given options.
    ///
    /// # Errors
    ///
    /// Returns an error if `options.max_height` is zero or does not fit in an
    /// `i32`.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::{Options, SkipList};
    ///
    /// let skiplist = SkipList::<u32>::with_options(Options { max_height: 8, seed: 1 })?;
    /// assert_eq!(skiplist.max_height(), 8);
    /// # Ok::<(), skipset::GeometricError>(())
    /// ```
    #[inline]
    pub fn with_options(options: Options) -> Result<Self, GeometricError> {
        Self::with_comparator_and_options(Ascending, options)
    }
}

impl<K, C: Comparator<K>> SkipList<K, C> {
    /// Create a new skiplist using the provided comparator to order its keys,
    /// with 14 levels and the default seed.
    ///
    /// The comparator **must** be a strict weak ordering; see
    /// [`Comparator`] for details.
    ///
    /// # Panics
    ///
    /// Never in practice: the default [`Options`] always describe a valid
    /// level generator.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::{Descending, SkipList};
    ///
    /// let mut skiplist = SkipList::with_comparator(Descending);
    /// skiplist.insert(1);
    /// skiplist.insert(3);
    /// skiplist.insert(2);
    /// assert_eq!(format!("{skiplist:?}"), "{3, 2, 1}");
    /// ```
    #[inline]
    #[must_use]
    #[expect(
        clippy::expect_used,
        reason = "The default options always describe a valid generator"
    )]
    pub fn with_comparator(compare: C) -> Self {
        Self::with_comparator_and_options(compare, Options::default())
            .expect("default options are valid")
    }

    /// Create a new skiplist with the provided comparator and options.
    ///
    /// # Errors
    ///
    /// Returns an error if `options.max_height` is zero or does not fit in an
    /// `i32`.
    #[inline]
    pub fn with_comparator_and_options(
        compare: C,
        options: Options,
    ) -> Result<Self, GeometricError> {
        let level_generator = options.level_generator()?;
        debug!(
            max_height = options.max_height,
            seed = options.seed,
            "creating skiplist"
        );
        Ok(Self::with_generator(compare, level_generator))
    }
}

impl<K, C, G> SkipList<K, C, G>
where
    C: Comparator<K>,
    G: LevelGenerator,
{
    /// Create a new skiplist from a comparator and an arbitrary level
    /// generator. The list has as many levels as the generator's
    /// [`total`][LevelGenerator::total].
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::{SeedableRng, rngs::SmallRng};
    /// use skipset::{Ascending, Geometric, SkipList};
    ///
    /// let generator = Geometric::with_rng(16, 2, SmallRng::seed_from_u64(7))?;
    /// let mut skiplist = SkipList::with_generator(Ascending, generator);
    /// skiplist.extend(0..100);
    /// assert_eq!(skiplist.len(), 100);
    /// # Ok::<(), skipset::GeometricError>(())
    /// ```
    #[inline]
    pub fn with_generator(compare: C, level_generator: G) -> Self {
        SkipList {
            head: vec![None; level_generator.total()].into_boxed_slice(),
            nodes: Arena::new(),
            len: 0,
            compare,
            level_generator,
        }
    }

    /// The number of levels of the list, which bounds the height of every node.
    #[inline]
    #[must_use]
    pub fn max_height(&self) -> usize {
        self.head.len()
    }

    /// Returns the number of keys in the skiplist.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipList;
    ///
    /// let mut skiplist = SkipList::new();
    /// skiplist.extend(0..10);
    /// assert_eq!(skiplist.len(), 10);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the skiplist contains no keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipList;
    ///
    /// let mut skiplist = SkipList::new();
    /// assert!(skiplist.is_empty());
    ///
    /// skiplist.insert(1);
    /// assert!(!skiplist.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head[0].is_none()
    }

    /// Returns `true` if a key equivalent to `key` is in the skiplist.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipList;
    ///
    /// let skiplist: SkipList<_> = (25..75).collect();
    /// assert!(skiplist.contains(&25));
    /// assert!(!skiplist.contains(&75));
    /// ```
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        let mut at = Cursor::Head;
        for level in (0..self.max_height()).rev() {
            while let Some(next) = self.next(at, level) {
                let next_key = self.nodes[next].key();
                if self.compare.less(next_key, key) {
                    at = Cursor::Node(next);
                } else if self.compare.less(key, next_key) {
                    break;
                } else {
                    return true;
                }
            }
        }
        false
    }

    /// Insert `key` into the skiplist.
    ///
    /// Returns `false`, leaving the list untouched, if an equivalent key is
    /// already present.
    ///
    /// A height is drawn for the new node before looking for duplicates, so a
    /// rejected insertion still advances the list's random sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipList;
    ///
    /// let mut skiplist = SkipList::new();
    /// assert!(skiplist.insert(5));
    /// assert!(!skiplist.insert(5));
    /// assert_eq!(skiplist.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool {
        let height = self.level_generator.height();
        debug_assert!(
            (1..=self.max_height()).contains(&height),
            "level generator produced height {height} outside [1, {}]",
            self.max_height()
        );

        let update = self.predecessors(&key);
        if let Some(next) = self.next(update[0], 0) {
            if self.compare.equivalent(self.nodes[next].key(), &key) {
                trace!(len = self.len, "rejected duplicate key");
                return false;
            }
        }

        let id = self.nodes.alloc(SkipNode::new(key, height));
        for (level, &prev) in update.iter().enumerate().take(height) {
            let after = self.next(prev, level);
            self.nodes[id].set_next(level, after);
            self.set_next(prev, level, Some(id));
        }
        self.len += 1;
        trace!(height, len = self.len, "inserted key");
        true
    }

    /// Remove the key equivalent to `key` from the skiplist, returning it.
    ///
    /// Returns `None`, leaving the list untouched, if no such key is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipList;
    ///
    /// let mut skiplist: SkipList<_> = (0..10).collect();
    /// assert_eq!(skiplist.remove(&4), Some(4));
    /// assert_eq!(skiplist.remove(&4), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<K> {
        if !self.contains(key) {
            return None;
        }

        let update = self.predecessors(key);
        let mut removed = None;
        for (level, &prev) in update.iter().enumerate().rev() {
            let Some(next) = self.next(prev, level) else {
                continue;
            };
            if !self.compare.equivalent(self.nodes[next].key(), key) {
                continue;
            }
            let after = self.nodes[next].take_next(level);
            self.set_next(prev, level, after);
            removed = Some(next);
        }

        // Present at level 0, so it has been found on at least that level.
        let node = self.nodes.release(removed?);
        self.len -= 1;
        trace!(height = node.height(), len = self.len, "erased key");
        Some(node.into_key())
    }

    /// Remove the key equivalent to `key` from the skiplist.
    ///
    /// Returns `true` if a key was removed, and `false` if none was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipList;
    ///
    /// let mut skiplist: SkipList<_> = (0..10).collect();
    /// assert!(skiplist.erase(&3));
    /// assert!(!skiplist.erase(&3));
    /// assert_eq!(skiplist.len(), 9);
    /// ```
    #[inline]
    pub fn erase(&mut self, key: &K) -> bool {
        self.remove(key).is_some()
    }

    /// Clears the skiplist, removing all keys.
    ///
    /// Each level is walked from the header outward and unlinked one node at
    /// a time. Nodes are released as they are unlinked from level 0, which is
    /// processed last.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipList;
    ///
    /// let mut skiplist = SkipList::new();
    /// skiplist.extend(0..10);
    /// skiplist.clear();
    /// assert!(skiplist.is_empty());
    /// assert_eq!(skiplist.len(), 0);
    /// ```
    pub fn clear(&mut self) {
        let mut released = 0_usize;
        for level in (0..self.max_height()).rev() {
            let mut current = self.head[level].take();
            while let Some(id) = current {
                current = self.nodes[id].take_next(level);
                if level == 0 {
                    drop(self.nodes.release(id));
                    released += 1;
                }
            }
        }
        self.len = 0;
        debug!(released, "cleared skiplist");
    }

    /// Returns a displayable view of the list listing each key in order
    /// together with the height of its node, one per line.
    ///
    /// This is a debugging aid and its format carries no guarantee.
    ///
    /// # Examples
    ///
    /// ```
    /// use skipset::SkipList;
    ///
    /// let mut skiplist = SkipList::new();
    /// skiplist.insert(7);
    /// assert_eq!(skiplist.layout().to_string(), "Node { key: 7, height: 3 }\n");
    /// ```
    #[inline]
    #[must_use]
    pub fn layout(&self) -> Layout<'_, K, C, G> {
        Layout { list: self }
    }

    /// Prints the [`layout`][SkipList::layout] of the list to stdout.
    #[expect(clippy::print_stdout, reason = "Debugging aid")]
    pub fn print(&self)
    where
        K: fmt::Display,
    {
        print!("{}", self.layout());
    }
}

// ///////////////////////////////////////////////
// Internal methods
// ///////////////////////////////////////////////

impl<K, C, G> SkipList<K, C, G>
where
    C: Comparator<K>,
    G: LevelGenerator,
{
    /// The node following `at` on `level`.
    fn next(&self, at: Cursor, level: usize) -> Option<NodeId> {
        match at {
            Cursor::Head => self.head[level],
            Cursor::Node(id) => self.nodes[id].next(level),
        }
    }

    /// Point the link of `at` on `level` to `node`.
    fn set_next(&mut self, at: Cursor, level: usize, node: Option<NodeId>) {
        match at {
            Cursor::Head => self.head[level] = node,
            Cursor::Node(id) => self.nodes[id].set_next(level, node),
        }
    }

    /// Descends from the top level and returns, for every level, the last
    /// position whose key strictly precedes `key`.
    fn predecessors(&self, key: &K) -> Vec<Cursor> {
        let mut update = vec![Cursor::Head; self.max_height()];
        let mut at = Cursor::Head;
        for level in (0..self.max_height()).rev() {
            while let Some(next) = self.next(at, level) {
                if !self.compare.less(self.nodes[next].key(), key) {
                    break;
                }
                at = Cursor::Node(next);
            }
            update[level] = at;
        }
        update
    }

    /// Nodes linked on `level`, in link order.
    fn walk(&self, level: usize) -> impl Iterator<Item = (NodeId, &SkipNode<K>)> + '_ {
        iter::successors(self.head[level], move |&id| self.nodes[id].next(level))
            .map(move |id| (id, &self.nodes[id]))
    }

    /// Checks the integrity of the skiplist.
    #[cfg(test)]
    fn check(&self) {
        use std::collections::HashSet;

        assert_eq!(self.head.len(), self.level_generator.total());

        let mut below: HashSet<NodeId> = HashSet::new();
        for level in 0..self.max_height() {
            let nodes: Vec<_> = self.walk(level).collect();
            for (id, node) in &nodes {
                assert!(
                    node.height() > level,
                    "node of height {} linked on level {level}",
                    node.height()
                );
                assert!(node.height() <= self.max_height());
                if level > 0 {
                    assert!(below.contains(id), "level {level} skips a lower level");
                }
            }
            for pair in nodes.windows(2) {
                assert!(
                    self.compare.less(pair[0].1.key(), pair[1].1.key()),
                    "level {level} is not strictly sorted"
                );
            }
            if level == 0 {
                assert_eq!(nodes.len(), self.len);
                assert_eq!(self.nodes.len(), self.len);
            }
            below = nodes.iter().map(|(id, _)| *id).collect();
        }
        assert_eq!(self.is_empty(), self.len == 0);
    }
}

// ///////////////////////////////////////////////
// Trait implementation
// ///////////////////////////////////////////////

impl<K: Ord> Default for SkipList<K> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C, G> Extend<K> for SkipList<K, C, G>
where
    C: Comparator<K>,
    G: LevelGenerator,
{
    /// Inserts every key; duplicates are ignored.
    #[inline]
    fn extend<I: IntoIterator<Item = K>>(&mut self, iterable: I) {
        for key in iterable {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for SkipList<K> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<K, C, G> fmt::Debug for SkipList<K, C, G>
where
    K: fmt::Debug,
    C: Comparator<K>,
    G: LevelGenerator,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.walk(0).map(|(_, node)| node.key()))
            .finish()
    }
}

/// Display adapter returned by [`SkipList::layout`].
pub struct Layout<'a, K, C, G> {
    list: &'a SkipList<K, C, G>,
}

impl<K, C, G> fmt::Display for Layout<'_, K, C, G>
where
    K: fmt::Display,
    C: Comparator<K>,
    G: LevelGenerator,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, node) in self.list.walk(0) {
            writeln!(f, "Node {{ key: {}, height: {} }}", node.key(), node.height())?;
        }
        Ok(())
    }
}

// ////////////////////////////////////////////////////////////////////////////
// Tests
// ////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use anyhow::Result;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};
    use rstest::rstest;

    use super::{DEFAULT_MAX_HEIGHT, Options, SkipList};
    use crate::{
        comparator::{Comparator, Descending},
        level_generator::{GeometricError, LevelGenerator},
    };

    const SCENARIO: [i32; 20] = [
        12, 16, 2, 6, 15, 8, 13, 1, 11, 14, 0, 4, 19, 10, 9, 5, 7, 3, 17, 18,
    ];

    /// Keys and node heights in level-0 order.
    fn heights<K: Clone, C: Comparator<K>, G: LevelGenerator>(
        list: &SkipList<K, C, G>,
    ) -> Vec<(K, usize)> {
        list.walk(0)
            .map(|(_, node)| (node.key().clone(), node.height()))
            .collect()
    }

    fn keys<K: Clone, C: Comparator<K>, G: LevelGenerator>(list: &SkipList<K, C, G>) -> Vec<K> {
        heights(list).into_iter().map(|(key, _)| key).collect()
    }

    #[test]
    fn empty_on_construction() {
        let sl: SkipList<i32> = SkipList::new();
        sl.check();
        assert!(sl.is_empty());
        assert_eq!(sl.len(), 0);
        assert_eq!(sl.max_height(), DEFAULT_MAX_HEIGHT);
        assert!(!sl.contains(&0));
        assert_eq!(format!("{sl:?}"), "{}");
    }

    #[test]
    fn zero_height_is_rejected() {
        assert_eq!(
            SkipList::<i32>::with_options(Options {
                max_height: 0,
                seed: 1
            })
            .err(),
            Some(GeometricError::ZeroMax)
        );
    }

    #[test]
    fn basic_small() {
        let mut sl: SkipList<i64> = SkipList::new();
        sl.check();
        assert!(!sl.erase(&1));
        sl.check();
        assert!(sl.insert(1));
        sl.check();
        assert!(sl.erase(&1));
        sl.check();
        assert!(sl.insert(1));
        assert!(sl.insert(2));
        sl.check();
        assert_eq!(sl.remove(&1), Some(1));
        sl.check();
        assert_eq!(sl.remove(&2), Some(2));
        sl.check();
        assert!(sl.remove(&1).is_none());
        assert!(sl.is_empty());
    }

    #[rstest]
    fn basic_large(#[values(1, 4, 14)] max_height: usize) -> Result<()> {
        let size = 5_000;
        let mut sl = SkipList::with_options(Options {
            max_height,
            seed: 3,
        })?;

        for i in 0..size {
            assert!(sl.insert(i));
            assert_eq!(sl.len(), i + 1);
            assert!(sl.contains(&i));
        }
        sl.check();
        assert_eq!(keys(&sl), (0..size).collect::<Vec<_>>());

        for i in 0..size {
            assert!(sl.erase(&i));
            assert!(!sl.contains(&i));
            assert_eq!(sl.len(), size - i - 1);
        }
        sl.check();
        assert!(sl.is_empty());
        Ok(())
    }

    #[test]
    fn duplicate_insert_is_a_no_op() {
        let mut sl: SkipList<&str> = SkipList::new();
        assert!(sl.insert("apple"));
        let before = heights(&sl);
        assert!(!sl.insert("apple"));
        assert_eq!(sl.len(), 1);
        assert_eq!(heights(&sl), before);
        sl.check();
    }

    #[test]
    fn rejected_duplicate_consumes_a_height() {
        // Seed 15445 draws heights 3, 1, 1, 1, 2, ...
        let mut sl: SkipList<i32> = SkipList::new();
        assert!(sl.insert(0));
        for _ in 0..3 {
            assert!(!sl.insert(0));
        }
        assert!(sl.insert(9));
        assert_eq!(heights(&sl), vec![(0, 3), (9, 2)]);
    }

    #[test]
    fn scenario() {
        let mut sl: SkipList<i32> = SkipList::new();
        for key in SCENARIO {
            assert!(sl.insert(key));
        }
        sl.check();

        assert_eq!(sl.len(), 20);
        for key in SCENARIO {
            assert!(sl.contains(&key));
        }
        assert!(!sl.contains(&20));
        assert!(!sl.contains(&-1));
        assert_eq!(keys(&sl), (0..20).collect::<Vec<_>>());

        let expected = [2, 1, 1, 1, 2, 1, 1, 1, 2, 1, 2, 1, 3, 1, 1, 2, 1, 1, 2, 3];
        assert_eq!(
            heights(&sl),
            (0..20).zip(expected).collect::<Vec<(i32, usize)>>()
        );
    }

    #[test]
    fn scenario_layout() {
        let sl: SkipList<i32> = SCENARIO.into_iter().collect();
        insta::assert_snapshot!(sl.layout().to_string(), @r"
        Node { key: 0, height: 2 }
        Node { key: 1, height: 1 }
        Node { key: 2, height: 1 }
        Node { key: 3, height: 1 }
        Node { key: 4, height: 2 }
        Node { key: 5, height: 1 }
        Node { key: 6, height: 1 }
        Node { key: 7, height: 1 }
        Node { key: 8, height: 2 }
        Node { key: 9, height: 1 }
        Node { key: 10, height: 2 }
        Node { key: 11, height: 1 }
        Node { key: 12, height: 3 }
        Node { key: 13, height: 1 }
        Node { key: 14, height: 1 }
        Node { key: 15, height: 2 }
        Node { key: 16, height: 1 }
        Node { key: 17, height: 1 }
        Node { key: 18, height: 2 }
        Node { key: 19, height: 3 }
        ");
    }

    #[test]
    fn erase() {
        let mut sl: SkipList<i32> = SCENARIO.into_iter().collect();

        let before = heights(&sl);
        assert!(!sl.erase(&20));
        assert!(sl.remove(&-1).is_none());
        assert_eq!(sl.len(), 20);
        assert_eq!(heights(&sl), before);
        sl.check();

        // 19 is one of the tallest nodes.
        assert!(sl.erase(&19));
        assert!(!sl.contains(&19));
        assert_eq!(sl.len(), 19);
        sl.check();
        for level in 0..sl.max_height() {
            assert!(sl.walk(level).all(|(_, node)| *node.key() != 19));
        }

        let mut rng = SmallRng::seed_from_u64(11);
        let mut order: Vec<i32> = (0..19).collect();
        order.shuffle(&mut rng);
        for (i, key) in order.iter().enumerate() {
            assert!(sl.erase(key));
            assert!(!sl.erase(key));
            assert_eq!(sl.len(), 18 - i);
            sl.check();
        }
        assert!(sl.is_empty());
    }

    #[test]
    fn slots_are_reused_after_erase() {
        let mut sl: SkipList<i32> = (0..100).collect();
        for key in 0..50 {
            assert!(sl.erase(&key));
        }
        sl.extend(100..150);
        sl.check();
        assert_eq!(sl.nodes.capacity(), 100);
        assert_eq!(keys(&sl), (50..150).collect::<Vec<_>>());
    }

    #[test]
    fn clear() {
        let mut sl: SkipList<usize> = (0..100_000).collect();
        assert_eq!(sl.len(), 100_000);
        sl.clear();
        sl.check();
        assert!(sl.is_empty());
        assert_eq!(sl.len(), 0);
        assert_eq!(sl.nodes.len(), 0);
        assert!(sl.head.iter().all(Option::is_none));
        assert!(!sl.contains(&0));

        // Still usable afterwards.
        sl.extend([3, 1, 2]);
        sl.check();
        assert_eq!(keys(&sl), vec![1, 2, 3]);

        sl.clear();
        sl.clear();
        assert!(sl.is_empty());
    }

    #[test]
    fn same_seed_same_shape() -> Result<()> {
        let options = Options {
            max_height: 12,
            seed: 2024,
        };
        let mut a = SkipList::with_options(options)?;
        let mut b = SkipList::with_options(options)?;
        let mut rng = SmallRng::seed_from_u64(5);
        for _ in 0..2_000 {
            let key: u16 = rng.random();
            assert_eq!(a.insert(key), b.insert(key));
        }
        assert_eq!(heights(&a), heights(&b));

        let mut c = SkipList::with_options(Options { seed: 2025, ..options })?;
        c.extend(keys(&a));
        assert_eq!(keys(&a), keys(&c));
        assert_ne!(heights(&a), heights(&c));
        Ok(())
    }

    #[rstest]
    #[case(1)]
    #[case(8)]
    fn heights_are_bounded(#[case] max_height: usize) -> Result<()> {
        let mut sl = SkipList::with_options(Options {
            max_height,
            seed: 99,
        })?;
        sl.extend(0..5_000);
        sl.check();
        assert!(
            heights(&sl)
                .iter()
                .all(|&(_, height)| (1..=max_height).contains(&height))
        );
        Ok(())
    }

    #[test]
    fn descending() {
        let mut sl = SkipList::with_comparator(Descending);
        for key in SCENARIO {
            assert!(sl.insert(key));
        }
        sl.check();
        assert_eq!(keys(&sl), (0..20).rev().collect::<Vec<_>>());
        assert!(sl.contains(&7));
        assert!(sl.erase(&7));
        assert!(!sl.contains(&7));
        sl.check();
    }

    #[test]
    fn strings() {
        let mut sl: SkipList<String> = SkipList::new();
        for word in ["pear", "apple", "fig", "banana", "apple"] {
            sl.insert(word.to_owned());
        }
        sl.check();
        assert_eq!(sl.len(), 4);
        assert_eq!(keys(&sl), vec!["apple", "banana", "fig", "pear"]);
        assert!(sl.contains(&"fig".to_owned()));
        assert_eq!(sl.remove(&"banana".to_owned()), Some("banana".to_owned()));
        assert_eq!(format!("{sl:?}"), r#"{"apple", "fig", "pear"}"#);
    }

    #[test]
    fn equivalence_comes_from_the_comparator() {
        // Keys are only compared by their last digit.
        let mut sl: SkipList<u32, _> = SkipList::with_comparator(|a: &u32, b: &u32| a % 10 < b % 10);
        assert!(sl.insert(13));
        assert!(!sl.insert(23));
        assert!(sl.insert(7));
        assert!(sl.contains(&33));
        assert_eq!(sl.len(), 2);
        sl.check();

        assert_eq!(sl.remove(&43), Some(13));
        assert!(!sl.contains(&13));
        assert_eq!(keys(&sl), vec![7]);
    }

    #[test]
    fn layout_of_empty_list() {
        let sl: SkipList<u8> = SkipList::default();
        assert_eq!(sl.layout().to_string(), "");
    }

    proptest! {
        #[test]
        fn matches_btreeset(ops in prop::collection::vec((any::<bool>(), 0_u8..64), 0..400)) {
            let mut sl = SkipList::with_options(Options { max_height: 6, seed: 77 }).unwrap();
            let mut model = BTreeSet::new();
            for (insert, key) in ops {
                if insert {
                    prop_assert_eq!(sl.insert(key), model.insert(key));
                } else {
                    prop_assert_eq!(sl.erase(&key), model.remove(&key));
                }
                prop_assert_eq!(sl.len(), model.len());
            }
            sl.check();
            prop_assert_eq!(keys(&sl), model.iter().copied().collect::<Vec<_>>());
            for key in 0..64 {
                prop_assert_eq!(sl.contains(&key), model.contains(&key));
            }
        }
    }
}
