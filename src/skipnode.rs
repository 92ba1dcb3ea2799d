//! Nodes of the skiplist and the arena which stores them.
//!
//! Nodes never point at each other directly. Every forward link is a
//! [`NodeId`], a stable index into the owning [`Arena`]. Since links only ever
//! go forward there are no cycles, and releasing a node is a matter of
//! returning its slot to the free list.

use std::{fmt, ops};

// ////////////////////////////////////////////////////////////////////////////
// NodeId
// ////////////////////////////////////////////////////////////////////////////

/// A stable handle to a node stored in an [`Arena`].
///
/// Handles are only meaningful for the arena that issued them, and only until
/// the node they refer to is released.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

// ////////////////////////////////////////////////////////////////////////////
// SkipNode
// ////////////////////////////////////////////////////////////////////////////

/// A single key and its forward links.
///
/// A node of height `h` participates in levels `0..h`, and has exactly `h`
/// links. The height is fixed when the node is created and the link slice is
/// never resized.
pub(crate) struct SkipNode<K> {
    key: K,
    // links[level] is the next node at `level`, or None if this node is the
    // last one on that level.
    links: Box<[Option<NodeId>]>,
}

impl<K> SkipNode<K> {
    /// Create a new node of the given height with all links absent.
    pub(crate) fn new(key: K, height: usize) -> Self {
        debug_assert!(height > 0, "a node must participate in level 0");
        SkipNode {
            key,
            links: vec![None; height].into_boxed_slice(),
        }
    }

    /// The key held by the node.
    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    /// Number of levels the node participates in.
    pub(crate) fn height(&self) -> usize {
        self.links.len()
    }

    /// The next node at `level`.
    pub(crate) fn next(&self, level: usize) -> Option<NodeId> {
        self.links[level]
    }

    /// Point the link at `level` to `node`.
    pub(crate) fn set_next(&mut self, level: usize, node: Option<NodeId>) {
        self.links[level] = node;
    }

    /// Detach the link at `level`, returning where it used to point.
    pub(crate) fn take_next(&mut self, level: usize) -> Option<NodeId> {
        self.links[level].take()
    }

    /// Consumes the node returning the key it contains.
    pub(crate) fn into_key(self) -> K {
        self.key
    }
}

impl<K: fmt::Debug> fmt::Debug for SkipNode<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkipNode")
            .field("key", &self.key)
            .field("height", &self.height())
            .finish()
    }
}

// ////////////////////////////////////////////////////////////////////////////
// Arena
// ////////////////////////////////////////////////////////////////////////////

/// Slot storage for nodes.
///
/// Released slots are kept on a free list and handed out again by later
/// allocations, so the backing vector only grows to the peak number of live
/// nodes.
pub(crate) struct Arena<K> {
    slots: Vec<Option<SkipNode<K>>>,
    free: Vec<NodeId>,
}

impl<K> Arena<K> {
    /// Create an empty arena.
    pub(crate) fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Number of live nodes.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Store `node`, returning its handle.
    pub(crate) fn alloc(&mut self, node: SkipNode<K>) -> NodeId {
        if let Some(id) = self.free.pop() {
            debug_assert!(self.slots[id.0].is_none());
            self.slots[id.0] = Some(node);
            id
        } else {
            self.slots.push(Some(node));
            NodeId(self.slots.len() - 1)
        }
    }

    /// Remove the node behind `id` and return its slot to the free list.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not refer to a live node.
    #[expect(clippy::panic, reason = "A stale handle is a broken list invariant")]
    pub(crate) fn release(&mut self, id: NodeId) -> SkipNode<K> {
        match self.slots.get_mut(id.0).and_then(Option::take) {
            Some(node) => {
                self.free.push(id);
                node
            }
            None => panic!("release of stale node handle {id:?}"),
        }
    }

    /// Number of slots currently allocated, live or free.
    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }
}

impl<K> ops::Index<NodeId> for Arena<K> {
    type Output = SkipNode<K>;

    #[expect(clippy::panic, reason = "A stale handle is a broken list invariant")]
    fn index(&self, id: NodeId) -> &SkipNode<K> {
        match self.slots.get(id.0) {
            Some(Some(node)) => node,
            _ => panic!("stale node handle {id:?}"),
        }
    }
}

impl<K> ops::IndexMut<NodeId> for Arena<K> {
    #[expect(clippy::panic, reason = "A stale handle is a broken list invariant")]
    fn index_mut(&mut self, id: NodeId) -> &mut SkipNode<K> {
        match self.slots.get_mut(id.0) {
            Some(Some(node)) => node,
            _ => panic!("stale node handle {id:?}"),
        }
    }
}
