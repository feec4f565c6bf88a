//! Append-only multiset of vertex identifiers backed by a resizing array.

use std::fmt;
use std::iter::FusedIterator;

/// Default capacity for a freshly created bag.
const INITIAL_CAPACITY: usize = 2;

/// A bag (multiset) of vertex identifiers.
///
/// Representation:
/// - `items` is the backing array; only the prefix `items[..len]` is meaningful.
/// - The backing array doubles whenever a full bag receives an `add`, so `add`
///   is amortized O(1) and `is_empty`/`len` are O(1).
///
/// The bag supports insertion and traversal only: there is no removal and no
/// lookup by value. Iteration visits elements in append order, but callers
/// other than [`Clone`] should not rely on any particular order.
#[derive(Clone, Debug)]
pub struct Bag {
    items: Box<[usize]>,
    len: usize,
}

impl Bag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates an empty bag whose backing array holds at least one slot.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: vec![0; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Returns whether the bag holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of items in the bag.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the current capacity of the backing array.
    ///
    /// Always `>= len()`; never shrinks.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Adds an item to the bag, doubling the backing array first if it is full.
    pub fn add(&mut self, item: usize) {
        if self.len == self.items.len() {
            self.resize(2 * self.items.len());
        }
        self.items[self.len] = item;
        self.len += 1;
    }

    /// Reallocates the backing array, preserving the first `len` items in order.
    fn resize(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.len);
        let mut next = vec![0; capacity].into_boxed_slice();
        next[..self.len].copy_from_slice(&self.items[..self.len]);
        self.items = next;
    }

    /// Returns a fresh iterator over the items in append order.
    ///
    /// The iterator is read-only and fused: after yielding the last item it
    /// returns `None` on every subsequent call.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.items[..self.len].iter(),
        }
    }
}

impl Default for Bag {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Bag {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl fmt::Display for Bag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for item in self {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{item}")?;
            first = false;
        }
        Ok(())
    }
}

/// Iterator over the items of a [`Bag`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, usize>,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        self.inner.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

// ============================================================================
// Tests
// ============================================================================
