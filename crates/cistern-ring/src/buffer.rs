//! The ring buffer itself.

use std::fmt;

use crate::error::RingError;
use crate::iter::{Drain, IntoIter, Iter};

/// A fixed-capacity FIFO queue that overwrites its oldest item when full.
///
/// Occupied slots always form one contiguous cyclic run of `len` slots
/// starting at the read index. Both indices are kept in `0..capacity`.
/// Every operation is O(1) except [`clear`](Self::clear) and the whole-buffer
/// views, which are O(capacity) and O(len) respectively.
#[derive(Clone)]
pub struct CircularBuffer<T> {
    slots: Vec<Option<T>>,
    /// Index of the oldest item.
    read: usize,
    /// Index the next item is written to.
    write: usize,
    len: usize,
}

// Compile-time assertion: the buffer is shareable when its items are.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<CircularBuffer<u64>>();
};

impl<T> CircularBuffer<T> {
    /// Create an empty buffer with room for `capacity` items.
    ///
    /// Returns `Err(RingError::ZeroCapacity)` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, RingError> {
        if capacity == 0 {
            return Err(RingError::ZeroCapacity);
        }
        Ok(Self {
            slots: (0..capacity).map(|_| None).collect(),
            read: 0,
            write: 0,
            len: 0,
        })
    }

    /// Append `item` as the newest entry.
    ///
    /// Returns `true` if there was room. Returns `false` if the buffer was
    /// full, in which case the oldest item has been dropped to make room.
    pub fn enqueue(&mut self, item: T) -> bool {
        let had_room = !self.is_full();
        self.push_evicting(item);
        had_room
    }

    /// Append `item` as the newest entry, returning the item it displaced.
    ///
    /// `None` means there was room and nothing was lost.
    pub fn push_evicting(&mut self, item: T) -> Option<T> {
        let evicted = self.slots[self.write].replace(item);
        self.write = self.advance(self.write);
        if self.len == self.capacity() {
            // The oldest item lived where we just wrote.
            self.read = self.write;
        } else {
            self.len += 1;
        }
        evicted
    }

    /// Remove and return the oldest item, or `None` if empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.slots[self.read].take();
        self.read = self.advance(self.read);
        self.len -= 1;
        item
    }

    /// The oldest item, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.get(0)
    }

    /// The most recently enqueued item.
    pub fn peek_newest(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|last| self.get(last))
    }

    /// The item `index` positions after the oldest one.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots[self.physical(index)].as_ref()
    }

    /// Copy every item into a `Vec`, oldest first.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Number of items currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the next enqueue will overwrite the oldest item.
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Maximum number of items the buffer holds.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Drop every item and rewind both indices.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.read = 0;
        self.write = 0;
        self.len = 0;
    }

    /// Iterate over the items, oldest first.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Remove the items, oldest first.
    ///
    /// Items the caller does not consume are dropped when the iterator is,
    /// leaving the buffer empty either way.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain::new(self)
    }

    fn advance(&self, index: usize) -> usize {
        (index + 1) % self.capacity()
    }

    /// Slot index of the `logical`-th oldest item.
    fn physical(&self, logical: usize) -> usize {
        (self.read + logical) % self.capacity()
    }
}

impl<T> Extend<T> for CircularBuffer<T> {
    /// Enqueue every item; when more arrive than fit, only the newest
    /// `capacity` survive.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a CircularBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for CircularBuffer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
