//! Iterators over a [`CircularBuffer`], oldest item first.

use std::iter::FusedIterator;

use crate::buffer::CircularBuffer;

/// Borrowing iterator, from [`CircularBuffer::iter`].
///
/// Walks logical positions `front..back`, so it reads the buffer in place
/// without copying and can be driven from either end.
pub struct Iter<'a, T> {
    buffer: &'a CircularBuffer<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(buffer: &'a CircularBuffer<T>) -> Self {
        Self {
            buffer,
            front: 0,
            back: buffer.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.buffer.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.buffer.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Draining iterator, from [`CircularBuffer::drain`].
pub struct Drain<'a, T> {
    buffer: &'a mut CircularBuffer<T>,
}

impl<'a, T> Drain<'a, T> {
    pub(crate) fn new(buffer: &'a mut CircularBuffer<T>) -> Self {
        Self { buffer }
    }
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.buffer.len(), Some(self.buffer.len()))
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}

impl<T> FusedIterator for Drain<'_, T> {}

impl<T> Drop for Drain<'_, T> {
    fn drop(&mut self) {
        self.buffer.clear();
    }
}

/// Owning iterator, from `CircularBuffer::into_iter`.
pub struct IntoIter<T> {
    buffer: CircularBuffer<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(buffer: CircularBuffer<T>) -> Self {
        Self { buffer }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.buffer.len(), Some(self.buffer.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
