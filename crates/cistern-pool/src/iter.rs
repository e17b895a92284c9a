//! Borrowing iterators over the leased slots of a pool.
//!
//! All three iterators walk the store in ascending slot order and skip
//! available slots. They borrow the pool, so the store cannot change while
//! one is alive.

use std::iter::{Enumerate, FusedIterator};
use std::slice;

use crate::lease::Lease;
use crate::pool::Slot;

/// Shared iterator over leased values, from [`ObjectPool::iter`](crate::ObjectPool::iter).
pub struct Iter<'a, T> {
    slots: slice::Iter<'a, Slot<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slots: &'a [Slot<T>]) -> Self {
        Self {
            slots: slots.iter(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.find(|slot| slot.in_use).map(|slot| &slot.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.slots.size_hint().1)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable iterator over leased values, from [`ObjectPool::iter_mut`](crate::ObjectPool::iter_mut).
pub struct IterMut<'a, T> {
    slots: slice::IterMut<'a, Slot<T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(slots: &'a mut [Slot<T>]) -> Self {
        Self {
            slots: slots.iter_mut(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots
            .find(|slot| slot.in_use)
            .map(|slot| &mut slot.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.slots.size_hint().1)
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Iterator over the leases of leased slots, from [`ObjectPool::leases`](crate::ObjectPool::leases).
pub struct Leases<'a, T> {
    pool: u64,
    slots: Enumerate<slice::Iter<'a, Slot<T>>>,
}

impl<'a, T> Leases<'a, T> {
    pub(crate) fn new(pool: u64, slots: &'a [Slot<T>]) -> Self {
        Self {
            pool,
            slots: slots.iter().enumerate(),
        }
    }
}

impl<T> Iterator for Leases<'_, T> {
    type Item = Lease;

    fn next(&mut self) -> Option<Self::Item> {
        let pool = self.pool;
        self.slots
            .find(|(_, slot)| slot.in_use)
            .map(|(index, slot)| Lease::new(pool, index, slot.generation))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.slots.size_hint().1)
    }
}

impl<T> FusedIterator for Leases<'_, T> {}
