//! The object pool itself.
//!
//! [`ObjectPool`] owns a `Vec` of slots. Each slot holds one value built by
//! the factory, an in-use flag, and a generation counter. Acquire scans for
//! the lowest available slot; release resets the value in place. Values are
//! only ever built, never dropped, until the pool itself is dropped.

use std::convert::Infallible;
use std::fmt;

use crate::config::PoolConfig;
use crate::error::PoolError;
use crate::iter::{Iter, IterMut, Leases};
use crate::lease::{next_pool_id, Lease};

type Factory<T, E> = Box<dyn FnMut() -> Result<T, E> + Send>;
type Reset<T> = Box<dyn FnMut(&mut T) + Send>;

/// One storage position in the pool.
pub(crate) struct Slot<T> {
    pub(crate) value: T,
    pub(crate) in_use: bool,
    /// Advances each time the slot stops being leased.
    pub(crate) generation: u32,
}

impl<T> Slot<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            in_use: false,
            generation: 0,
        }
    }

    /// Mark the slot available and invalidate outstanding leases on it.
    fn vacate(&mut self) {
        self.in_use = false;
        self.generation = self.generation.wrapping_add(1);
    }
}

/// A growable pool of reusable values.
///
/// `E` is the factory's error type; pools built with [`ObjectPool::new`]
/// and friends use [`Infallible`] and expose the non-failing
/// [`acquire`](ObjectPool::acquire).
///
/// # Example
///
/// ```rust
/// use cistern_pool::ObjectPool;
///
/// let mut pool = ObjectPool::with_capacity(|| Vec::<u8>::with_capacity(64), Vec::clear, 2);
/// let lease = pool.acquire();
/// pool.get_mut(lease).unwrap().extend_from_slice(b"hello");
/// assert_eq!(pool.active_count(), 1);
///
/// assert!(pool.release(lease));
/// assert_eq!(pool.active_count(), 0);
/// // The same slot comes back, already reset.
/// let again = pool.acquire();
/// assert_eq!(again.index(), lease.index());
/// assert!(pool.get(again).unwrap().is_empty());
/// ```
pub struct ObjectPool<T, E = Infallible> {
    id: u64,
    slots: Vec<Slot<T>>,
    factory: Factory<T, E>,
    reset: Reset<T>,
}

impl<T> ObjectPool<T> {
    /// Create a pool pre-populated with
    /// [`PoolConfig::DEFAULT_INITIAL_CAPACITY`] values.
    ///
    /// # Panics
    ///
    /// Panics if the backing store cannot be allocated.
    pub fn new<F, R>(factory: F, reset: R) -> Self
    where
        F: FnMut() -> T + Send + 'static,
        R: FnMut(&mut T) + Send + 'static,
    {
        Self::with_config(factory, reset, PoolConfig::default())
    }

    /// Create a pool pre-populated with `initial_capacity` values.
    ///
    /// # Panics
    ///
    /// Panics if the backing store cannot be allocated.
    pub fn with_capacity<F, R>(factory: F, reset: R, initial_capacity: usize) -> Self
    where
        F: FnMut() -> T + Send + 'static,
        R: FnMut(&mut T) + Send + 'static,
    {
        Self::with_config(factory, reset, PoolConfig::new(initial_capacity))
    }

    /// Create a pool from an explicit [`PoolConfig`].
    ///
    /// # Panics
    ///
    /// Panics if the backing store cannot be allocated.
    pub fn with_config<F, R>(mut factory: F, reset: R, config: PoolConfig) -> Self
    where
        F: FnMut() -> T + Send + 'static,
        R: FnMut(&mut T) + Send + 'static,
    {
        unwrap_infallible(Self::try_with_config(move || Ok(factory()), reset, config))
    }

    /// Lease the lowest-indexed available value, doubling the store first
    /// if every slot is already leased.
    ///
    /// # Panics
    ///
    /// Panics if the store has to grow and the allocation fails.
    pub fn acquire(&mut self) -> Lease {
        unwrap_infallible(self.try_acquire())
    }
}

impl<T, E> ObjectPool<T, E> {
    /// Create a pool from a fallible factory, pre-populated with
    /// [`PoolConfig::DEFAULT_INITIAL_CAPACITY`] values.
    ///
    /// Returns `Err(PoolError::Factory)` with the first factory error.
    pub fn try_new<F, R>(factory: F, reset: R) -> Result<Self, PoolError<E>>
    where
        F: FnMut() -> Result<T, E> + Send + 'static,
        R: FnMut(&mut T) + Send + 'static,
    {
        Self::try_with_config(factory, reset, PoolConfig::default())
    }

    /// Create a pool from a fallible factory and an explicit [`PoolConfig`].
    pub fn try_with_config<F, R>(
        factory: F,
        reset: R,
        config: PoolConfig,
    ) -> Result<Self, PoolError<E>>
    where
        F: FnMut() -> Result<T, E> + Send + 'static,
        R: FnMut(&mut T) + Send + 'static,
    {
        let mut pool = Self {
            id: next_pool_id(),
            slots: Vec::new(),
            factory: Box::new(factory),
            reset: Box::new(reset),
        };
        pool.extend_to(config.initial_capacity)?;
        Ok(pool)
    }

    /// Lease the lowest-indexed available value, growing the store if
    /// needed.
    ///
    /// On error no lease is issued. Slots the factory produced before
    /// failing stay in the pool as available values.
    pub fn try_acquire(&mut self) -> Result<Lease, PoolError<E>> {
        let index = match self.first_available() {
            Some(index) => index,
            None => {
                // Growth always adds at least one slot, and the first new
                // slot is the lowest available one.
                let index = self.slots.len();
                self.grow()?;
                index
            }
        };
        let slot = &mut self.slots[index];
        slot.in_use = true;
        Ok(Lease::new(self.id, index, slot.generation))
    }

    /// Hand a leased value back to the pool.
    ///
    /// The reset function runs exactly once on the value before the slot
    /// becomes available again. Returns `false` without doing anything if
    /// the lease came from another pool, was already released, or was
    /// invalidated by [`clear`](Self::clear).
    pub fn release(&mut self, lease: Lease) -> bool {
        if lease.pool != self.id {
            return false;
        }
        let Some(slot) = self.slots.get_mut(lease.index) else {
            return false;
        };
        if !slot.in_use || slot.generation != lease.generation {
            return false;
        }
        (self.reset)(&mut slot.value);
        slot.vacate();
        true
    }

    /// Mark every slot available without running the reset function.
    ///
    /// All outstanding leases become stale. Values keep whatever state
    /// their last holder left them in, so callers that depend on
    /// reset-on-return must release each lease instead.
    pub fn clear(&mut self) {
        let mut forgotten = 0usize;
        for slot in self.slots.iter_mut().filter(|slot| slot.in_use) {
            slot.vacate();
            forgotten += 1;
        }
        tracing::trace!(pool = self.id, forgotten, "object pool cleared");
    }

    /// Shared access to a leased value.
    ///
    /// `None` for foreign or stale leases.
    pub fn get(&self, lease: Lease) -> Option<&T> {
        self.leased_slot(lease).map(|slot| &slot.value)
    }

    /// Exclusive access to a leased value.
    ///
    /// `None` for foreign or stale leases.
    pub fn get_mut(&mut self, lease: Lease) -> Option<&mut T> {
        if lease.pool != self.id {
            return None;
        }
        self.slots
            .get_mut(lease.index)
            .filter(|slot| slot.in_use && slot.generation == lease.generation)
            .map(|slot| &mut slot.value)
    }

    /// Whether `lease` still refers to a leased slot of this pool.
    pub fn is_leased(&self, lease: Lease) -> bool {
        self.leased_slot(lease).is_some()
    }

    /// Number of slots currently leased.
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.in_use).count()
    }

    /// Number of slots ever created.
    pub fn total_size(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots ready to be leased without growing.
    pub fn available_count(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.in_use).count()
    }

    /// Iterate over leased values in ascending slot order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.slots)
    }

    /// Iterate mutably over leased values in ascending slot order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.slots)
    }

    /// Iterate over the leases of every leased slot in ascending slot
    /// order.
    pub fn leases(&self) -> Leases<'_, T> {
        Leases::new(self.id, &self.slots)
    }

    fn leased_slot(&self, lease: Lease) -> Option<&Slot<T>> {
        if lease.pool != self.id {
            return None;
        }
        self.slots
            .get(lease.index)
            .filter(|slot| slot.in_use && slot.generation == lease.generation)
    }

    fn first_available(&self) -> Option<usize> {
        self.slots.iter().position(|slot| !slot.in_use)
    }

    /// Double the store (an empty store grows to one slot).
    fn grow(&mut self) -> Result<(), PoolError<E>> {
        let from = self.slots.len();
        let result = self.extend_to(PoolConfig::grown_size(from));
        tracing::debug!(
            pool = self.id,
            from,
            to = self.slots.len(),
            ok = result.is_ok(),
            "object pool grew"
        );
        result
    }

    /// Build values until the store holds `target` slots.
    ///
    /// Slots are pushed one at a time so a factory failure leaves every
    /// value built so far in place.
    fn extend_to(&mut self, target: usize) -> Result<(), PoolError<E>> {
        let additional = target.saturating_sub(self.slots.len());
        self.slots.try_reserve_exact(additional)?;
        while self.slots.len() < target {
            let value = (self.factory)().map_err(PoolError::Factory)?;
            self.slots.push(Slot::new(value));
        }
        Ok(())
    }
}

impl<'a, T, E> IntoIterator for &'a ObjectPool<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, E> IntoIterator for &'a mut ObjectPool<T, E> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, E> fmt::Debug for ObjectPool<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectPool")
            .field("id", &self.id)
            .field("total_size", &self.total_size())
            .field("active_count", &self.active_count())
            .finish_non_exhaustive()
    }
}

fn unwrap_infallible<V>(result: Result<V, PoolError<Infallible>>) -> V {
    match result {
        Ok(value) => value,
        Err(PoolError::Factory(never)) => match never {},
        Err(PoolError::Reserve(err)) => panic!("object pool allocation failed: {err}"),
    }
}
