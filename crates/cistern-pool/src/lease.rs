//! Lease handles returned by [`ObjectPool::acquire`](crate::ObjectPool::acquire).
//!
//! A [`Lease`] names one slot of one pool at one generation. The slot
//! generation advances every time the slot stops being leased, which makes
//! a released or cleared lease detectable in O(1) without a lookup table.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide counter for pool identities.
static NEXT_POOL_ID: AtomicU64 = AtomicU64::new(0);

/// Hand out a pool identity that no other pool in this process shares.
pub(crate) fn next_pool_id() -> u64 {
    NEXT_POOL_ID.fetch_add(1, Ordering::Relaxed)
}

/// Handle to a leased slot.
///
/// Leases are plain data: copying one does not duplicate the underlying
/// value, and dropping one does not release it. Hand it back with
/// [`ObjectPool::release`](crate::ObjectPool::release).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use = "a lease that is dropped without being released keeps its slot busy"]
pub struct Lease {
    /// Identity of the pool that issued this lease.
    pub(crate) pool: u64,
    /// Slot index within the pool's store.
    pub(crate) index: usize,
    /// Slot generation at the time of acquire.
    pub(crate) generation: u32,
}

impl Lease {
    pub(crate) fn new(pool: u64, index: usize, generation: u32) -> Self {
        Self {
            pool,
            index,
            generation,
        }
    }

    /// Slot index within the issuing pool.
    ///
    /// Lower indices are reused first, so this is stable across
    /// release/acquire cycles of a lightly loaded pool.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Generation of the slot when this lease was issued.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for Lease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lease(pool={}, slot={}, gen={})",
            self.pool, self.index, self.generation
        )
    }
}
