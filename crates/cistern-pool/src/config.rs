//! Pool configuration parameters.

/// Configuration for an [`ObjectPool`](crate::ObjectPool).
///
/// Read once at construction; the pool keeps no reference to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    /// Number of values built by the factory before the pool is returned.
    ///
    /// Default: 32. Zero is allowed; the first acquire then grows the
    /// store to a single slot.
    pub initial_capacity: usize,
}

impl PoolConfig {
    /// Default number of pre-built values.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 32;

    /// Create a config that pre-builds `initial_capacity` values.
    pub fn new(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }

    /// Size the store grows to when every slot of a `current`-slot store
    /// is leased.
    ///
    /// Doubles, except that an empty store grows to one slot.
    pub fn grown_size(current: usize) -> usize {
        current.saturating_mul(2).max(1)
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}
