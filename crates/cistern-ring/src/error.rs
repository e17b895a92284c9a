//! Ring buffer error types.

/// Errors from [`CircularBuffer`](crate::CircularBuffer) construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RingError {
    /// A buffer needs at least one slot.
    #[error("circular buffer capacity must be at least 1")]
    ZeroCapacity,
}
