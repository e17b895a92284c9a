//! Cistern: a reusable-object pool and an overwrite-on-full ring buffer.
//!
//! This is the facade crate that re-exports both container crates. Adding
//! `cistern` as a single dependency is enough for most users.
//!
//! # Quick start
//!
//! ```rust
//! use cistern::prelude::*;
//!
//! // Reuse scratch buffers instead of allocating one per request.
//! let mut buffers = ObjectPool::with_capacity(|| String::with_capacity(256), String::clear, 4);
//! let lease = buffers.acquire();
//! buffers.get_mut(lease).unwrap().push_str("GET /health");
//! assert!(buffers.release(lease));
//! assert_eq!(buffers.active_count(), 0);
//!
//! // Keep the last three request lines around for diagnostics.
//! let mut recent = CircularBuffer::new(3).unwrap();
//! for line in ["a", "b", "c", "d"] {
//!     recent.enqueue(line);
//! }
//! assert_eq!(recent.to_vec(), vec!["b", "c", "d"]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`pool`] | `cistern-pool` | `ObjectPool`, `Lease`, `PoolConfig`, `PoolError` |
//! | [`ring`] | `cistern-ring` | `CircularBuffer`, `RingError` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Growable pool of reusable objects (`cistern-pool`).
///
/// [`pool::ObjectPool`] hands out [`pool::Lease`] handles and resets values
/// when they come back.
pub use cistern_pool as pool;

/// Fixed-capacity overwrite-on-full FIFO (`cistern-ring`).
///
/// See [`ring::CircularBuffer`].
pub use cistern_ring as ring;

/// Common imports for typical Cistern usage.
///
/// ```rust
/// use cistern::prelude::*;
/// ```
pub mod prelude {
    pub use cistern_pool::{Lease, ObjectPool, PoolConfig, PoolError};
    pub use cistern_ring::{CircularBuffer, RingError};
}
