//! Growable pool of reusable objects.
//!
//! An [`ObjectPool`] pre-builds a batch of values with a caller-supplied
//! factory and hands them out on demand. Released values are passed through
//! a caller-supplied reset function and become available again, so the
//! steady state performs no construction or destruction at all.
//!
//! # Architecture
//!
//! ```text
//! ObjectPool<T, E>
//! ├── Vec<Slot<T>>          (value + in-use flag + generation)
//! ├── factory: FnMut() -> Result<T, E>
//! └── reset:   FnMut(&mut T)
//! ```
//!
//! Acquiring returns a [`Lease`], a `Copy` handle naming one slot at one
//! generation. Values are reached through the pool with
//! [`ObjectPool::get`] / [`ObjectPool::get_mut`], and handed back with
//! [`ObjectPool::release`]. A lease that outlived its slot (released,
//! cleared, or issued by another pool) resolves to nothing.
//!
//! # Growth
//!
//! When every slot is leased, the store doubles. A pool created empty grows
//! to one slot on its first acquire.
//!
//! # Threading
//!
//! The pool performs no internal locking. Wrap it in a mutex to share it
//! between threads; the factory and reset closures are `Send` for that
//! reason.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod iter;
pub mod lease;
pub mod pool;

// Public re-exports for the primary API surface.
pub use config::PoolConfig;
pub use error::PoolError;
pub use iter::{Iter, IterMut, Leases};
pub use lease::Lease;
pub use pool::ObjectPool;
