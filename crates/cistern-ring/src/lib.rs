//! Fixed-capacity FIFO ring buffer that overwrites its oldest entry when full.
//!
//! [`CircularBuffer`] never grows and never rejects a write. Once it holds
//! `capacity` items, each new item displaces the oldest one. Producers that
//! care about the loss check the `bool` returned by
//! [`CircularBuffer::enqueue`], or use [`CircularBuffer::push_evicting`] to
//! get the displaced item back.
//!
//! ```rust
//! use cistern_ring::CircularBuffer;
//!
//! let mut history = CircularBuffer::new(3).unwrap();
//! assert!(history.enqueue(1));
//! assert!(history.enqueue(2));
//! assert!(history.enqueue(3));
//! assert!(!history.enqueue(4));
//! assert_eq!(history.to_vec(), vec![2, 3, 4]);
//! assert_eq!(history.dequeue(), Some(2));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod error;
pub mod iter;

pub use buffer::CircularBuffer;
pub use error::RingError;
pub use iter::{Drain, IntoIter, Iter};
