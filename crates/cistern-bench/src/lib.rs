//! Benchmark workloads for the Cistern containers.
//!
//! Provides deterministic operation scripts so every benchmark run drives
//! the containers through the same sequence:
//!
//! - [`churn_script`]: interleaved acquire/release pattern for pools
//! - [`run_pool_script`]: replays a script against an [`ObjectPool`]
//! - [`run_ring_script`]: replays a script against a [`CircularBuffer`]

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use cistern_pool::{Lease, ObjectPool};
use cistern_ring::CircularBuffer;

/// One step of a benchmark script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// Take a value (pool) or push a value (ring).
    Take,
    /// Give back the n-th held value (pool) or pop the oldest (ring).
    Give(usize),
}

/// Build a deterministic script of `len` operations.
///
/// Roughly 60% of the steps take and 40% give back, so a pool driven by
/// the script grows a few times before settling.
pub fn churn_script(len: usize) -> Vec<Op> {
    (0..len as u64)
        .map(|i| {
            // Deterministic pseudo-random mix.
            let h = i.wrapping_mul(6364136223846793007);
            if (h >> 33) % 10 < 6 {
                Op::Take
            } else {
                Op::Give(((h >> 17) % 64) as usize)
            }
        })
        .collect()
}

/// Replay `script` against `pool`, releasing everything still held at the
/// end. Returns the number of acquires performed.
pub fn run_pool_script<T>(pool: &mut ObjectPool<T>, script: &[Op]) -> usize {
    let mut held: Vec<Lease> = Vec::new();
    let mut acquired = 0;
    for op in script {
        match *op {
            Op::Take => {
                held.push(pool.acquire());
                acquired += 1;
            }
            Op::Give(n) if !held.is_empty() => {
                let lease = held.swap_remove(n % held.len());
                pool.release(lease);
            }
            Op::Give(_) => {}
        }
    }
    for lease in held {
        pool.release(lease);
    }
    acquired
}

/// Replay `script` against `ring`, pushing `u64` step numbers. Returns
/// how many pushes overwrote an existing entry.
pub fn run_ring_script(ring: &mut CircularBuffer<u64>, script: &[Op]) -> usize {
    let mut overwritten = 0;
    for (step, op) in script.iter().enumerate() {
        match op {
            Op::Take => {
                if !ring.enqueue(step as u64) {
                    overwritten += 1;
                }
            }
            Op::Give(_) => {
                ring.dequeue();
            }
        }
    }
    overwritten
}
