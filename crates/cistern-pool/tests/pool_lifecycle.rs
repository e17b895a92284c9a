//! Integration tests: pool lifecycle through the public API.
//!
//! Drives a pool through growth, release churn, clear, and cross-thread
//! use behind a mutex, checking the count invariants after every phase.

use std::sync::{Arc, Mutex};
use std::thread;

use cistern_pool::{Lease, ObjectPool, PoolConfig, PoolError};
use cistern_test_utils::{init_tracing, FactoryError, Probe, Widget};

fn assert_counts_consistent<T, E>(pool: &ObjectPool<T, E>) {
    assert_eq!(
        pool.active_count() + pool.available_count(),
        pool.total_size(),
        "active + available must equal total"
    );
}

#[test]
fn growth_sequence_doubles_from_initial_capacity() {
    init_tracing();
    let probe = Probe::new();
    let mut pool = ObjectPool::with_capacity(probe.factory(), probe.reset(), 3);

    let mut sizes = Vec::new();
    let mut held: Vec<Lease> = Vec::new();
    for _ in 0..25 {
        held.push(pool.acquire());
        sizes.push(pool.total_size());
        assert_counts_consistent(&pool);
    }
    sizes.dedup();
    assert_eq!(sizes, vec![3, 6, 12, 24, 48]);
    assert_eq!(probe.created(), 48);
    assert_eq!(pool.active_count(), 25);
}

#[test]
fn steady_state_churn_builds_nothing_new() {
    init_tracing();
    let probe = Probe::new();
    let mut pool = ObjectPool::with_capacity(probe.factory(), probe.reset(), 4);

    for round in 0..100u32 {
        let batch: Vec<Lease> = (0..4).map(|_| pool.acquire()).collect();
        for lease in &batch {
            pool.get_mut(*lease).unwrap().payload.push(round);
        }
        for lease in batch {
            assert!(pool.release(lease));
        }
    }

    assert_eq!(probe.created(), 4);
    assert_eq!(probe.resets(), 400);
    assert_eq!(pool.total_size(), 4);
    assert!(pool.iter().next().is_none());
}

#[test]
fn reset_runs_before_a_slot_is_reissued() {
    let probe = Probe::new();
    let mut pool = ObjectPool::with_capacity(probe.factory(), probe.reset(), 1);

    let first = pool.acquire();
    pool.get_mut(first).unwrap().payload.extend([1, 2, 3]);
    assert_eq!(probe.resets(), 0);

    pool.release(first);
    assert_eq!(probe.resets(), 1);

    let second = pool.acquire();
    assert_eq!(second.index(), first.index());
    assert_ne!(second, first);
    assert_eq!(
        pool.get(second),
        Some(&Widget {
            serial: 0,
            payload: Vec::new()
        })
    );
}

#[test]
fn clear_then_reuse() {
    let probe = Probe::new();
    let mut pool = ObjectPool::with_config(probe.factory(), probe.reset(), PoolConfig::new(2));
    let _a = pool.acquire();
    let _b = pool.acquire();
    let _c = pool.acquire();
    assert_eq!(pool.total_size(), 4);

    pool.clear();
    assert_eq!(pool.available_count(), 4);
    assert_eq!(probe.resets(), 0);

    // Reissued leases start from slot 0 again and never trigger growth.
    let reissued: Vec<_> = (0..4).map(|_| pool.acquire().index()).collect();
    assert_eq!(reissued, vec![0, 1, 2, 3]);
    assert_eq!(pool.total_size(), 4);
}

#[test]
fn fallible_factory_errors_surface_through_try_acquire() {
    init_tracing();
    let probe = Probe::new();
    let mut pool: ObjectPool<Widget, FactoryError> =
        ObjectPool::try_with_config(probe.failing_factory(1), probe.reset(), PoolConfig::new(1))
            .unwrap();

    let held = pool.try_acquire().unwrap();
    match pool.try_acquire() {
        Err(PoolError::Factory(err)) => assert_eq!(err, FactoryError { successes: 1 }),
        other => panic!("expected factory failure, got {other:?}"),
    }
    assert_counts_consistent(&pool);
    assert_eq!(pool.total_size(), 1);

    // Releasing makes the existing slot available again; no growth needed.
    assert!(pool.release(held));
    assert!(pool.try_acquire().is_ok());
}

#[test]
fn default_constructor_with_fallible_factory() {
    let probe = Probe::new();
    let pool: Result<ObjectPool<Widget, FactoryError>, _> =
        ObjectPool::try_new(probe.failing_factory(100), probe.reset());
    let pool = pool.unwrap();
    assert_eq!(pool.total_size(), PoolConfig::DEFAULT_INITIAL_CAPACITY);
}

#[test]
fn shared_behind_mutex_across_threads() {
    init_tracing();
    let probe = Probe::new();
    let pool = Arc::new(Mutex::new(ObjectPool::with_capacity(
        probe.factory(),
        probe.reset(),
        2,
    )));

    let workers: Vec<_> = (0..4)
        .map(|_| {
            let pool = Arc::clone(&pool);
            thread::spawn(move || {
                for _ in 0..50 {
                    let lease = pool.lock().unwrap().acquire();
                    pool.lock().unwrap().get_mut(lease).unwrap().payload.push(1);
                    assert!(pool.lock().unwrap().release(lease));
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    let pool = pool.lock().unwrap();
    assert_eq!(pool.active_count(), 0);
    assert!(pool.total_size() <= 4, "at most one lease per worker at a time");
    assert_eq!(probe.resets(), 200);
    assert_counts_consistent(&*pool);
}
