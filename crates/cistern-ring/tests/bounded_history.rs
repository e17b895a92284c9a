//! Integration tests: the ring buffer as a bounded history.
//!
//! Exercises the overwrite-on-full contract through long runs and checks
//! that a buffer can be handed between threads behind a mutex.

use std::sync::{Arc, Mutex};
use std::thread;

use cistern_ring::{CircularBuffer, RingError};

#[test]
fn keeps_only_the_most_recent_entries() {
    let mut history = CircularBuffer::new(5).unwrap();
    let mut lost = 0;
    for event in 0..1_000u32 {
        if !history.enqueue(event) {
            lost += 1;
        }
        assert!(history.len() <= history.capacity());
    }
    assert_eq!(lost, 995);
    assert_eq!(history.to_vec(), vec![995, 996, 997, 998, 999]);
}

#[test]
fn interleaved_producer_and_consumer() {
    let mut queue = CircularBuffer::new(4).unwrap();
    let mut consumed = Vec::new();
    for batch in 0..10u32 {
        for i in 0..3 {
            queue.enqueue(batch * 3 + i);
        }
        while let Some(item) = queue.dequeue() {
            consumed.push(item);
        }
    }
    // The consumer keeps up, so nothing is ever overwritten.
    assert_eq!(consumed, (0..30).collect::<Vec<_>>());
    assert!(queue.is_empty());
}

#[test]
fn evicted_entries_can_be_collected() {
    let mut window = CircularBuffer::new(3).unwrap();
    let evicted: Vec<_> = (1..=6).filter_map(|n| window.push_evicting(n)).collect();
    assert_eq!(evicted, vec![1, 2, 3]);
    assert_eq!(window.to_vec(), vec![4, 5, 6]);
}

#[test]
fn capacity_zero_fails_construction() {
    assert!(matches!(
        CircularBuffer::<String>::new(0),
        Err(RingError::ZeroCapacity)
    ));
}

#[test]
fn owned_strings_survive_wraparound() {
    let mut log = CircularBuffer::new(2).unwrap();
    log.extend(["alpha", "beta", "gamma"].map(String::from));
    assert_eq!(log.peek().map(String::as_str), Some("beta"));
    assert_eq!(log.peek_newest().map(String::as_str), Some("gamma"));
    let joined: Vec<&str> = log.iter().map(String::as_str).collect();
    assert_eq!(joined, vec!["beta", "gamma"]);
}

#[test]
fn shared_behind_mutex_across_threads() {
    let buffer = Arc::new(Mutex::new(CircularBuffer::new(16).unwrap()));

    let producers: Vec<_> = (0..4u32)
        .map(|id| {
            let buffer = Arc::clone(&buffer);
            thread::spawn(move || {
                for n in 0..100 {
                    buffer.lock().unwrap().enqueue(id * 1_000 + n);
                }
            })
        })
        .collect();
    for producer in producers {
        producer.join().unwrap();
    }

    let mut buffer = buffer.lock().unwrap();
    assert!(buffer.is_full());
    let drained: Vec<_> = buffer.drain().collect();
    assert_eq!(drained.len(), 16);
    assert!(buffer.is_empty());
}
