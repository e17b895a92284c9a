//! Test fixtures for Cistern development.
//!
//! Provides a [`Probe`] that builds instrumented factory and reset closures
//! for pools, a [`Widget`] value type that remembers its construction
//! order, and [`init_tracing`] for tests that want to see log output.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Pooled test value.
///
/// `serial` is the construction order (0 for the first value a probe's
/// factory builds). `payload` is scratch state that reset clears.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Widget {
    pub serial: usize,
    pub payload: Vec<u32>,
}

/// Error returned by [`Probe::failing_factory`] once its budget is spent.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("factory exhausted after {successes} values")]
pub struct FactoryError {
    pub successes: usize,
}

/// Shared counters for factory and reset calls.
///
/// Cloning a probe shares its counters, so closures handed to a pool keep
/// reporting into the probe the test holds on to.
#[derive(Clone, Debug, Default)]
pub struct Probe {
    created: Arc<AtomicUsize>,
    resets: Arc<AtomicUsize>,
}

impl Probe {
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory that numbers widgets in construction order.
    pub fn factory(&self) -> impl FnMut() -> Widget + Send + 'static {
        let created = Arc::clone(&self.created);
        move || Widget {
            serial: created.fetch_add(1, Ordering::SeqCst),
            payload: Vec::new(),
        }
    }

    /// A factory that builds `successes` widgets and fails on every call
    /// after that.
    pub fn failing_factory(
        &self,
        successes: usize,
    ) -> impl FnMut() -> Result<Widget, FactoryError> + Send + 'static {
        let mut build = self.factory();
        let mut calls = 0usize;
        move || {
            if calls >= successes {
                return Err(FactoryError { successes });
            }
            calls += 1;
            Ok(build())
        }
    }

    /// A reset that empties the payload and counts the call.
    pub fn reset(&self) -> impl FnMut(&mut Widget) + Send + 'static {
        let resets = Arc::clone(&self.resets);
        move |widget: &mut Widget| {
            widget.payload.clear();
            resets.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Number of widgets built so far.
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    /// Number of reset calls so far.
    pub fn resets(&self) -> usize {
        self.resets.load(Ordering::SeqCst)
    }
}

/// Install a test-friendly `tracing` subscriber.
///
/// Honors `RUST_LOG`; defaults to `debug`. Safe to call from every test,
/// only the first call installs anything.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
