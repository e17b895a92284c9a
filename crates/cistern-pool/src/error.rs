//! Pool error types.

use std::collections::TryReserveError;

/// Errors that can occur while building or growing a pool.
///
/// `E` is the error type of the caller's factory. Pools built from an
/// infallible factory use [`std::convert::Infallible`], which makes the
/// `Factory` variant unconstructible.
///
/// After either error the pool is still consistent: every slot created
/// before the failure is valid, available, and counted by
/// [`total_size`](crate::ObjectPool::total_size).
#[derive(Debug, thiserror::Error)]
pub enum PoolError<E> {
    /// The factory failed while pre-populating or growing the store.
    #[error("object factory failed")]
    Factory(#[source] E),
    /// The backing store could not reserve room for the next batch of slots.
    #[error("could not grow object pool storage")]
    Reserve(#[from] TryReserveError),
}

impl<E> PoolError<E> {
    /// The factory error, if this is a `Factory` failure.
    pub fn into_factory_error(self) -> Option<E> {
        match self {
            Self::Factory(err) => Some(err),
            Self::Reserve(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::fmt;

    #[derive(Debug, PartialEq)]
    struct Exhausted;

    impl fmt::Display for Exhausted {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("exhausted")
        }
    }

    impl Error for Exhausted {}

    #[test]
    fn factory_error_is_exposed_as_source() {
        let err = PoolError::Factory(Exhausted);
        assert_eq!(err.to_string(), "object factory failed");
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("exhausted"));
    }

    #[test]
    fn reserve_error_converts_with_question_mark() {
        fn reserve_too_much() -> Result<(), PoolError<Exhausted>> {
            let mut v: Vec<u64> = Vec::new();
            v.try_reserve_exact(usize::MAX)?;
            Ok(())
        }
        let err = reserve_too_much().unwrap_err();
        assert!(matches!(err, PoolError::Reserve(_)));
        assert!(err.into_factory_error().is_none());
    }

    #[test]
    fn into_factory_error_unwraps_factory_variant() {
        let err = PoolError::Factory(Exhausted);
        assert_eq!(err.into_factory_error(), Some(Exhausted));
    }
}
