//! Transient error classification for retry strategies.
//!
//! This module provides the [`TransientError`] trait for classifying errors
//! as transient (temporary, potentially recoverable by retry) or permanent,
//! and the [`Temporary`] marker that records that classification on a chain.
//!
//! # Integration with External Libraries
//!
//! error-trail itself does not implement retry logic. [`Failure`] implements
//! [`TransientError`] by searching its chain for a [`Temporary`] marker, so
//! it plugs directly into external resilience libraries such as `backoff`.
//!
//! # Examples
//!
//! ```
//! use error_trail::{Failure, StringCode, Temporary, TransientError};
//! use std::time::Duration;
//!
//! const UNAVAILABLE: StringCode = StringCode::new("Unavailable");
//!
//! let err = Failure::new(UNAVAILABLE, Temporary::after(Duration::from_millis(250)));
//! let err = Failure::wrap(err, "calling billing");
//!
//! assert!(err.is_transient());
//! assert_eq!(err.retry_after_hint(), Some(Duration::from_millis(250)));
//! ```

use core::time::Duration;

use crate::chain;
use crate::traits::{Decorator, Marker};
use crate::types::{Failure, Fields};

/// Classification of errors as transient or permanent.
///
/// Transient errors are temporary failures that may succeed if retried,
/// such as network timeouts, rate limiting, or temporary service unavailability.
///
/// # Examples
///
/// ```
/// use error_trail::TransientError;
///
/// #[derive(Debug)]
/// struct TimeoutError;
///
/// impl TransientError for TimeoutError {
///     fn is_transient(&self) -> bool {
///         true
///     }
/// }
/// ```
pub trait TransientError {
    /// Returns `true` if this error is transient and may succeed on retry.
    fn is_transient(&self) -> bool;

    /// Returns `true` if this error is permanent and should not be retried.
    ///
    /// Default implementation returns `!self.is_transient()`.
    #[inline]
    fn is_permanent(&self) -> bool {
        !self.is_transient()
    }

    /// Optional hint for how long to wait before retrying.
    #[inline]
    fn retry_after_hint(&self) -> Option<Duration> {
        None
    }

    /// Returns the maximum number of retry attempts for this error.
    #[inline]
    fn max_retries_hint(&self) -> Option<u32> {
        None
    }
}

impl TransientError for std::io::Error {
    fn is_transient(&self) -> bool {
        use std::io::ErrorKind;
        matches!(
            self.kind(),
            ErrorKind::ConnectionRefused
                | ErrorKind::ConnectionReset
                | ErrorKind::ConnectionAborted
                | ErrorKind::TimedOut
                | ErrorKind::Interrupted
                | ErrorKind::WouldBlock
        )
    }
}

/// Marks a chain node as temporary (retryable).
///
/// Used as a decorator it adds itself as a marker to the node being built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Temporary {
    retry_after: Option<Duration>,
}

impl Temporary {
    #[inline]
    pub const fn new() -> Self {
        Self { retry_after: None }
    }

    /// Temporary, with a suggested wait before retrying.
    #[inline]
    pub const fn after(retry_after: Duration) -> Self {
        Self { retry_after: Some(retry_after) }
    }

    #[inline]
    pub const fn retry_after(&self) -> Option<Duration> {
        self.retry_after
    }
}

impl Marker for Temporary {}

impl Decorator for Temporary {
    #[inline]
    fn decorate(self, fields: &mut Fields) {
        fields.add_marker(self);
    }
}

impl TransientError for Failure {
    /// Transient if any node carries [`Temporary`], or the cause is a transient `io::Error`.
    fn is_transient(&self) -> bool {
        if chain::has_marker::<Temporary>(self) {
            return true;
        }
        chain::cause_of(self)
            .and_then(|cause| cause.downcast_ref::<std::io::Error>())
            .is_some_and(|io| io.is_transient())
    }

    /// The outermost [`Temporary`] hint wins.
    fn retry_after_hint(&self) -> Option<Duration> {
        chain::markers_of::<Temporary>(self).find_map(|t| t.retry_after)
    }
}

/// Extension methods for working with transient errors.
pub trait TransientErrorExt<T, E: TransientError> {
    /// Converts a transient error to `Some(Err(e))` for retry, or `None` to stop.
    fn retry_if_transient(self) -> Option<Result<T, E>>;
}

impl<T, E: TransientError> TransientErrorExt<T, E> for Result<T, E> {
    fn retry_if_transient(self) -> Option<Result<T, E>> {
        match &self {
            Ok(_) => None,
            Err(e) if e.is_transient() => Some(self),
            Err(_) => None,
        }
    }
}
