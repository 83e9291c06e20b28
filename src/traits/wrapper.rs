//! Foreign wrapping decorations.
use crate::types::BoxError;

/// Produces a new error from an inner one.
///
/// This lets external code add its own wrapping layer to a chain without this
/// crate knowing the concrete type. The produced error should return the inner
/// error from `source()` so traversal can step through it.
///
/// Any `FnOnce(BoxError) -> BoxError` closure is a `Wrapper`.
///
/// # Examples
///
/// ```
/// use error_trail::{cause_of, BoxError, Failure};
/// use std::{error::Error, fmt, io};
///
/// #[derive(Debug)]
/// struct Retried(BoxError);
///
/// impl fmt::Display for Retried {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "retried: {}", self.0)
///     }
/// }
///
/// impl Error for Retried {
///     fn source(&self) -> Option<&(dyn Error + 'static)> {
///         Some(self.0.as_ref())
///     }
/// }
///
/// let io = io::Error::other("disk gone");
/// let err = Failure::wrap_by(io, |inner: BoxError| -> BoxError { Box::new(Retried(inner)) }, ());
/// assert_eq!(cause_of(&err).map(|c| c.to_string()), Some("disk gone".to_string()));
/// ```
pub trait Wrapper {
    fn wrap_error(self, inner: BoxError) -> BoxError;
}

impl<F> Wrapper for F
where
    F: FnOnce(BoxError) -> BoxError,
{
    #[inline]
    fn wrap_error(self, inner: BoxError) -> BoxError {
        self(inner)
    }
}
