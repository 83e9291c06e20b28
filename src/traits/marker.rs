//! Opaque marker capabilities attached to chain nodes.
use core::any::Any;
use core::fmt::Debug;

/// A marker a consumer can later test for anywhere in a chain.
///
/// Marker identity is the concrete type; the value may carry extra data.
///
/// # Examples
///
/// ```
/// use error_trail::{has_marker, Failure, IntCode, Mark, Marker};
///
/// #[derive(Debug)]
/// struct UserFacing;
/// impl Marker for UserFacing {}
///
/// let err = Failure::new(IntCode::new(400), Mark(UserFacing));
/// let err = Failure::wrap(err, ());
/// assert!(has_marker::<UserFacing>(&err));
/// ```
pub trait Marker: AsAny + Debug + Send + Sync {}

#[doc(hidden)]
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<'a> dyn Marker + 'a {
    /// Returns the concrete marker if it is of type `M`.
    #[inline]
    pub fn downcast_ref<M: Marker>(&self) -> Option<&M> {
        self.as_any().downcast_ref::<M>()
    }

    #[inline]
    pub fn is<M: Marker>(&self) -> bool {
        self.as_any().is::<M>()
    }
}
