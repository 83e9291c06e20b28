//! The chain node: code, inner error, decorations and a captured call stack.
//!
//! A [`Failure`] is produced once by [`Failure::new`], [`Failure::wrap`],
//! [`Failure::translate`] or [`Failure::wrap_by`] and is immutable afterwards.
//! Each constructor captures the call stack of its caller exactly once.
//!
//! Chains are singly linked through the inner error and must not contain
//! cycles; traversal does not detect them.

use core::error::Error;

use crate::callstack::{callers, CallStack};
use crate::traits::{Decorator, Marker, Wrapper};
use crate::types::error_formatter::ChainFormatBuilder;
use crate::types::{BoxError, Code, Context, ErrorVec, Fields, Report};

mod traits;

/// One sealed node of an error chain.
///
/// # Examples
///
/// ```
/// use error_trail::{code_of, is, message_of, Failure, StringCode};
///
/// const NOT_FOUND: StringCode = StringCode::new("NotFound");
/// const FORBIDDEN: StringCode = StringCode::new("Forbidden");
///
/// let root = Failure::new(NOT_FOUND, ());
/// let err = Failure::translate(root, FORBIDDEN, "no access");
///
/// assert_eq!(code_of(&err).and_then(|c| c.downcast_ref::<StringCode>()), Some(&FORBIDDEN));
/// assert!(is(&err, &NOT_FOUND));
/// assert_eq!(message_of(&err), Some("no access"));
/// ```
#[must_use]
pub struct Failure {
    pub(crate) code: Option<Box<dyn Code>>,
    pub(crate) inner: Option<BoxError>,
    pub(crate) message: Option<String>,
    pub(crate) contexts: ErrorVec<Context>,
    pub(crate) markers: ErrorVec<Box<dyn Marker>>,
    pub(crate) stack: CallStack,
}

impl Failure {
    /// Creates a chain root classified by `code`.
    #[inline(never)]
    pub fn new<C, D>(code: C, decorations: D) -> Self
    where
        C: Code,
        D: Decorator,
    {
        Self::seal(Some(Box::new(code)), None, decorations, callers(1))
    }

    /// Wraps `err` in a new node that inherits its classification.
    #[inline(never)]
    pub fn wrap<E, D>(err: E, decorations: D) -> Self
    where
        E: Into<BoxError>,
        D: Decorator,
    {
        Self::seal(None, Some(err.into()), decorations, callers(1))
    }

    /// Wraps `err` in a new node that reclassifies the chain as `code`.
    ///
    /// The original code stays reachable through [`is`](crate::is).
    #[inline(never)]
    pub fn translate<E, C, D>(err: E, code: C, decorations: D) -> Self
    where
        E: Into<BoxError>,
        C: Code,
        D: Decorator,
    {
        Self::seal(Some(Box::new(code)), Some(err.into()), decorations, callers(1))
    }

    /// Lets a foreign [`Wrapper`] wrap `err` first, then wraps the result.
    #[inline(never)]
    pub fn wrap_by<E, W, D>(err: E, wrapper: W, decorations: D) -> Self
    where
        E: Into<BoxError>,
        W: Wrapper,
        D: Decorator,
    {
        let inner = wrapper.wrap_error(err.into());
        Self::seal(None, Some(inner), decorations, callers(1))
    }

    /// Wraps an optional error: absent in, absent out.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trail::Failure;
    /// use std::io;
    ///
    /// assert!(Failure::wrap_opt(None::<io::Error>, "ignored").is_none());
    /// assert!(Failure::wrap_opt(Some(io::Error::other("x")), ()).is_some());
    /// ```
    #[inline(never)]
    pub fn wrap_opt<E, D>(err: Option<E>, decorations: D) -> Option<Self>
    where
        E: Into<BoxError>,
        D: Decorator,
    {
        let err = err?;
        Some(Self::seal(None, Some(err.into()), decorations, callers(1)))
    }

    pub(crate) fn seal<D: Decorator>(
        code: Option<Box<dyn Code>>,
        inner: Option<BoxError>,
        decorations: D,
        stack: CallStack,
    ) -> Self {
        let Fields { message, contexts, markers } = Fields::collect(decorations);
        Self { code, inner, message, contexts, markers, stack }
    }

    /// This node's own code, if it set one.
    #[inline]
    pub fn code(&self) -> Option<&(dyn Code + 'static)> {
        self.code.as_deref()
    }

    /// This node's own message, if it set one.
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Debug bags attached to this node, in attachment order.
    #[inline]
    pub fn contexts(&self) -> &[Context] {
        &self.contexts
    }

    #[inline]
    pub fn markers(&self) -> impl Iterator<Item = &(dyn Marker + 'static)> {
        self.markers.iter().map(|m| &**m)
    }

    /// The stack captured when this node was constructed.
    #[inline]
    pub fn call_stack(&self) -> &CallStack {
        &self.stack
    }

    /// The wrapped error, absent for a chain root.
    #[inline]
    pub fn inner(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.inner.as_deref()
    }

    /// Consumes the node, returning the wrapped error.
    #[inline]
    pub fn into_inner(self) -> Option<BoxError> {
        self.inner
    }

    /// Returns a builder for customizing how the chain is rendered.
    #[must_use]
    #[inline]
    pub fn fmt(&self) -> ChainFormatBuilder<'_> {
        ChainFormatBuilder::new(self)
    }

    /// Returns the complete chain as a formatted string.
    #[must_use]
    pub fn error_chain(&self) -> String {
        self.fmt().to_string()
    }

    /// Snapshot of everything the accessors report for this chain.
    #[must_use]
    pub fn report(&self) -> Report {
        Report::new(self)
    }
}
