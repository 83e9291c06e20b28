//! The mutable accumulator decorations write into before a node is sealed.
//!
//! Constructors create an empty [`Fields`], hand it to every supplied
//! [`Decorator`] in order, then move its contents into the immutable
//! [`Failure`](crate::Failure). Nothing outside a constructor ever sees a
//! `Fields` after sealing.

use core::fmt;

use crate::traits::{Decorator, Marker};
use crate::types::{Context, ErrorVec};

/// Decorations collected for one chain node.
#[derive(Debug, Default)]
pub struct Fields {
    pub(crate) message: Option<String>,
    pub(crate) contexts: ErrorVec<Context>,
    pub(crate) markers: ErrorVec<Box<dyn Marker>>,
}

impl Fields {
    /// Sets the node message, replacing any earlier one.
    #[inline]
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    /// Appends one debug bag.
    #[inline]
    pub fn push_context(&mut self, context: Context) {
        self.contexts.push(context);
    }

    #[inline]
    pub fn add_marker<M: Marker>(&mut self, marker: M) {
        self.markers.push(Box::new(marker));
    }

    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[inline]
    pub fn contexts(&self) -> &[Context] {
        &self.contexts
    }

    /// Applies `decorations` and returns the filled accumulator.
    #[inline]
    pub(crate) fn collect<D: Decorator>(decorations: D) -> Self {
        let mut fields = Self::default();
        decorations.decorate(&mut fields);
        fields
    }
}

/// Sets the node message.
///
/// Applying several messages to one node keeps the last one.
///
/// # Examples
///
/// ```
/// use error_trail::{message_of, Failure, IntCode, Message};
///
/// let err = Failure::new(IntCode::new(404), (Message::new("first"), Message::new("second")));
/// assert_eq!(message_of(&err), Some("second"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message(String);

impl Message {
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Decorator for Message {
    #[inline]
    fn decorate(self, fields: &mut Fields) {
        fields.set_message(self.0);
    }
}

/// Attaches a marker value to the node.
///
/// Consumers test for markers with [`has_marker`](crate::has_marker) instead of
/// inspecting error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mark<M>(pub M);

impl<M: Marker> Decorator for Mark<M> {
    #[inline]
    fn decorate(self, fields: &mut Fields) {
        fields.add_marker(self.0);
    }
}
