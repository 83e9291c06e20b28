//! Traversal over chains that mix [`Failure`] nodes with foreign errors.
//!
//! [`Chain`] walks from the outermost error to the cause. Each step is one of:
//!
//! 1. a [`Failure`] node, exposing its code, message, debug bags, markers and
//!    call stack before moving to its inner error;
//! 2. a foreign error whose `source()` is present, which is stepped through
//!    without exposing any decorations;
//! 3. a foreign error without a source, which ends the walk.
//!
//! An [`io::Error`](std::io::Error) carrying a [`Failure`] payload steps into
//! that payload. Its `source()` skips the payload and would hide the node.
//!
//! The last node yielded is the cause. The accessors in this module each walk
//! the full chain and are total: an absent error (`None`) yields `None`, an
//! empty sequence, or an empty [`CallStack`](crate::CallStack).
//!
//! # Examples
//!
//! ```
//! use error_trail::{chain::{Chain, Node}, Failure};
//! use std::io;
//!
//! let err = Failure::wrap(io::Error::other("refused"), "dialing upstream");
//! let kinds: Vec<&str> = Chain::new(&err)
//!     .map(|node| match node {
//!         Node::Failure(_) => "failure",
//!         Node::Foreign(_) => "foreign",
//!     })
//!     .collect();
//!
//! assert_eq!(kinds, ["failure", "foreign"]);
//! ```

use core::error::Error;
use core::iter::FusedIterator;
use std::io;

use crate::types::Failure;

mod accessors;

pub use accessors::*;

/// One step of a chain walk.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Failure(&'a Failure),
    Foreign(&'a (dyn Error + 'static)),
}

impl<'a> Node<'a> {
    #[inline]
    pub fn as_failure(&self) -> Option<&'a Failure> {
        match *self {
            Node::Failure(failure) => Some(failure),
            Node::Foreign(_) => None,
        }
    }

    /// The node viewed as a plain error.
    #[inline]
    pub fn as_error(&self) -> &'a (dyn Error + 'static) {
        match *self {
            Node::Failure(failure) => failure,
            Node::Foreign(err) => err,
        }
    }
}

/// Iterator over the nodes of a chain, outermost first.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Chain<'a> {
    /// Starts a walk at `err`; an absent error produces an empty walk.
    #[inline]
    pub fn new(err: impl AsChain<'a>) -> Self {
        Self { next: err.as_chain() }
    }

    /// Walks only the [`Failure`] nodes.
    #[inline]
    pub fn failures(self) -> impl Iterator<Item = &'a Failure> {
        self.filter_map(|node| node.as_failure())
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Node<'a>> {
        let current = self.next.take()?;
        self.next = io_payload(current).or_else(|| current.source());
        Some(match current.downcast_ref::<Failure>() {
            Some(failure) => Node::Failure(failure),
            None => Node::Foreign(current),
        })
    }
}

impl FusedIterator for Chain<'_> {}

fn io_payload<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a (dyn Error + 'static)> {
    let payload: &(dyn Error + 'static) = err.downcast_ref::<io::Error>()?.get_ref()?;
    payload.is::<Failure>().then_some(payload)
}

/// Anything a chain walk can start from, including an absent error.
pub trait AsChain<'a> {
    fn as_chain(self) -> Option<&'a (dyn Error + 'static)>;
}

impl<'a, E: Error + 'static> AsChain<'a> for &'a E {
    #[inline]
    fn as_chain(self) -> Option<&'a (dyn Error + 'static)> {
        Some(self)
    }
}

impl<'a> AsChain<'a> for &'a (dyn Error + 'static) {
    #[inline]
    fn as_chain(self) -> Option<&'a (dyn Error + 'static)> {
        Some(self)
    }
}

impl<'a> AsChain<'a> for &'a (dyn Error + Send + Sync + 'static) {
    #[inline]
    fn as_chain(self) -> Option<&'a (dyn Error + 'static)> {
        Some(self)
    }
}

impl<'a, T: AsChain<'a>> AsChain<'a> for Option<T> {
    #[inline]
    fn as_chain(self) -> Option<&'a (dyn Error + 'static)> {
        self.and_then(AsChain::as_chain)
    }
}
