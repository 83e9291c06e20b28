//! Call stack capture and the immutable [`CallStack`] value.
//!
//! A [`CallStack`] is an ordered sequence of [`Frame`]s. Index 0 is the function
//! closest to the capture point and the sequence proceeds outward through its
//! callers. Stacks are produced once by [`callers`] (or by ingesting a stack from
//! another capture mechanism) and never mutated afterwards.
//!
//! # Examples
//!
//! ```
//! use error_trail::{CallStack, Frame};
//!
//! let stack = CallStack::from(vec![
//!     Frame::new("/srv/app/src/store.rs", 42, "app::store::load"),
//!     Frame::new("/srv/app/src/main.rs", 7, "app::main"),
//! ]);
//!
//! assert_eq!(stack.to_string(), "load: main");
//! assert_eq!(stack.head_frame().map(|f| f.line()), Some(42));
//! ```

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod capture;
mod frame;

pub use capture::{callers, MAX_DEPTH};
pub use frame::Frame;

/// Ordered, immutable sequence of frames captured at one construction point.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CallStack {
    frames: Vec<Frame>,
}

impl CallStack {
    /// Resolves raw instruction pointers produced by a foreign stack-capturing
    /// mechanism into frames of the same shape as [`callers`] produces.
    ///
    /// Addresses that cannot be resolved are skipped.
    pub fn from_addresses(addresses: &[usize]) -> Self {
        capture::resolve_addresses(addresses)
    }

    /// Concatenates several stacks in the order given.
    pub fn concat<'a, I>(stacks: I) -> Self
    where
        I: IntoIterator<Item = &'a CallStack>,
    {
        stacks.into_iter().flat_map(|cs| cs.frames.iter().cloned()).collect()
    }

    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The frame closest to the capture point.
    #[inline]
    pub fn head_frame(&self) -> Option<&Frame> {
        self.frames.first()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// An empty stack means the origin is unknown.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Frame> {
        self.frames.iter()
    }
}

impl From<Vec<Frame>> for CallStack {
    #[inline]
    fn from(frames: Vec<Frame>) -> Self {
        Self { frames }
    }
}

impl From<&backtrace::Backtrace> for CallStack {
    fn from(trace: &backtrace::Backtrace) -> Self {
        capture::from_backtrace(trace)
    }
}

impl FromIterator<Frame> for CallStack {
    fn from_iter<I: IntoIterator<Item = Frame>>(iter: I) -> Self {
        Self { frames: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a CallStack {
    type Item = &'a Frame;
    type IntoIter = core::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

impl fmt::Display for CallStack {
    /// `{}` joins bare function names with `": "`; `{:#}` writes one
    /// `[func] path:line` entry per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            for frame in &self.frames {
                writeln!(f, "{frame:#}")?;
            }
            return Ok(());
        }

        let mut first = true;
        for frame in &self.frames {
            if !first {
                f.write_str(": ")?;
            }
            first = false;
            f.write_str(frame.func())?;
        }
        Ok(())
    }
}
