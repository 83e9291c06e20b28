//! Owned snapshot of a chain for logging and structured output.
//!
//! [`Report`] collects everything the accessors expose about a chain into
//! plain data. It is the hook for custom rendering: log layers, HTTP error
//! bodies, or terminal output can all be built on it without touching the
//! chain again. With the `serde` feature enabled it serializes directly.
//!
//! # Examples
//!
//! ```
//! use error_trail::{Context, Failure, Report, StringCode};
//!
//! const NOT_FOUND: StringCode = StringCode::new("NotFound");
//!
//! let err = Failure::new(NOT_FOUND, ("no such user", Context::from([("id", "42")])));
//! let report = Report::new(&err);
//!
//! assert_eq!(report.code.as_deref(), Some("NotFound"));
//! assert_eq!(report.message.as_deref(), Some("no such user"));
//! assert_eq!(report.contexts.len(), 1);
//! ```

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::callstack::CallStack;
use crate::chain::{self, AsChain, Chain};
use crate::types::Context;

/// Plain-data view of an error chain.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Display form of the outermost code.
    pub code: Option<String>,
    /// Outermost non-empty message.
    pub message: Option<String>,
    /// Every debug bag, outermost first.
    pub contexts: Vec<Context>,
    /// Debug form of every marker, outermost first.
    pub markers: Vec<String>,
    /// Concatenated call stacks of every node.
    pub call_stack: CallStack,
    /// Display form of the cause.
    pub cause: Option<String>,
}

impl Report {
    pub fn new<'a>(err: impl AsChain<'a>) -> Self {
        let root = err.as_chain();

        Self {
            code: chain::code_of(root).map(|code| code.to_string()),
            message: chain::message_of(root).map(str::to_owned),
            contexts: chain::contexts_of(root).into_iter().cloned().collect(),
            markers: Chain::new(root)
                .failures()
                .flat_map(|f| f.markers())
                .map(|m| format!("{m:?}"))
                .collect(),
            call_stack: chain::callstack_of(root),
            cause: chain::cause_of(root).map(|cause| cause.to_string()),
        }
    }

    /// `true` when the report was built from an absent error.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.message, &self.code) {
            (Some(message), Some(code)) => writeln!(f, "Error: {message} (code: {code})")?,
            (Some(message), None) => writeln!(f, "Error: {message}")?,
            (None, Some(code)) => writeln!(f, "Error: (code: {code})")?,
            (None, None) => writeln!(f, "Error")?,
        }

        if let Some(cause) = &self.cause {
            writeln!(f, "Cause: {cause}")?;
        }

        if !self.contexts.is_empty() {
            writeln!(f, "Context:")?;
            for ctx in &self.contexts {
                writeln!(f, "  - {ctx}")?;
            }
        }

        if !self.markers.is_empty() {
            writeln!(f, "Markers: {}", self.markers.join(", "))?;
        }

        if !self.call_stack.is_empty() {
            writeln!(f, "CallStack:")?;
            for frame in &self.call_stack {
                writeln!(f, "  {frame:#}")?;
            }
        }
        Ok(())
    }
}
