//! Error chains that carry a classification code, a message, structured debug
//! context and the call stack captured at every construction point.
//!
//! Application code creates a chain root with [`Failure::new`], adds layers
//! with [`Failure::wrap`] or reclassifies with [`Failure::translate`]. Code at
//! the handling boundary asks questions about the whole chain through
//! [`code_of`], [`is`], [`message_of`], [`debugs_of`], [`callstack_of`] and
//! [`cause_of`]. Foreign errors take part through `Error::source()`.
//!
//! # Examples
//!
//! ## Classify, wrap, and inspect
//!
//! ```
//! use error_trail::{
//!     callstack_of, code_of, debugs_of, is, message_of, Context, Failure, StringCode,
//! };
//!
//! const NOT_FOUND: StringCode = StringCode::new("NotFound");
//! const FORBIDDEN: StringCode = StringCode::new("Forbidden");
//!
//! let e1 = Failure::new(NOT_FOUND, Context::from([("id", "42")]));
//! let e2 = Failure::translate(e1, FORBIDDEN, "no access");
//!
//! assert_eq!(code_of(&e2).map(|c| c.to_string()), Some("Forbidden".to_string()));
//! assert!(is(&e2, &NOT_FOUND));
//! assert!(is(&e2, &FORBIDDEN));
//! assert_eq!(message_of(&e2), Some("no access"));
//! assert_eq!(debugs_of(&e2), [&Context::from([("id", "42")])]);
//! assert!(callstack_of(&e2).len() >= e2.call_stack().len());
//! ```
//!
//! ## Foreign errors in the chain
//!
//! ```
//! use error_trail::{cause_of, ResultExt};
//! use std::io;
//!
//! fn read() -> Result<String, io::Error> {
//!     Err(io::Error::new(io::ErrorKind::NotFound, "settings.toml"))
//! }
//!
//! let err = read().wrap("loading settings").unwrap_err();
//! let cause = cause_of(&err).and_then(|c| c.downcast_ref::<io::Error>());
//! assert_eq!(cause.map(io::Error::kind), Some(io::ErrorKind::NotFound));
//! ```
//!
//! ## Rendering
//!
//! ```
//! use error_trail::{Failure, IntCode};
//!
//! let err = Failure::wrap(Failure::new(IntCode::new(404), "user missing"), "loading profile");
//! assert_eq!(err.to_string(), "loading profile -> user missing (code: 404)");
//! println!("{:#}", err); // message, context, and every captured frame
//! ```

/// Call stack capture and the CallStack/Frame types
pub mod callstack;
/// Chain traversal and accessors
pub mod chain;
/// Macros for messages, debug bags and chain roots
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits for decorations, markers, wrappers and retry classification
pub mod traits;
/// Failure and decoration types
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use callstack::{CallStack, Frame};
pub use chain::{
    callstack_of, cause_of, code_as, code_of, contexts_of, debugs_of, has_marker, is, marker_of,
    markers_of, message_of, AsChain, Chain, Node,
};
pub use traits::*;
pub use types::{
    error_formatter::{ErrorFormatConfig, ErrorFormatter},
    BoxError, Code, Context, ErrorVec, Failure, Fields, IntCode, Mark, Message, Report,
    StringCode,
};
