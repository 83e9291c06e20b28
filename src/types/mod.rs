//! Error chain node and decoration types.
//!
//! # Examples
//!
//! ```
//! use error_trail::{code_of, Context, Failure, StringCode};
//!
//! const NOT_FOUND: StringCode = StringCode::new("NotFound");
//!
//! let err = Failure::new(NOT_FOUND, ("user missing", Context::from([("id", 42)])));
//! let err = Failure::wrap(err, "loading profile");
//!
//! println!("{}", err);
//! // Output: loading profile -> user missing (code: NotFound)
//! assert_eq!(code_of(&err).map(|c| c.to_string()), Some("NotFound".to_string()));
//! ```
use smallvec::SmallVec;

pub mod code;
pub mod context;
pub mod error_formatter;
pub mod failure;
pub mod fields;
pub mod report;

pub use code::*;
pub use context::*;
pub use failure::*;
pub use fields::*;
pub use report::*;

/// SmallVec-backed collection used for per-node debug bags and markers.
///
/// Uses inline storage for 1 element, the common case of a single decoration
/// per node.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// Owned foreign error stored as a node's inner error.
pub type BoxError = Box<dyn core::error::Error + Send + Sync + 'static>;
