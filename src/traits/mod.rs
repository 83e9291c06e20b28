//! Core traits for building and classifying error chains.
//!
//! - [`Decorator`]: deferred mutation applied to a node while it is built
//! - [`Marker`]: opaque capabilities consumers can test for across a chain
//! - [`Wrapper`]: foreign wrapping layers inserted into a chain
//! - [`ResultExt`]: `wrap`/`translate` directly on `Result`
//! - [`TransientError`]: retry classification, implemented for [`Failure`](crate::Failure)
//!
//! # Examples
//!
//! ```
//! use error_trail::traits::{ResultExt, TransientError};
//! use error_trail::{Temporary, IntCode};
//!
//! let res: Result<(), &str> = Err("upstream busy");
//! let err = res.translate(IntCode::new(503), Temporary::new()).unwrap_err();
//! assert!(err.is_transient());
//! ```

pub mod decorator;
pub mod marker;
pub mod result_ext;
pub mod transient;
pub mod wrapper;

pub use decorator::Decorator;
pub use marker::Marker;
pub use result_ext::ResultExt;
pub use transient::{Temporary, TransientError, TransientErrorExt};
pub use wrapper::Wrapper;
