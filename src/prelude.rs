//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_trail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`bail!`], [`context!`], [`failure!`], [`impl_code!`], [`message!`]
//! - **Types**: [`Failure`], [`Context`], [`Message`], [`Temporary`], [`IntCode`],
//!   [`StringCode`]
//! - **Accessors**: [`code_of`], [`is`], [`message_of`], [`debugs_of`], [`callstack_of`],
//!   [`cause_of`]
//! - **Traits**: [`ResultExt`], [`TransientError`]
//!
//! # Examples
//!
//! ```
//! use error_trail::prelude::*;
//!
//! const CONFIG: StringCode = StringCode::new("Config");
//!
//! fn load_config() -> FailureResult<String> {
//!     std::fs::read_to_string("/definitely/missing/config.toml")
//!         .translate(CONFIG, context! { "path" => "/definitely/missing/config.toml" })
//! }
//!
//! let err = load_config().unwrap_err();
//! assert!(is(&err, &CONFIG));
//! ```

// Macros
pub use crate::{bail, context, failure, impl_code, message};

// Core types
pub use crate::traits::Temporary;
pub use crate::types::{Context, Failure, IntCode, Message, StringCode};

// Accessors
pub use crate::chain::{callstack_of, cause_of, code_of, debugs_of, is, message_of};

// Traits
pub use crate::traits::{ResultExt, TransientError};

/// Result whose error is a [`Failure`].
pub type FailureResult<T> = Result<T, Failure>;
