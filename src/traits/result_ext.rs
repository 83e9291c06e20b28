//! Extension trait for wrapping and translating errors inside `Result`s.
//!
//! This module provides [`ResultExt`], the `?`-friendly form of
//! [`Failure::wrap`] and [`Failure::translate`]. An `Ok` value passes through
//! untouched and no call stack is captured for it.
//!
//! # Examples
//!
//! ```
//! use error_trail::{code_of, ResultExt, StringCode};
//!
//! const CONFIG: StringCode = StringCode::new("Config");
//!
//! fn load_config() -> Result<String, error_trail::Failure> {
//!     std::fs::read_to_string("/definitely/missing/config.toml")
//!         .translate(CONFIG, "loading configuration file")
//! }
//!
//! let err = load_config().unwrap_err();
//! assert!(code_of(&err).is_some());
//! ```

use crate::callstack::callers;
use crate::traits::Decorator;
use crate::types::{BoxError, Failure};
use crate::Code;

/// Extension trait for turning `Result<T, E>` errors into chain nodes.
pub trait ResultExt<T, E> {
    /// Wraps the error in a new [`Failure`] node without reclassifying it.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trail::{cause_of, ResultExt};
    /// use std::io;
    ///
    /// let res: Result<(), io::Error> = Err(io::Error::other("boom"));
    /// let err = res.wrap("saving draft").unwrap_err();
    /// assert_eq!(cause_of(&err).map(|c| c.to_string()), Some("boom".into()));
    ///
    /// let ok: Result<u8, io::Error> = Ok(1);
    /// assert_eq!(ok.wrap("saving draft").ok(), Some(1));
    /// ```
    fn wrap<D: Decorator>(self, decorations: D) -> Result<T, Failure>;

    /// Wraps the error in a new [`Failure`] node that carries `code`.
    fn translate<C: Code, D: Decorator>(self, code: C, decorations: D) -> Result<T, Failure>;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[inline(never)]
    fn wrap<D: Decorator>(self, decorations: D) -> Result<T, Failure> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Failure::seal(None, Some(err.into()), decorations, callers(1))),
        }
    }

    #[inline(never)]
    fn translate<C: Code, D: Decorator>(self, code: C, decorations: D) -> Result<T, Failure> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Failure::seal(
                Some(Box::new(code)),
                Some(err.into()),
                decorations,
                callers(1),
            )),
        }
    }
}
