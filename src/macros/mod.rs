//! Ergonomic macros for building decorations and chain roots.
//!
//! - [`macro@crate::message`] - Formats a [`Message`](crate::Message) decoration.
//! - [`macro@crate::context`] - Builds a [`Context`](crate::Context) debug bag from
//!   `key => value` pairs.
//! - [`macro@crate::failure`] - Creates a chain root with a formatted message.
//! - [`macro@crate::bail`] - Returns early with a chain root.
//!
//! # Examples
//!
//! ```
//! use error_trail::{context, failure, message, Failure, IntCode};
//!
//! let user_id = 42;
//! let err = Failure::new(
//!     IntCode::new(404),
//!     (message!("user {} not found", user_id), context! { "user_id" => user_id }),
//! );
//!
//! let same = failure!(IntCode::new(404), "user {} not found", user_id);
//! assert_eq!(err.message(), same.message());
//! ```

/// Formats a [`Message`](crate::Message) decoration.
///
/// # Examples
///
/// ```
/// use error_trail::{message, message_of, Failure, IntCode};
///
/// let attempts = 3;
/// let err = Failure::new(IntCode::new(503), message!("gave up after {attempts} attempts"));
/// assert_eq!(message_of(&err), Some("gave up after 3 attempts"));
/// ```
#[macro_export]
macro_rules! message {
    ($($arg:tt)*) => {
        $crate::Message::new(format!($($arg)*))
    };
}

/// Builds a [`Context`](crate::Context) debug bag.
///
/// # Examples
///
/// ```
/// use error_trail::context;
///
/// let ctx = context! { "user_id" => 42, "region" => "eu-west-1" };
/// assert_eq!(ctx.get("user_id"), Some("42"));
/// assert!(context! {}.is_empty());
/// ```
#[macro_export]
macro_rules! context {
    () => {
        $crate::Context::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::Context::new()$(.with($key, $value))+
    };
}

/// Creates a chain root with a code and an optional formatted message.
///
/// The call stack starts at the macro invocation site.
///
/// # Examples
///
/// ```
/// use error_trail::{failure, message_of, StringCode};
///
/// let err = failure!(StringCode::new("Timeout"), "no reply within {}ms", 250);
/// assert_eq!(message_of(&err), Some("no reply within 250ms"));
///
/// let bare = failure!(StringCode::new("Timeout"));
/// assert_eq!(message_of(&bare), None);
/// ```
#[macro_export]
macro_rules! failure {
    ($code:expr $(,)?) => {
        $crate::Failure::new($code, ())
    };
    ($code:expr, $($arg:tt)+) => {
        $crate::Failure::new($code, $crate::message!($($arg)+))
    };
}

/// Returns early from the enclosing function with a chain root.
///
/// Expands to `return Err(failure!(..).into())`, so the function's error type
/// only needs `From<Failure>`.
///
/// # Examples
///
/// ```
/// use error_trail::{bail, code_of, Failure, IntCode};
///
/// fn check(age: u8) -> Result<u8, Failure> {
///     if age < 18 {
///         bail!(IntCode::new(403), "age {} is below the limit", age);
///     }
///     Ok(age)
/// }
///
/// assert!(check(30).is_ok());
/// assert!(code_of(&check(12).unwrap_err()).is_some());
/// ```
#[macro_export]
macro_rules! bail {
    ($($arg:tt)+) => {
        return ::core::result::Result::Err($crate::failure!($($arg)+).into())
    };
}
