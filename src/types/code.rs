//! Comparable error classifications.
//!
//! A [`Code`] is any `'static` value compared with its own `PartialEq`. Two codes
//! are equal only when they have the same concrete type and compare equal under
//! that type's `PartialEq`. Boxes and `'static` references are transparent: a
//! `Box<dyn Code>` or `&'static C` compares, downcasts and renders as the code it
//! points to.
//!
//! Implement the trait for your own types with [`impl_code!`](crate::impl_code).
//! [`IntCode`], [`StringCode`], the integer primitives, `bool`, `char` and
//! `String` are codes already.
//!
//! # Examples
//!
//! ```
//! use error_trail::{impl_code, Code, IntCode, StringCode};
//!
//! const NOT_FOUND: StringCode = StringCode::new("NotFound");
//! const TEAPOT: IntCode = IntCode::new(418);
//!
//! let code: &dyn Code = &NOT_FOUND;
//! assert!(code == &StringCode::new("NotFound") as &dyn Code);
//! assert!(code != &TEAPOT as &dyn Code);
//! assert_eq!(code.downcast_ref::<StringCode>(), Some(&NOT_FOUND));
//!
//! #[derive(Debug, PartialEq)]
//! enum DbCode {
//!     Deadlock,
//! }
//! impl_code!(DbCode);
//!
//! let boxed: Box<dyn Code> = Box::new(DbCode::Deadlock);
//! assert!(boxed.code_eq(&DbCode::Deadlock));
//! assert_eq!(boxed.to_string(), "Deadlock");
//! ```

use core::any::Any;
use core::fmt::{self, Debug, Display};

use std::borrow::Cow;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An error classification with identity semantics only.
pub trait Code: Any + Debug + Send + Sync {
    /// Returns `true` if `other` has the same concrete type and compares equal.
    fn code_eq(&self, other: &dyn Code) -> bool;

    /// Upcast used for typed access to the concrete code.
    fn as_any(&self) -> &dyn Any;

    /// Renders the code. Falls back to `Debug`.
    fn fmt_code(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

/// Implements [`Code`] for types with `PartialEq + Debug`.
///
/// The plain form renders the code through `Debug`; the `Display:` form renders
/// it through `Display`.
///
/// # Examples
///
/// ```
/// use error_trail::{impl_code, is, Failure};
/// use std::fmt;
///
/// #[derive(Debug, PartialEq)]
/// enum AuthCode {
///     Expired,
/// }
/// impl_code!(AuthCode);
///
/// #[derive(Debug, PartialEq)]
/// struct HttpStatus(u16);
/// impl fmt::Display for HttpStatus {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "HTTP {}", self.0)
///     }
/// }
/// impl_code!(Display: HttpStatus);
///
/// let err = Failure::new(AuthCode::Expired, ());
/// assert!(is(&err, &AuthCode::Expired));
/// let code = error_trail::code_of(&Failure::new(HttpStatus(401), ())).map(|c| c.to_string());
/// assert_eq!(code.as_deref(), Some("HTTP 401"));
/// ```
#[macro_export]
macro_rules! impl_code {
    (Display: $($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Code for $ty {
                #[inline]
                fn code_eq(&self, other: &dyn $crate::Code) -> bool {
                    other.as_any().downcast_ref::<Self>().is_some_and(|other| self == other)
                }

                #[inline]
                fn as_any(&self) -> &dyn ::core::any::Any {
                    self
                }

                fn fmt_code(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    ::core::fmt::Display::fmt(self, f)
                }
            }
        )+
    };
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Code for $ty {
                #[inline]
                fn code_eq(&self, other: &dyn $crate::Code) -> bool {
                    other.as_any().downcast_ref::<Self>().is_some_and(|other| self == other)
                }

                #[inline]
                fn as_any(&self) -> &dyn ::core::any::Any {
                    self
                }
            }
        )+
    };
}

impl_code!(Display: IntCode, StringCode, String, bool, char);
impl_code!(Display: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<C: Code + ?Sized> Code for Box<C> {
    #[inline]
    fn code_eq(&self, other: &dyn Code) -> bool {
        (**self).code_eq(other)
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        (**self).as_any()
    }

    fn fmt_code(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt_code(f)
    }
}

impl<C: Code + ?Sized> Code for &'static C {
    #[inline]
    fn code_eq(&self, other: &dyn Code) -> bool {
        (**self).code_eq(other)
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        (**self).as_any()
    }

    fn fmt_code(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt_code(f)
    }
}

impl<'a> dyn Code + 'a {
    /// Returns the concrete code if it is of type `C`.
    #[inline]
    pub fn downcast_ref<C: Code>(&self) -> Option<&C> {
        self.as_any().downcast_ref::<C>()
    }

    #[inline]
    pub fn is<C: Code>(&self) -> bool {
        self.as_any().is::<C>()
    }
}

impl<'a, 'b> PartialEq<dyn Code + 'b> for dyn Code + 'a {
    #[inline]
    fn eq(&self, other: &(dyn Code + 'b)) -> bool {
        self.code_eq(other)
    }
}

impl<'a> Display for dyn Code + 'a {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_code(f)
    }
}

/// Integer-backed code.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IntCode(pub i64);

impl IntCode {
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl Display for IntCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// String-backed code.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StringCode(pub Cow<'static, str>);

impl StringCode {
    #[inline]
    pub const fn new(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }

    /// Creates a code from a runtime string.
    #[inline]
    pub fn owned(value: impl Into<String>) -> Self {
        Self(Cow::Owned(value.into()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for StringCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
