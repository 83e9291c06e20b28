//! Trait for deferred decorations applied while a node is built.
//!
//! A [`Decorator`] is a unit of mutation against the [`Fields`] accumulator.
//! Constructors take a single `impl Decorator`, and the trait is implemented for
//! `()`, tuples, `Option`, and `Vec`, so any number of decorations can be passed
//! and they are applied left to right.
//!
//! # Implementations
//!
//! - `()` - no decorations
//! - `String` / `&'static str` - sets the message
//! - [`Message`](crate::Message), [`Context`](crate::Context), [`Mark`](crate::Mark),
//!   [`Temporary`](crate::Temporary)
//! - `Option<D>` - applies `D` when present
//! - `Vec<D>` and tuples of up to eight decorators - applied in order
//!
//! # Examples
//!
//! ```
//! use error_trail::{debugs_of, message_of, Context, Failure, IntCode, Message};
//!
//! let err = Failure::new(
//!     IntCode::new(404),
//!     (Message::new("user not found"), Context::from([("id", "42")])),
//! );
//!
//! assert_eq!(message_of(&err), Some("user not found"));
//! assert_eq!(debugs_of(&err).len(), 1);
//! ```
use crate::types::Fields;

/// Applies a decoration to a node under construction.
///
/// Implement this for domain-specific annotations:
///
/// ```
/// use error_trail::{traits::Decorator, Context, Fields};
///
/// struct Tenant(u64);
///
/// impl Decorator for Tenant {
///     fn decorate(self, fields: &mut Fields) {
///         fields.push_context(Context::new().with("tenant", self.0));
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a failure decoration",
    label = "this type does not implement `Decorator`",
    note = "pass `()` for no decorations, or a tuple such as \
            `(Message::new(..), Context::from(..))`"
)]
pub trait Decorator {
    /// Writes this decoration into `fields`.
    fn decorate(self, fields: &mut Fields);
}

impl Decorator for () {
    #[inline]
    fn decorate(self, _fields: &mut Fields) {}
}

impl Decorator for String {
    #[inline]
    fn decorate(self, fields: &mut Fields) {
        fields.set_message(self);
    }
}

impl Decorator for &'static str {
    #[inline]
    fn decorate(self, fields: &mut Fields) {
        fields.set_message(self);
    }
}

impl<D: Decorator> Decorator for Option<D> {
    #[inline]
    fn decorate(self, fields: &mut Fields) {
        if let Some(decoration) = self {
            decoration.decorate(fields);
        }
    }
}

impl<D: Decorator> Decorator for Vec<D> {
    fn decorate(self, fields: &mut Fields) {
        for decoration in self {
            decoration.decorate(fields);
        }
    }
}

macro_rules! impl_decorator_tuple {
    ($($name:ident),+) => {
        impl<$($name: Decorator),+> Decorator for ($($name,)+) {
            #[inline]
            #[allow(non_snake_case)]
            fn decorate(self, fields: &mut Fields) {
                let ($($name,)+) = self;
                $($name.decorate(fields);)+
            }
        }
    };
}

impl_decorator_tuple!(A);
impl_decorator_tuple!(A, B);
impl_decorator_tuple!(A, B, C);
impl_decorator_tuple!(A, B, C, D);
impl_decorator_tuple!(A, B, C, D, E);
impl_decorator_tuple!(A, B, C, D, E, F);
impl_decorator_tuple!(A, B, C, D, E, F, G);
impl_decorator_tuple!(A, B, C, D, E, F, G, H);
