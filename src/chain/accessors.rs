use core::error::Error;

use super::{AsChain, Chain};
use crate::callstack::CallStack;
use crate::traits::Marker;
use crate::types::{Code, Context};

/// Code of the outermost node that sets one.
///
/// Returns `None` when no node in the chain carries a code.
#[must_use]
pub fn code_of<'a>(err: impl AsChain<'a>) -> Option<&'a (dyn Code + 'static)> {
    Chain::new(err).failures().find_map(|f| f.code())
}

/// The outermost code downcast to `C`, if it has that type.
#[must_use]
pub fn code_as<'a, C: Code>(err: impl AsChain<'a>) -> Option<&'a C> {
    code_of(err).and_then(|code| code.downcast_ref::<C>())
}

/// Message of the outermost node carrying a non-empty message.
#[must_use]
pub fn message_of<'a>(err: impl AsChain<'a>) -> Option<&'a str> {
    Chain::new(err).failures().filter_map(|f| f.message()).find(|m| !m.is_empty())
}

/// Every debug bag in the chain, outermost node first, each node's bags in
/// the order they were attached.
#[must_use]
pub fn contexts_of<'a>(err: impl AsChain<'a>) -> Vec<&'a Context> {
    Chain::new(err).failures().flat_map(|f| f.contexts().iter()).collect()
}

/// Alias of [`contexts_of`].
#[inline]
#[must_use]
pub fn debugs_of<'a>(err: impl AsChain<'a>) -> Vec<&'a Context> {
    contexts_of(err)
}

/// Concatenation of every node's call stack, outermost node first.
#[must_use]
pub fn callstack_of<'a>(err: impl AsChain<'a>) -> CallStack {
    CallStack::concat(Chain::new(err).failures().map(|f| f.call_stack()))
}

/// The deepest error reached by the walk.
#[must_use]
pub fn cause_of<'a>(err: impl AsChain<'a>) -> Option<&'a (dyn Error + 'static)> {
    Chain::new(err).last().map(|node| node.as_error())
}

/// Returns `true` if any node in the chain carries a code equal to `code`.
///
/// Unlike [`code_of`], deeper codes hidden behind a translation still match.
#[must_use]
pub fn is<'a>(err: impl AsChain<'a>, code: &(dyn Code + 'static)) -> bool {
    Chain::new(err).failures().filter_map(|f| f.code()).any(|c| c.code_eq(code))
}

/// Every marker of type `M` in the chain, outermost first.
pub fn markers_of<'a, M: Marker>(err: impl AsChain<'a>) -> impl Iterator<Item = &'a M> {
    Chain::new(err).failures().flat_map(|f| f.markers()).filter_map(|m| m.downcast_ref::<M>())
}

/// The outermost marker of type `M`.
#[must_use]
pub fn marker_of<'a, M: Marker>(err: impl AsChain<'a>) -> Option<&'a M> {
    markers_of::<M>(err).next()
}

#[must_use]
pub fn has_marker<'a, M: Marker>(err: impl AsChain<'a>) -> bool {
    marker_of::<M>(err).is_some()
}
