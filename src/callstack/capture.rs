//! Stack capture on top of the `backtrace` crate.

use std::ffi::c_void;

use super::{CallStack, Frame};

/// Upper bound on frames kept by a single [`callers`] capture.
pub const MAX_DEPTH: usize = 32;

/// Frames tolerated between the unwinder and [`callers`] itself.
const PRELUDE_LIMIT: usize = 64;

const ANCHOR: &str = concat!(module_path!(), "::callers");

/// Captures the call stack of the current thread.
///
/// Index 0 of the result is the function that called `callers`; `skip` drops
/// that many additional frames, so a constructor can pass `1` to start the
/// stack at its own caller. At most [`MAX_DEPTH`] frames are kept. Frames whose
/// symbols cannot be resolved are left out, and a fully unresolvable stack
/// yields an empty [`CallStack`] rather than an error.
///
/// When symbol names are unavailable `callers` cannot find itself in the trace.
/// The stack then starts at the innermost resolved frame and `skip` is ignored,
/// since counting from there would drop unrelated frames.
///
/// # Examples
///
/// ```
/// use error_trail::callstack::{callers, MAX_DEPTH};
///
/// let stack = callers(0);
/// assert!(stack.len() <= MAX_DEPTH);
/// ```
#[inline(never)]
pub fn callers(skip: usize) -> CallStack {
    let mut seen: Vec<Frame> = Vec::with_capacity(MAX_DEPTH);
    let mut anchor: Option<usize> = None;

    backtrace::trace(|raw| {
        backtrace::resolve_frame(raw, |symbol| {
            let frame = Frame::from_symbol(symbol.name(), symbol.filename(), symbol.lineno());
            if let Some(frame) = frame {
                if anchor.is_none() && frame.function() == ANCHOR {
                    anchor = Some(seen.len());
                }
                seen.push(frame);
            }
        });

        let wanted = match anchor {
            Some(at) => at + 1 + skip + MAX_DEPTH,
            None => PRELUDE_LIMIT + skip + MAX_DEPTH,
        };
        seen.len() < wanted
    });

    window(seen, anchor, skip)
}

/// Keeps the frames above `anchor`, minus `skip`; without an anchor keeps everything.
fn window(frames: Vec<Frame>, anchor: Option<usize>, skip: usize) -> CallStack {
    let start = anchor.map_or(0, |at| at + 1 + skip);
    frames.into_iter().skip(start).take(MAX_DEPTH).collect()
}

/// Resolves raw instruction pointers captured by some other mechanism.
pub(crate) fn resolve_addresses(addresses: &[usize]) -> CallStack {
    let mut frames = Vec::with_capacity(addresses.len());
    for &addr in addresses {
        backtrace::resolve(addr as *mut c_void, |symbol| {
            let frame = Frame::from_symbol(symbol.name(), symbol.filename(), symbol.lineno());
            if let Some(frame) = frame {
                frames.push(frame);
            }
        });
    }
    CallStack::from(frames)
}

/// Normalises a `backtrace::Backtrace`, resolving it first if it was captured unresolved.
pub(crate) fn from_backtrace(trace: &backtrace::Backtrace) -> CallStack {
    let unresolved = trace.frames().iter().any(|f| f.symbols().is_empty());
    if unresolved {
        let mut owned = trace.clone();
        owned.resolve();
        return collect_backtrace(&owned);
    }
    collect_backtrace(trace)
}

fn collect_backtrace(trace: &backtrace::Backtrace) -> CallStack {
    trace
        .frames()
        .iter()
        .flat_map(|frame| frame.symbols())
        .filter_map(|symbol| Frame::from_symbol(symbol.name(), symbol.filename(), symbol.lineno()))
        .collect()
}
