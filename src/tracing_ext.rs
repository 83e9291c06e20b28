//! Tracing integration for error-trail.
//!
//! - [`log_failure`] emits one `ERROR` event describing a chain, with the
//!   code, message, debug bags, cause and call stack as structured fields.
//! - [`SpanContext`] is a decorator that records the current span as a debug
//!   bag on the node being built.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-trail = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::chain::AsChain;
use crate::traits::Decorator;
use crate::types::{Context, Fields, Report};

/// Emits a single `tracing::error!` event for the chain rooted at `err`.
///
/// The event carries `code`, `error_message`, `cause`, `context` and
/// `call_stack` fields; its message is the rendered chain. Absent errors emit
/// nothing.
///
/// # Example
///
/// ```rust,ignore
/// use error_trail::tracing_ext::log_failure;
///
/// if let Err(err) = handle(request) {
///     log_failure(&err);
/// }
/// ```
pub fn log_failure<'a>(err: impl AsChain<'a>) {
    let Some(root) = err.as_chain() else {
        return;
    };
    let report = Report::new(root);
    let contexts: Vec<String> = report.contexts.iter().map(ToString::to_string).collect();

    tracing::error!(
        code = report.code.as_deref().unwrap_or(""),
        error_message = report.message.as_deref().unwrap_or(""),
        cause = report.cause.as_deref().unwrap_or(""),
        context = ?contexts,
        call_stack = %report.call_stack,
        "{}",
        root
    );
}

/// Decorator that records a span's name and target as a debug bag.
///
/// # Example
///
/// ```rust,ignore
/// use error_trail::{tracing_ext::SpanContext, Failure};
///
/// let span = tracing::info_span!("fetch_user");
/// let _guard = span.enter();
/// let err = Failure::wrap(io_err, SpanContext::current());
/// ```
#[derive(Debug, Clone)]
pub struct SpanContext {
    span: Span,
}

impl SpanContext {
    /// Captures [`Span::current`].
    pub fn current() -> Self {
        Self { span: Span::current() }
    }

    pub fn of(span: Span) -> Self {
        Self { span }
    }
}

impl Decorator for SpanContext {
    fn decorate(self, fields: &mut Fields) {
        fields.push_context(span_to_context(&self.span));
    }
}

/// Converts a tracing span to a debug bag.
///
/// Disabled spans carry no metadata and are recorded as `unknown`.
fn span_to_context(span: &Span) -> Context {
    match span.metadata() {
        Some(meta) => Context::new().with("span", meta.name()).with("target", meta.target()),
        None => Context::new().with("span", "unknown"),
    }
}
