//! Tests for tracing integration.

use std::fmt;
use std::io;
use std::sync::{Arc, Mutex};

use error_trail::tracing_ext::{log_failure, SpanContext};
use error_trail::{debugs_of, Context, Failure, IntCode, ResultExt};
use tracing::field::{Field, Visit};
use tracing::{Event, Span, Subscriber};
use tracing_subscriber::layer::{self, SubscriberExt};
use tracing_subscriber::{Layer, Registry};

type EventFields = Vec<(String, String)>;

/// Layer that records the fields of every event it sees.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<EventFields>>>);

impl Captured {
    fn events(&self) -> Vec<EventFields> {
        self.0.lock().unwrap().clone()
    }
}

impl<S: Subscriber> Layer<S> for Captured {
    fn on_event(&self, event: &Event<'_>, _ctx: layer::Context<'_, S>) {
        let mut fields = FieldRecorder::default();
        event.record(&mut fields);
        self.0.lock().unwrap().push(fields.0);
    }
}

#[derive(Default)]
struct FieldRecorder(EventFields);

impl Visit for FieldRecorder {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }
}

fn field<'a>(fields: &'a EventFields, name: &str) -> Option<&'a str> {
    fields.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
}

fn capture(f: impl FnOnce()) -> Vec<EventFields> {
    let captured = Captured::default();
    tracing::subscriber::with_default(Registry::default().with(captured.clone()), f);
    captured.events()
}

#[test]
fn span_context_of_disabled_span_records_unknown() {
    let err = Failure::new(IntCode::new(500), SpanContext::of(Span::none()));

    assert_eq!(err.contexts(), [Context::from([("span", "unknown")])]);
}

#[test]
fn span_context_current_records_entered_span() {
    let captured = Captured::default();
    let err = tracing::subscriber::with_default(Registry::default().with(captured), || {
        let span = tracing::info_span!("fetch_user");
        let _guard = span.enter();
        let res: Result<(), io::Error> = Err(io::Error::other("timeout"));
        res.wrap(SpanContext::current()).unwrap_err()
    });

    let bags = debugs_of(&err);
    assert_eq!(bags.len(), 1);
    assert_eq!(bags[0].get("span"), Some("fetch_user"));
    assert!(bags[0].get("target").is_some());
}

#[test]
fn span_context_combines_with_other_decorations() {
    let err = Failure::new(
        IntCode::new(500),
        ("lookup failed", SpanContext::of(Span::none()), Context::from([("id", "9")])),
    );

    assert_eq!(err.message(), Some("lookup failed"));
    assert_eq!(err.contexts().len(), 2);
    assert_eq!(err.contexts()[1].get("id"), Some("9"));
}

#[test]
fn log_failure_emits_one_event_with_chain_fields() {
    let err = Failure::translate(
        io::Error::other("connection reset"),
        IntCode::new(503),
        ("loading profile", Context::from([("user_id", "42")])),
    );

    let events = capture(|| log_failure(&err));

    assert_eq!(events.len(), 1);
    let fields = &events[0];
    assert_eq!(field(fields, "code"), Some("503"));
    assert_eq!(field(fields, "error_message"), Some("loading profile"));
    assert_eq!(field(fields, "cause"), Some("connection reset"));
    assert!(field(fields, "context").is_some_and(|c| c.contains("user_id")));
    assert!(field(fields, "call_stack").is_some_and(|s| !s.is_empty()));
    assert_eq!(field(fields, "message"), Some(err.to_string().as_str()));
}

#[test]
fn log_failure_on_foreign_error_leaves_code_empty() {
    let events = capture(|| log_failure(&io::Error::other("foreign only")));

    assert_eq!(events.len(), 1);
    assert_eq!(field(&events[0], "code"), Some(""));
    assert_eq!(field(&events[0], "cause"), Some("foreign only"));
}

#[test]
fn log_failure_over_absent_error() {
    let events = capture(|| log_failure(None::<&Failure>));

    assert!(events.is_empty());
}
