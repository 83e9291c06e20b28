use std::error::Error;
use std::io;
use std::thread;

use error_trail::{code_as, Context, Failure, IntCode, Message, StringCode, Temporary};

const NOT_FOUND: StringCode = StringCode::new("NotFound");

#[inline(never)]
fn repository_lookup() -> Failure {
    Failure::new(NOT_FOUND, "row missing")
}

#[test]
fn new_sets_code_and_no_inner() {
    let err = Failure::new(NOT_FOUND, ());

    assert_eq!(err.code().and_then(|c| c.downcast_ref::<StringCode>()), Some(&NOT_FOUND));
    assert!(err.inner().is_none());
    assert!(err.source().is_none());
}

#[test]
fn new_captures_its_caller() {
    let err = repository_lookup();

    let names: Vec<&str> = err.call_stack().iter().map(|f| f.func()).collect();
    assert_eq!(names[0], "repository_lookup");
    assert_eq!(names[1], "new_captures_its_caller");
}

#[test]
fn wrap_inherits_classification() {
    let err = Failure::wrap(repository_lookup(), "loading order");

    assert!(err.code().is_none());
    assert_eq!(code_as::<StringCode>(&err), Some(&NOT_FOUND));
    assert_eq!(err.message(), Some("loading order"));
}

#[test]
fn wrap_captures_a_fresh_stack() {
    let err = Failure::wrap(repository_lookup(), ());

    let head = err.call_stack().head_frame().expect("frame");
    assert_eq!(head.func(), "wrap_captures_a_fresh_stack");
}

#[test]
fn translate_sets_new_code_on_outer_node_only() {
    let err = Failure::translate(repository_lookup(), IntCode::new(404), ());

    assert_eq!(code_as::<IntCode>(&err), Some(&IntCode::new(404)));
    let inner = err.inner().and_then(|e| e.downcast_ref::<Failure>()).expect("inner failure");
    assert_eq!(code_as::<StringCode>(inner), Some(&NOT_FOUND));
}

#[test]
fn source_exposes_inner_error() {
    let err = Failure::wrap(io::Error::other("disk"), ());

    let source = err.source().expect("source");
    assert!(source.is::<io::Error>());
}

#[test]
fn into_inner_returns_wrapped_error() {
    let err = Failure::wrap(io::Error::other("disk"), ());

    let inner = err.into_inner().expect("inner");
    assert_eq!(inner.to_string(), "disk");
    assert!(Failure::new(NOT_FOUND, ()).into_inner().is_none());
}

#[test]
fn wrap_opt_present_and_absent() {
    let err = Failure::wrap_opt(Some(io::Error::other("x")), Message::new("m")).expect("present");
    assert_eq!(err.message(), Some("m"));
    assert!(Failure::wrap_opt(None::<io::Error>, ()).is_none());
}

#[test]
fn wrap_accepts_strings_as_errors() {
    let err = Failure::wrap("plain text cause", ());

    assert_eq!(err.inner().map(|e| e.to_string()).as_deref(), Some("plain text cause"));
}

#[test]
fn decorations_are_stored_on_node() {
    let err = Failure::new(
        NOT_FOUND,
        ("missing", Context::from([("id", "1")]), Temporary::new()),
    );

    assert_eq!(err.message(), Some("missing"));
    assert_eq!(err.contexts().len(), 1);
    assert_eq!(err.markers().count(), 1);
}

#[test]
fn failures_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<Failure>();

    let err = Failure::wrap(repository_lookup(), "crossing threads");
    let handle = thread::spawn(move || code_as::<StringCode>(&err).cloned());
    assert_eq!(handle.join().ok().flatten(), Some(NOT_FOUND));
}

#[test]
fn concurrent_construction() {
    let handles: Vec<_> = (0..8)
        .map(|i| thread::spawn(move || Failure::new(IntCode::new(i), ())))
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let err = handle.join().expect("thread");
        assert_eq!(code_as::<IntCode>(&err), Some(&IntCode::new(i as i64)));
        assert!(!err.call_stack().is_empty());
    }
}

#[test]
fn debug_lists_node_fields() {
    let rendered = format!("{:?}", Failure::new(NOT_FOUND, "missing"));

    assert!(rendered.starts_with("Failure {"));
    assert!(rendered.contains("message: Some(\"missing\")"));
}
