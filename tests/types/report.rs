use std::io;

use error_trail::{Context, Failure, IntCode, Mark, Marker, Report, StringCode};

#[derive(Debug)]
struct Audited;

impl Marker for Audited {}

fn sample() -> Failure {
    let root =
        Failure::wrap(io::Error::other("connection refused"), Context::from([("host", "db")]));
    Failure::translate(root, StringCode::new("Unavailable"), ("storage offline", Mark(Audited)))
}

#[test]
fn report_collects_accessor_values() {
    let report = Report::new(&sample());

    assert_eq!(report.code.as_deref(), Some("Unavailable"));
    assert_eq!(report.message.as_deref(), Some("storage offline"));
    assert_eq!(report.contexts, [Context::from([("host", "db")])]);
    assert_eq!(report.markers, ["Audited"]);
    assert_eq!(report.cause.as_deref(), Some("connection refused"));
    assert!(!report.call_stack.is_empty());
    assert!(!report.is_empty());
}

#[test]
fn report_from_failure_method() {
    let err = sample();

    assert_eq!(err.report(), Report::new(&err));
}

#[test]
fn report_over_absent_error_is_empty() {
    let report = Report::new(None::<&Failure>);

    assert!(report.is_empty());
    assert_eq!(report.to_string(), "Error\n");
}

#[test]
fn report_display_sections() {
    let report = Report {
        code: Some("404".into()),
        message: Some("user missing".into()),
        contexts: vec![Context::from([("id", "7")])],
        markers: vec!["Audited".into()],
        call_stack: vec![error_trail::Frame::new("src/users.rs", 12, "app::users::find")].into(),
        cause: Some("no rows".into()),
    };

    assert_eq!(
        report.to_string(),
        "Error: user missing (code: 404)\n\
         Cause: no rows\n\
         Context:\n  - id=7\n\
         Markers: Audited\n\
         CallStack:\n  [find] src/users.rs:12\n"
    );
}

#[test]
fn report_without_message_shows_code() {
    let report = Report::new(&Failure::new(IntCode::new(500), ()));

    assert!(report.to_string().starts_with("Error: (code: 500)\n"));
}
