use std::io;

use error_trail::{
    cause_of, code_as, debugs_of, is, message_of, Context, Failure, IntCode, ResultExt,
};

fn read_settings() -> Result<String, io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "settings.toml"))
}

#[test]
fn test_wrap_on_err() {
    let err = read_settings().wrap("loading settings").unwrap_err();

    assert_eq!(message_of(&err), Some("loading settings"));
    assert!(err.code().is_none());
    let cause = cause_of(&err).and_then(|c| c.downcast_ref::<io::Error>());
    assert_eq!(cause.map(io::Error::kind), Some(io::ErrorKind::NotFound));
}

#[test]
fn test_wrap_on_ok() {
    let result: Result<i32, &str> = Ok(42);
    assert_eq!(result.wrap("should not appear").ok(), Some(42));
}

#[test]
fn test_translate_on_err() {
    let result: Result<(), &str> = Err("original");
    let err = result
        .translate(IntCode::new(400), ("bad request", Context::from([("field", "email")])))
        .unwrap_err();

    assert_eq!(code_as::<IntCode>(&err), Some(&IntCode::new(400)));
    assert_eq!(debugs_of(&err)[0].get("field"), Some("email"));
    assert_eq!(cause_of(&err).map(|c| c.to_string()).as_deref(), Some("original"));
}

#[test]
fn test_translate_on_ok() {
    let result: Result<&str, io::Error> = Ok("fine");
    assert_eq!(result.translate(IntCode::new(500), ()).ok(), Some("fine"));
}

#[test]
fn test_wrap_keeps_inner_failure_code() {
    let result: Result<(), Failure> = Err(Failure::new(IntCode::new(404), ()));
    let err = result.wrap("fetching user").unwrap_err();

    assert!(is(&err, &IntCode::new(404)));
    assert_eq!(code_as::<IntCode>(&err), Some(&IntCode::new(404)));
}

#[test]
fn test_wrap_captures_calling_function() {
    let err = read_settings().wrap(()).unwrap_err();

    let head = err.call_stack().head_frame().expect("frame");
    assert_eq!(head.func(), "test_wrap_captures_calling_function");
}

#[test]
fn test_question_mark_propagation() {
    fn load() -> Result<String, Failure> {
        let raw = read_settings().translate(IntCode::new(503), "settings unavailable")?;
        Ok(raw)
    }

    let err = load().unwrap_err();
    assert_eq!(err.error_chain(), "settings unavailable (code: 503) -> settings.toml");
}
