use error_trail::{
    bail, code_as, context, debugs_of, failure, message, message_of, Context, Failure, IntCode,
    StringCode,
};

#[test]
fn message_macro_formats_arguments() {
    let attempt = 3;
    let msg = message!("retry {} of {}", attempt, 5);

    assert_eq!(msg.as_str(), "retry 3 of 5");
}

#[test]
fn message_macro_supports_inline_captures() {
    let host = "db-1";
    let msg = message!("connecting to {host}");

    assert_eq!(msg.to_string(), "connecting to db-1");
}

#[test]
fn context_macro_builds_debug_bag() {
    let ctx = context! { "user_id" => 42, "region" => "eu-west-1", };

    assert_eq!(ctx.len(), 2);
    assert_eq!(ctx.get("user_id"), Some("42"));
    assert_eq!(ctx.get("region"), Some("eu-west-1"));
}

#[test]
fn context_macro_empty_form() {
    let ctx: Context = context! {};

    assert!(ctx.is_empty());
}

#[test]
fn context_macro_later_keys_overwrite() {
    let ctx = context! { "attempt" => 1, "attempt" => 2 };

    assert_eq!(ctx.len(), 1);
    assert_eq!(ctx.get("attempt"), Some("2"));
}

#[test]
fn failure_macro_without_message() {
    let err = failure!(IntCode::new(500));

    assert_eq!(code_as::<IntCode>(&err), Some(&IntCode::new(500)));
    assert_eq!(message_of(&err), None);
}

#[test]
fn failure_macro_with_formatted_message() {
    let err = failure!(StringCode::new("Timeout"), "no reply within {}ms", 250);

    assert_eq!(message_of(&err), Some("no reply within 250ms"));
}

#[test]
fn failure_macro_stack_starts_at_invocation() {
    let err = failure!(IntCode::new(1));

    let head = err.call_stack().head_frame().expect("frame");
    assert_eq!(head.func(), "failure_macro_stack_starts_at_invocation");
}

#[test]
fn decoration_macros_compose_in_tuples() {
    let id = 7;
    let err = Failure::new(
        IntCode::new(404),
        (message!("order {id} missing"), context! { "order_id" => id }),
    );

    assert_eq!(message_of(&err), Some("order 7 missing"));
    assert_eq!(debugs_of(&err)[0].get("order_id"), Some("7"));
}

#[derive(Debug)]
struct AppError(Failure);

impl From<Failure> for AppError {
    fn from(err: Failure) -> Self {
        AppError(err)
    }
}

fn check_quota(used: u32) -> Result<u32, AppError> {
    if used > 10 {
        bail!(StringCode::new("QuotaExceeded"), "used {} of 10", used);
    }
    Ok(10 - used)
}

fn check_plain(flag: bool) -> Result<(), Failure> {
    if flag {
        bail!(IntCode::new(409));
    }
    Ok(())
}

#[test]
fn bail_returns_early_and_converts() {
    assert_eq!(check_quota(4).ok(), Some(6));

    let AppError(err) = check_quota(12).unwrap_err();
    assert_eq!(message_of(&err), Some("used 12 of 10"));
    assert_eq!(code_as::<StringCode>(&err).map(StringCode::as_str), Some("QuotaExceeded"));
}

#[test]
fn bail_without_message() {
    assert!(check_plain(false).is_ok());

    let err = check_plain(true).unwrap_err();
    assert_eq!(code_as::<IntCode>(&err), Some(&IntCode::new(409)));
    assert_eq!(err.call_stack().head_frame().map(|f| f.func()), Some("check_plain"));
}
