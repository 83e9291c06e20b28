use error_trail::{CallStack, Context, Failure, Frame, IntCode, Report, StringCode};

#[test]
fn report_serializes_to_json() {
    let err = Failure::new(StringCode::new("NotFound"), ("missing", Context::from([("id", "42")])));
    let value = serde_json::to_value(err.report()).expect("serialize");

    assert_eq!(value["code"], "NotFound");
    assert_eq!(value["message"], "missing");
    assert_eq!(value["contexts"][0]["id"], "42");
    assert!(value["call_stack"].is_array());
    assert_eq!(value["cause"], "missing (code: NotFound)");
}

#[test]
fn call_stack_is_a_frame_array() {
    let stack = CallStack::from(vec![Frame::new("src/a.rs", 3, "app::a")]);
    let json = serde_json::to_string(&stack).expect("serialize");

    assert_eq!(json, r#"[{"path":"src/a.rs","line":3,"function":"app::a"}]"#);
    let back: CallStack = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, stack);
}

#[test]
fn shipped_codes_serialize_as_values() {
    assert_eq!(serde_json::to_string(&IntCode::new(7)).expect("serialize"), "7");
    assert_eq!(serde_json::to_string(&StringCode::new("E1")).expect("serialize"), r#""E1""#);
}
