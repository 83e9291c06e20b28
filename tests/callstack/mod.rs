use error_trail::callstack::{callers, MAX_DEPTH};
use error_trail::{CallStack, Frame};


#[inline(never)]
fn capture_here() -> CallStack {
    callers(0)
}

#[inline(never)]
fn capture_skipping_self() -> CallStack {
    callers(1)
}

#[inline(never)]
fn nested(depth: usize) -> CallStack {
    if depth == 0 {
        return callers(0);
    }
    // keep the recursion out of tail position
    std::hint::black_box(nested(depth - 1))
}

#[test]
fn callers_starts_at_the_calling_function() {
    let stack = capture_here();

    let head = stack.head_frame().expect("stack should not be empty");
    assert_eq!(head.func(), "capture_here");
    assert!(head.path().ends_with("mod.rs"));
    assert!(head.line() > 0);
}

#[test]
fn callers_skip_drops_additional_frames() {
    let stack = capture_skipping_self();

    let head = stack.head_frame().expect("stack should not be empty");
    assert_eq!(head.func(), "callers_skip_drops_additional_frames");
}

#[test]
fn callers_orders_frames_outward() {
    let stack = capture_here();
    let names: Vec<&str> = stack.iter().map(Frame::func).collect();

    assert_eq!(names[0], "capture_here");
    assert_eq!(names[1], "callers_orders_frames_outward");
}

#[test]
fn callers_is_bounded() {
    let stack = nested(MAX_DEPTH * 2);

    assert_eq!(stack.len(), MAX_DEPTH);
    assert!(stack.iter().all(|f| f.func() == "nested"));
}

#[test]
fn callers_with_huge_skip_yields_empty_stack() {
    let stack = callers(10_000);

    assert!(stack.is_empty());
    assert_eq!(stack.head_frame(), None);
    assert_eq!(stack.to_string(), "");
}

#[test]
fn empty_stack_is_default() {
    assert_eq!(CallStack::default(), CallStack::from(Vec::new()));
    assert!(CallStack::default().is_empty());
}

#[test]
fn display_joins_bare_function_names() {
    let stack = CallStack::from(vec![
        Frame::new("/srv/app/src/store.rs", 42, "app::store::Store::load"),
        Frame::new("/srv/app/src/handler.rs", 17, "app::handler::get_user"),
        Frame::new("/srv/app/src/main.rs", 3, "app::main"),
    ]);

    assert_eq!(stack.to_string(), "load: get_user: main");
}

#[test]
fn alternate_display_writes_one_frame_per_line() {
    let stack = CallStack::from(vec![
        Frame::new("/srv/app/src/store.rs", 42, "app::store::Store::load"),
        Frame::new("/srv/app/src/main.rs", 3, "app::main"),
    ]);

    assert_eq!(
        format!("{:#}", stack),
        "[load] /srv/app/src/store.rs:42\n[main] /srv/app/src/main.rs:3\n"
    );
}

#[test]
fn concat_preserves_order() {
    let outer = CallStack::from(vec![Frame::new("a.rs", 1, "app::a")]);
    let inner =
        CallStack::from(vec![Frame::new("b.rs", 2, "app::b"), Frame::new("c.rs", 3, "app::c")]);

    let joined = CallStack::concat([&outer, &inner]);
    let names: Vec<&str> = joined.iter().map(Frame::func).collect();
    assert_eq!(names, ["a", "b", "c"]);
}

#[test]
fn from_addresses_resolves_foreign_instruction_pointers() {
    let mut addresses = Vec::new();
    backtrace::trace(|frame| {
        addresses.push(frame.ip() as usize);
        true
    });

    let stack = CallStack::from_addresses(&addresses);

    assert!(!stack.is_empty());
    assert!(stack
        .iter()
        .any(|f| f.func() == "from_addresses_resolves_foreign_instruction_pointers"));
}

#[test]
fn from_addresses_skips_unresolvable_entries() {
    let stack = CallStack::from_addresses(&[0]);

    assert!(stack.is_empty());
}

#[test]
fn from_backtrace_normalizes_resolved_trace() {
    let trace = backtrace::Backtrace::new();
    let stack = CallStack::from(&trace);

    assert!(stack.iter().any(|f| f.func() == "from_backtrace_normalizes_resolved_trace"));
}

#[test]
fn from_backtrace_resolves_unresolved_trace() {
    let trace = backtrace::Backtrace::new_unresolved();
    let stack = CallStack::from(&trace);

    assert!(stack.iter().any(|f| f.func() == "from_backtrace_resolves_unresolved_trace"));
}
