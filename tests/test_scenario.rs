//! End-to-end tests for the call-after-delete fixture.

extern crate propdel;

use pretty_assertions::assert_eq;
use propdel::runner::ds::error::JErrorType;
use propdel::runner::ds::object::CallableLookup;
use propdel::runner::ds::object_property::PropertyKey;
use propdel::runner::ds::operations::object::has;
use propdel::runner::plugin::registry::BuiltInRegistry;
use propdel::runner::plugin::types::EvalContext;
use propdel::runner::scenario::{self, FUNC_KEY, GREETING};
use std::process::Command;
use std::rc::Rc;

// ============================================================================
// Library scenario
// ============================================================================

#[test]
fn test_run_emits_hello_once_then_fails() {
    let mut ctx = EvalContext::new_captured();

    let result = scenario::run(&mut ctx);

    assert_eq!(
        result,
        Err(JErrorType::MissingCallable {
            key: PropertyKey::from("func"),
            found: "undefined".to_string(),
        })
    );
    assert_eq!(ctx.captured_output(), &["Hello".to_string()]);
    assert!(ctx.captured_diagnostics().is_empty());
}

#[test]
fn test_new_record_holds_callable_func() {
    let registry = BuiltInRegistry::with_core();
    let record = scenario::new_record(&registry).unwrap();

    assert!(has(&record, &FUNC_KEY));
    assert!(matches!(
        record.borrow().lookup_callable(&FUNC_KEY),
        CallableLookup::Callable(_)
    ));
}

#[test]
fn test_new_record_without_console_fails() {
    let registry = BuiltInRegistry::new();

    let err = scenario::new_record(&registry).err().unwrap();

    assert!(err.is_missing_callable());
}

#[test]
fn test_inner_processing_mutates_callers_record() {
    let registry = BuiltInRegistry::with_core();
    let record = scenario::new_record(&registry).unwrap();

    let returned = scenario::inner_processing(record.clone());

    assert!(Rc::ptr_eq(&record, &returned));
    assert!(!has(&record, &FUNC_KEY));
}

#[test]
fn test_process_data_keeps_first_output_on_failure() {
    let registry = BuiltInRegistry::with_core();
    let record = scenario::new_record(&registry).unwrap();
    let mut ctx = EvalContext::new_captured();

    let err = scenario::process_data(&mut ctx, record.clone()).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Uncaught type error: func is not a function (found undefined)."
    );
    assert_eq!(ctx.captured_output(), &[GREETING.to_string()]);
    assert!(!has(&record, &FUNC_KEY));
}

#[test]
fn test_run_is_repeatable() {
    for _ in 0..2 {
        let mut ctx = EvalContext::new_captured();
        assert!(scenario::run(&mut ctx).unwrap_err().is_missing_callable());
        assert_eq!(ctx.captured_output().len(), 1);
    }
}

// ============================================================================
// Binary
// ============================================================================

#[test]
fn test_binary_prints_hello_then_exits_with_failure() {
    let output = Command::new(env!("CARGO_BIN_EXE_propdel"))
        .env_remove("RUST_LOG")
        .output()
        .expect("binary should start");

    assert_eq!(String::from_utf8_lossy(&output.stdout), "Hello\n");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("func is not a function"), "stderr was: {}", stderr);
}

#[test]
fn test_binary_logging_stays_off_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_propdel"))
        .env("RUST_LOG", "debug")
        .output()
        .expect("binary should start");

    assert_eq!(String::from_utf8_lossy(&output.stdout), "Hello\n");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("remove"), "stderr was: {}", stderr);
}
