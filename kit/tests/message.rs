//! Integration tests for the loop promise rejection message.
#![cfg(feature = "std")]

use std::fmt;

use loopdiag::{
    DebugText, ErrorChain, FormatConfig, LoopPromiseCaughtError, LoopPromiseError,
    MUST_NOT_THROW, OrUndefined, Undefined, loop_promise_caught_error,
};
use thiserror::Error;

#[derive(Error, Debug)]
enum FetchError {
    #[error("request failed")]
    Request(#[source] TransportError),
}

#[derive(Error, Debug)]
enum TransportError {
    #[error("connection reset")]
    Reset(#[source] std::io::Error),
}

fn fetch_error() -> FetchError {
    FetchError::Request(TransportError::Reset(std::io::Error::new(
        std::io::ErrorKind::BrokenPipe,
        "broken pipe",
    )))
}

#[derive(Debug)]
struct Symbol(&'static str);

#[derive(Debug, Clone, Copy)]
enum CounterAction {
    Increment,
    Reset,
}

impl fmt::Display for CounterAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CounterAction::Increment => f.write_str("counter/increment"),
            CounterAction::Reset => f.write_str("counter/reset"),
        }
    }
}

/// Display impl that always reports failure.
struct Broken;

impl fmt::Display for Broken {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        Err(fmt::Error)
    }
}

/// Display impl that panics partway through writing.
struct Exploding;

impl fmt::Display for Exploding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("partial")?;
        panic!("exploding display")
    }
}

#[test]
fn test_increment_with_io_error() {
    let err = std::io::Error::other("boom");
    let message = loop_promise_caught_error("INCREMENT", &err);
    assert!(message.contains("action of type INCREMENT"));
    assert!(message.contains("boom"));
}

#[test]
fn test_symbol_with_plain_string() {
    let message = loop_promise_caught_error(&DebugText(Symbol("X")), "plain string error");
    assert!(message.contains(r#"Symbol("X")"#));
    assert!(message.contains("plain string error"));
}

#[test]
fn test_undefined_both() {
    let message = loop_promise_caught_error(&Undefined, &Undefined);
    assert!(message.contains("action of type undefined"));

    let label = message
        .find("Thrown exception:")
        .expect("label present");
    assert!(message[label..].contains("undefined"));
}

#[test]
fn test_missing_values_through_option() {
    let action: Option<&str> = None;
    let error: Option<std::io::Error> = None;
    let message = loop_promise_caught_error(&OrUndefined(action), &OrUndefined(error));
    assert!(message.contains("action of type undefined."));
    assert!(message.ends_with("Thrown exception: \nundefined\n"));
}

#[test]
fn test_exact_message() {
    let message = loop_promise_caught_error(&CounterAction::Increment, "boom");
    assert_eq!(
        message,
        "\nloop Promise caught when returned from action of type counter/increment.\n\
         loop Promises must not throw!\n\
         \n\
         Thrown exception: \n\
         boom\n"
    );
}

#[test_case::test_case("INCREMENT"; "screaming case")]
#[test_case::test_case("todos/add"; "slash namespaced")]
#[test_case::test_case(""; "empty label")]
#[test_case::test_case("multi\nline"; "embedded newline")]
#[test_case::test_case("ünïcødé ✓"; "unicode")]
fn test_label_is_embedded(label: &str) {
    let message = loop_promise_caught_error(label, "err");
    assert!(message.contains(&format!("action of type {label}.")));
    assert!(message.contains(MUST_NOT_THROW));
}

#[test]
fn test_assorted_error_values() {
    assert!(loop_promise_caught_error("A", &0).contains("\n0\n"));
    assert!(loop_promise_caught_error("A", &-1.5).contains("\n-1.5\n"));
    assert!(loop_promise_caught_error("A", &true).contains("\ntrue\n"));
    assert!(loop_promise_caught_error("A", "").ends_with("Thrown exception: \n\n"));
    assert!(loop_promise_caught_error("A", &DebugText(())).contains("\n()\n"));
}

#[test]
fn test_must_not_throw_always_present() {
    let messages = [
        loop_promise_caught_error("A", "b"),
        loop_promise_caught_error(&Undefined, &Broken),
        loop_promise_caught_error(&Broken, &Exploding),
        loop_promise_caught_error(&CounterAction::Reset, &fetch_error()),
    ];
    for message in &messages {
        assert!(message.contains("\nloop Promises must not throw!\n"));
    }
}

#[test]
fn test_broken_display_never_fails() {
    let message = loop_promise_caught_error(&Broken, &Broken);
    assert!(message.contains("action of type <unprintable>."));
    assert!(message.contains("Thrown exception: \n<unprintable>\n"));
}

#[test]
fn test_panicking_display_never_fails() {
    let message = loop_promise_caught_error("SAVE", &Exploding);
    assert!(message.contains("Thrown exception: \n<unprintable>\n"));
    assert!(!message.contains("partial"));
}

#[test]
fn test_custom_placeholder() {
    let config = FormatConfig::new().with_placeholder("[unrenderable]");
    let message = LoopPromiseCaughtError::new("SAVE", &Broken)
        .with_config(config)
        .render();
    assert!(message.contains("\n[unrenderable]\n"));
}

#[test]
fn test_idempotent() {
    let err = fetch_error();
    let diagnostic = LoopPromiseCaughtError::new(&CounterAction::Reset, &err);
    assert_eq!(diagnostic.render(), diagnostic.render());
    assert_eq!(
        loop_promise_caught_error("X", &err),
        loop_promise_caught_error("X", &err)
    );
}

#[test]
fn test_error_chain_snapshot() {
    let err = fetch_error();
    insta::assert_snapshot!(ErrorChain::new(&err).to_string(), @r"
request failed

Caused by:
    0: connection reset
    1: broken pipe
");
}

#[test]
fn test_error_chain_in_message() {
    let err = fetch_error();
    let message = loop_promise_caught_error("FETCH", &ErrorChain::new(&err));
    assert!(message.ends_with(
        "Thrown exception: \nrequest failed\n\nCaused by:\n    0: connection reset\n    1: broken pipe\n"
    ));
}

#[test]
fn test_owned_error_propagates() {
    #[derive(Error, Debug)]
    enum DispatchError {
        #[error(transparent)]
        LoopRejected(#[from] LoopPromiseError),
    }

    fn dispatch() -> Result<(), DispatchError> {
        Err(LoopPromiseError::new(&CounterAction::Increment, "boom"))?;
        Ok(())
    }

    let err = dispatch().unwrap_err();
    assert_eq!(
        err.to_string(),
        loop_promise_caught_error(&CounterAction::Increment, "boom")
    );
}

#[test]
fn test_concurrent_callers() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || loop_promise_caught_error(&format!("ACTION_{i}"), &i))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let message = handle.join().expect("thread panicked");
        assert!(message.contains(&format!("action of type ACTION_{i}.")));
        assert!(message.ends_with(&format!("\n{i}\n")));
    }
}
