//! Tests for the `#[hookable]` attribute.
//!
//! The attribute records a function's parameter names at compile time and
//! generates a `{name}_callable()` sibling returning a described callable.

#![cfg(feature = "derive")]

use hookwork::hook::{ArgumentError, Arguments, Callable, HookSpec, Signature, bind_named_hooks};
use hookwork::{chain, hookable};
use rstest::rstest;

// =============================================================================
// Annotated functions
// =============================================================================

#[hookable]
fn volume(width: i64, height: i64, depth: i64) -> i64 {
    width * height * depth
}

#[hookable]
pub fn greet(greeting: String, name: String) -> String {
    format!("{greeting}, {name}!")
}

#[hookable]
fn shout(mut text: String) -> String {
    text.push('!');
    text
}

#[hookable]
fn r#type(r#kind: u8) -> u8 {
    r#kind
}

mod nested {
    use hookwork::hookable;

    #[hookable]
    pub fn difference(minuend: i32, subtrahend: i32) -> i32 {
        minuend - subtrahend
    }
}

// =============================================================================
// Generated signature
// =============================================================================

#[test]
fn test_signature_lists_parameters_in_order() {
    let callable = volume_callable();
    assert_eq!(
        callable.signature(),
        Some(&Signature::new(["width", "height", "depth"]))
    );
}

#[test]
fn test_raw_identifiers_are_unraw_in_signature() {
    let callable = type_callable();
    assert_eq!(callable.signature(), Some(&Signature::new(["kind"])));
    assert_eq!(callable.call(Arguments::new().with_keyword("kind", 7)), Ok(7));
}

#[test]
fn test_original_function_is_kept() {
    assert_eq!(volume(2, 3, 4), 24);
    assert_eq!(shout("hey".to_string()), "hey!");
    assert_eq!(nested::difference(5, 2), 3);
}

#[test]
fn test_mutable_parameter_binding() {
    let callable = shout_callable();
    assert_eq!(
        callable.call(Arguments::new().with_keyword("text", "hooks".to_string())),
        Ok("hooks!".to_string())
    );
}

// =============================================================================
// Generated callable
// =============================================================================

#[rstest]
#[case(Arguments::from_positional([2, 3, 4]), Ok(24))]
#[case(Arguments::from_parts([2], [("depth", 4), ("height", 3)]), Ok(24))]
#[case(
    Arguments::from_positional([2, 3]),
    Err(ArgumentError::MissingArgument { name: "depth".to_string() })
)]
#[case(
    Arguments::from_parts([2, 3, 4], [("width", 1)]),
    Err(ArgumentError::MultipleValues { name: "width".to_string() })
)]
#[case(
    Arguments::from_parts([2, 3, 4], [("color", 1)]),
    Err(ArgumentError::UnexpectedKeyword { name: "color".to_string() })
)]
fn test_volume_callable(
    #[case] arguments: Arguments<i64>,
    #[case] expected: Result<i64, ArgumentError>,
) {
    assert_eq!(volume_callable().call(arguments), expected);
}

#[test]
fn test_callable_with_owned_strings() {
    let arguments = Arguments::new()
        .with_keyword("name", "hooks".to_string())
        .with_keyword("greeting", "Hello".to_string());
    assert_eq!(greet_callable().call(arguments), Ok("Hello, hooks!".to_string()));
}

#[test]
fn test_callable_in_nested_module() {
    let callable = nested::difference_callable();
    assert_eq!(
        callable.call(Arguments::new().with_keyword("subtrahend", 2).with_keyword("minuend", 10)),
        Ok(8)
    );
}

// =============================================================================
// With hooks
// =============================================================================

#[test]
fn test_named_hooks_on_generated_callable() {
    let clamped = bind_named_hooks(
        volume_callable(),
        HookSpec::new().names(|value: i64| value.max(1), ["width", "height", "depth"]),
    )
    .unwrap();

    let arguments = Arguments::from_positional([0, 3]).with_keyword("depth", -5);
    assert_eq!(clamped.call(arguments), Ok(3));
}

#[test]
fn test_generated_callable_in_chain() {
    let hooked = bind_named_hooks(
        greet_callable(),
        HookSpec::new().name("name", |name: String| name.to_uppercase()),
    )
    .unwrap();

    let banner = chain!(
        |greeting: Result<String, ArgumentError>| greeting.map(|text| format!("** {text} **")),
        hooked.into_fn()
    );

    assert_eq!(
        banner(Arguments::from_positional(["Hi".to_string(), "rust".to_string()])),
        Ok("** Hi, RUST! **".to_string())
    );
}

#[test]
fn test_generated_callable_is_clone_and_thread_safe() {
    fn assert_traits<C: Clone + Send + Sync + 'static>(_: &C) {}
    let callable = volume_callable();
    assert_traits(&callable);
}
