//! Unit tests for the composition and iteration combinators.
//!
//! Tests for `chain`, the `chain!` macro, `iterate` and `twice`.

#![cfg(feature = "compose")]

use hookwork::chain;
use hookwork::compose::{DEFAULT_TIMES, Hook, identity, iterate, twice};

fn add_one(value: i32) -> i32 {
    value + 1
}

fn double(value: i32) -> i32 {
    value * 2
}

fn subtract_three(value: i32) -> i32 {
    value - 3
}

// =============================================================================
// chain function tests
// =============================================================================

#[test]
fn test_chain_matches_nested_calls() {
    let chained = hookwork::compose::chain(add_one, double, [Hook::new(subtract_three)]);

    // subtract_three(5) = 2, double(2) = 4, add_one(4) = 5
    assert_eq!(chained.call(5), add_one(double(subtract_three(5))));
    assert_eq!(chained.call(5), 5);
}

#[test]
fn test_chain_middle_continues_towards_innermost() {
    let chained = hookwork::compose::chain(
        |text: String| format!("a({text})"),
        |text: String| format!("b({text})"),
        [
            Hook::new(|text: String| format!("c({text})")),
            Hook::new(|text: String| format!("d({text})")),
        ],
    );

    assert_eq!(chained.call("x".to_string()), "a(b(c(d(x))))");
}

#[test]
fn test_chain_with_identity_outer() {
    let chained = hookwork::compose::chain(identity, double, []);
    assert_eq!(chained.call(21), 42);
}

#[test]
fn test_chain_stages_in_execution_order() {
    let chained = hookwork::compose::chain(add_one, double, [Hook::new(subtract_three)]);
    let stages = chained.stages();

    assert_eq!(stages.len(), 3);
    assert_eq!(stages[0].apply(10), 7);
    assert_eq!(stages[1].apply(10), 20);
    assert_eq!(stages[2].apply(10), 11);
}

// =============================================================================
// chain! macro tests
// =============================================================================

#[test]
fn test_chain_macro_matches_nested_calls() {
    let chained = chain!(add_one, double, subtract_three);
    assert_eq!(chained(5), 5);
}

#[test]
fn test_chain_macro_changes_types() {
    let chained = chain!(
        |length: usize| length % 2 == 0,
        |text: String| text.len(),
        |value: i32| value.to_string()
    );

    assert!(chained(1234));
    assert!(!chained(123));
}

#[test]
fn test_chain_macro_trailing_comma() {
    let chained = chain!(add_one, double,);
    assert_eq!(chained(1), 3);
}

#[test]
fn test_chain_macro_and_function_agree() {
    let from_macro = chain!(add_one, double, subtract_three);
    let from_function = hookwork::compose::chain(add_one, double, [Hook::new(subtract_three)]);

    for value in -10..10 {
        assert_eq!(from_macro(value), from_function.call(value));
    }
}

// =============================================================================
// iterate tests
// =============================================================================

#[test]
fn test_iterate_three_times() {
    assert_eq!(iterate(double, 3)(1), 8);
}

#[test]
fn test_iterate_zero_times_is_identity() {
    assert_eq!(iterate(double, 0)(17), 17);
}

#[test]
fn test_iterate_once_is_the_function() {
    assert_eq!(iterate(add_one, 1)(41), 42);
}

#[test]
fn test_twice_applies_default_times() {
    assert_eq!(DEFAULT_TIMES, 2);
    assert_eq!(twice(double)(3), 12);
}

#[test]
fn test_iterate_inside_chain() {
    let chained = chain!(iterate(add_one, 3), twice(double));
    // twice(double)(1) = 4, add_one three times = 7
    assert_eq!(chained(1), 7);
}
