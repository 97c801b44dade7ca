//! Integration tests for sharing wrapped callables across threads.
//!
//! Wrapped callables hold no per-call state, so one instance can be invoked
//! concurrently from several threads.

#![cfg(feature = "hook")]

use std::sync::Arc;
use std::thread;

use hookwork::compose::{Hook, chain};
use hookwork::hook::{
    Arguments, Callable, HookSpec, Signature, bind_named_hooks, bind_positional_hooks, describe,
    opaque,
};
use rstest::rstest;

#[rstest]
fn test_named_hooks_across_threads() {
    let target = describe(Signature::new(["a", "b"]), |arguments: Arguments<i64>| {
        arguments.positional().iter().sum::<i64>() + arguments.keywords().map(|(_, value)| *value).sum::<i64>()
    });
    let hooked = Arc::new(
        bind_named_hooks(target, HookSpec::new().names(|value: i64| value * 10, ["a", "b"])).unwrap(),
    );

    let handles: Vec<_> = (0..8_i64)
        .map(|index| {
            let hooked = Arc::clone(&hooked);
            thread::spawn(move || {
                hooked.call(Arguments::from_positional([index]).with_keyword("b", 1))
            })
        })
        .collect();

    let results: Vec<i64> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(results, (0..8).map(|index| index * 10 + 10).collect::<Vec<_>>());
}

#[rstest]
fn test_positional_hooks_across_threads() {
    let target = opaque(|arguments: Arguments<i32>| arguments.positional().to_vec());
    let hooked = Arc::new(bind_positional_hooks(
        target,
        [Some(Hook::new(|value: i32| value + 1))],
        Some(Hook::new(|value: i32| value - 1)),
    ));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let hooked = Arc::clone(&hooked);
            thread::spawn(move || hooked.call(Arguments::from_positional([0, 0, 0])))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec![1, -1, -1]);
    }
}

#[rstest]
fn test_chain_across_threads() {
    let chained = Arc::new(chain(|value: u64| value + 1, |value: u64| value * 2, []));

    let handles: Vec<_> = (0..4_u64)
        .map(|index| {
            let chained = Arc::clone(&chained);
            thread::spawn(move || chained.call(index))
        })
        .collect();

    let results: Vec<u64> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(results, vec![1, 3, 5, 7]);
}
