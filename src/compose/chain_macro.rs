//! The `chain!` macro for statically typed composition.
//!
//! This module provides the [`chain!`] macro which composes functions written
//! outer-first, the way the calls would be nested by hand.

/// Chains functions written outer-first.
///
/// `chain!(a, b, c)(x)` is equivalent to `a(b(c(x)))`: the last function
/// receives the original input and each function to its left receives the
/// previous result.
///
/// Unlike [`chain`](crate::compose::chain), every stage may change the value's
/// type, and the stages are plain closures with no reference counting.
///
/// # Syntax
///
/// - `chain!(f, g)` - Returns `|x| f(g(x))`
/// - `chain!(f, g, h)` - Returns `|x| f(g(h(x)))`
/// - `chain!(f, g, h, ...)` - Chains any number of functions (at least two)
///
/// # Examples
///
/// ## Basic chaining
///
/// ```
/// use hookwork::chain;
///
/// let add_one = |value: i32| value + 1;
/// let double = |value: i32| value * 2;
/// let subtract_three = |value: i32| value - 3;
///
/// let chained = chain!(add_one, double, subtract_three);
/// assert_eq!(chained(5), 5);
/// ```
///
/// ## Type conversion
///
/// ```
/// use hookwork::chain;
///
/// fn to_string(value: i32) -> String { value.to_string() }
/// fn length(text: String) -> usize { text.len() }
///
/// let digits = chain!(length, to_string);
/// assert_eq!(digits(12345), 5);
/// ```
///
/// ## Over a hooked callable
///
/// ```
/// use hookwork::chain;
/// use hookwork::hook::{Arguments, Callable, HookSpec, Signature, bind_named_hooks, describe};
///
/// let sum = describe(Signature::new(["a", "b"]), |arguments: Arguments<i32>| {
///     arguments.positional().iter().sum::<i32>()
/// });
/// let hooked = bind_named_hooks(sum, HookSpec::new().name("a", |v: i32| v * 10)).unwrap();
///
/// let report = chain!(|total: i32| format!("total={total}"), hooked.into_fn());
/// assert_eq!(report(Arguments::from_positional([1, 2])), "total=12");
/// ```
#[macro_export]
macro_rules! chain {
    // Innermost stage: receives the original input
    (@nested $function:expr $(,)?) => {
        $function
    };

    // chain!(@nested f, g, ...) = |x| f(chain!(@nested g, ...)(x))
    (@nested $outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner = $crate::chain!(@nested $($remaining_functions),+);
        move |input| outer(inner(input))
    }};

    // At least an outer and an inner function are required
    ($outer_function:expr, $inner_function:expr $(, $middle_functions:expr)* $(,)?) => {
        $crate::chain!(@nested $outer_function, $inner_function $(, $middle_functions)*)
    };
}
