//! Repeated self-application of a unary function.

/// The number of applications used by [`twice`].
pub const DEFAULT_TIMES: usize = 2;

/// Returns a function that applies `function` to its own output `times` times.
///
/// `iterate(f, 3)(x)` is `f(f(f(x)))`. With `times == 0` the returned
/// function is the identity.
///
/// # Examples
///
/// ```
/// use hookwork::compose::iterate;
///
/// let octuple = iterate(|value: i32| value * 2, 3);
/// assert_eq!(octuple(1), 8);
///
/// let unchanged = iterate(|value: i32| value * 2, 0);
/// assert_eq!(unchanged(7), 7);
/// ```
pub fn iterate<T, F>(function: F, times: usize) -> impl Fn(T) -> T
where
    F: Fn(T) -> T,
{
    move |argument| (0..times).fold(argument, |result, _| function(result))
}

/// Applies `function` to its own output [`DEFAULT_TIMES`] times.
///
/// # Examples
///
/// ```
/// use hookwork::compose::twice;
///
/// let add_ten = twice(|value: i32| value + 5);
/// assert_eq!(add_ten(0), 10);
/// ```
pub fn twice<T, F>(function: F) -> impl Fn(T) -> T
where
    F: Fn(T) -> T,
{
    iterate(function, DEFAULT_TIMES)
}
