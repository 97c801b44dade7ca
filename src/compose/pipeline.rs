//! Runtime composition of unary functions.
//!
//! [`chain`] takes its functions in the order they are written when the calls
//! are nested by hand (`a(b(c(x)))` is `chain(a, b, [c])`), and stores them in
//! execution order, innermost first.

use super::Hook;

/// A composition pipeline of unary functions.
///
/// Stages are stored innermost first. [`Chain::call`] feeds its input to the
/// first stage and every later stage receives exactly one value: the result
/// of the stage before it. The pipeline is immutable once built and can be
/// shared across threads.
///
/// # Examples
///
/// ```
/// use hookwork::compose::{Hook, chain};
///
/// let add_one = |value: i32| value + 1;
/// let double = |value: i32| value * 2;
/// let subtract_three = Hook::new(|value: i32| value - 3);
///
/// let chained = chain(add_one, double, [subtract_three]);
///
/// // add_one(double(subtract_three(5))) = add_one(double(2)) = add_one(4) = 5
/// assert_eq!(chained.call(5), 5);
/// assert_eq!(chained.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Chain<T> {
    stages: Vec<Hook<T>>,
}

impl<T> Chain<T> {
    /// Applies every stage, innermost first, and returns the outermost result.
    pub fn call(&self, input: T) -> T {
        tracing::trace!(stages = self.stages.len(), "invoking chain");
        self.stages
            .iter()
            .fold(input, |result, stage| stage.apply(result))
    }

    /// Returns the number of stages.
    #[inline]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Always `false`: a chain has at least an outer and an inner stage.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Returns the stages in execution order (innermost first).
    #[inline]
    pub fn stages(&self) -> &[Hook<T>] {
        &self.stages
    }

    /// Converts the chain into a plain closure.
    pub fn into_fn(self) -> impl Fn(T) -> T {
        move |input| self.call(input)
    }
}

/// Chains functions so that `chain(a, b, [c]).call(x) == a(b(c(x)))`.
///
/// The arguments are written outer-first, matching nested call notation:
/// `outer` is applied last, `inner` next to last, and `middle` continues
/// towards the innermost function. At construction the order is reversed
/// into execution order, so the last element of `middle` (or `inner` when
/// `middle` is empty) receives the original input.
///
/// For stages that change the value's type, use the [`chain!`](crate::chain)
/// macro instead.
///
/// # Examples
///
/// ```
/// use hookwork::compose::{Hook, chain};
///
/// let describe = chain(
///     |text: String| format!("<{text}>"),
///     |text: String| text.to_uppercase(),
///     [Hook::new(|text: String| text.trim().to_string())],
/// );
///
/// assert_eq!(describe.call("  hook  ".to_string()), "<HOOK>");
/// ```
pub fn chain<T, O, N, M>(outer: O, inner: N, middle: M) -> Chain<T>
where
    O: Fn(T) -> T + Send + Sync + 'static,
    N: Fn(T) -> T + Send + Sync + 'static,
    M: IntoIterator<Item = Hook<T>>,
{
    let mut stages: Vec<Hook<T>> = middle.into_iter().collect();
    stages.reverse();
    stages.push(Hook::new(inner));
    stages.push(Hook::new(outer));
    Chain { stages }
}

static_assertions::assert_impl_all!(Chain<i32>: Send, Sync, Clone);
