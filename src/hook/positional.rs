//! Hooks applied to positional arguments by index.

use std::fmt;

use super::{Arguments, Callable, Signature};
use crate::compose::{Hook, map_indexed};

/// A target whose positional arguments are hooked by index.
///
/// Created by [`bind_positional_hooks`]. Keyword arguments are not touched.
pub struct PositionalHooks<C, T> {
    target: C,
    hooks: Vec<Option<Hook<T>>>,
    fallback: Option<Hook<T>>,
}

impl<C, T> fmt::Debug for PositionalHooks<C, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("PositionalHooks")
            .field("hooks", &self.hooks)
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}

impl<C: Clone, T> Clone for PositionalHooks<C, T> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
            hooks: self.hooks.clone(),
            fallback: self.fallback.clone(),
        }
    }
}

impl<C, T> PositionalHooks<C, T> {
    /// Returns the wrapped target.
    #[inline]
    pub const fn target(&self) -> &C {
        &self.target
    }

    /// Returns the wrapped target, discarding the hooks.
    pub fn into_target(self) -> C {
        self.target
    }
}

impl<C, T> Callable<T> for PositionalHooks<C, T>
where
    C: Callable<T>,
{
    type Output = C::Output;

    fn call(&self, arguments: Arguments<T>) -> Self::Output {
        let (positional, keyword) = arguments.into_parts();
        tracing::trace!(positional = positional.len(), "invoking positional hooks");
        let positional = map_indexed(&self.hooks, positional, self.fallback.as_ref());
        self.target.call(Arguments::from_parts(positional, keyword))
    }

    fn signature(&self) -> Option<&Signature> {
        self.target.signature()
    }
}

/// Wraps `target` so that positional argument `i` passes through `hooks[i]`.
///
/// Positions beyond `hooks` pass through `fallback` when it is given, and
/// unchanged otherwise; a `None` entry inside `hooks` leaves its argument
/// unchanged. The target needs no signature and nothing is validated at
/// construction.
///
/// # Examples
///
/// ```rust
/// use hookwork::compose::Hook;
/// use hookwork::hook::{Arguments, Callable, bind_positional_hooks, opaque};
///
/// let target = opaque(|arguments: Arguments<i32>| arguments.positional().to_vec());
/// let hooked = bind_positional_hooks(
///     target,
///     vec![Some(Hook::new(|value: i32| value + 1))],
///     Some(Hook::new(|value: i32| value * 0)),
/// );
///
/// assert_eq!(hooked.call(Arguments::from_positional([1, 2, 3])), vec![2, 0, 0]);
/// ```
pub fn bind_positional_hooks<C, T, I>(
    target: C,
    hooks: I,
    fallback: Option<Hook<T>>,
) -> PositionalHooks<C, T>
where
    C: Callable<T>,
    I: IntoIterator<Item = Option<Hook<T>>>,
{
    PositionalHooks {
        target,
        hooks: hooks.into_iter().collect(),
        fallback,
    }
}

static_assertions::assert_impl_all!(
    PositionalHooks<super::Opaque<fn(Arguments<i32>) -> i32>, i32>: Send, Sync, Clone
);
