//! The shared transformer type and the identity combinator.
//!
//! - [`Hook`]: A reference-counted unary transformer `T -> T`
//! - [`identity`]: The identity function (I combinator)
//!
//! A missing hook is written `Option::<Hook<T>>::None` throughout the crate
//! and behaves exactly like [`identity`].

use std::fmt;
use std::sync::Arc;

/// A unary transformer applied to a single value.
///
/// `Hook` wraps any `Fn(T) -> T + Send + Sync` behind an [`Arc`], so that it
/// can be registered under several parameter names, cloned into several
/// wrappers, and shared across threads without copying the closure.
///
/// Hooks are expected to be pure: the same input produces the same output.
/// Nothing in this crate caches or retries a hook invocation.
///
/// # Examples
///
/// ```
/// use hookwork::compose::Hook;
///
/// let double = Hook::new(|value: i32| value * 2);
/// assert_eq!(double.apply(21), 42);
///
/// let shared = double.clone();
/// assert!(Hook::ptr_eq(&double, &shared));
/// ```
pub struct Hook<T> {
    function: Arc<dyn Fn(T) -> T + Send + Sync>,
}

impl<T> Hook<T> {
    /// Creates a new hook from a function.
    #[inline]
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        Self {
            function: Arc::new(function),
        }
    }

    /// Creates a hook that returns its input unchanged.
    #[inline]
    pub fn identity() -> Self
    where
        T: 'static,
    {
        Self::new(identity)
    }

    /// Applies the hook to a value.
    #[inline]
    pub fn apply(&self, value: T) -> T {
        (self.function)(value)
    }

    /// Returns `true` if both hooks share the same underlying function.
    #[inline]
    pub fn ptr_eq(first: &Self, second: &Self) -> bool {
        Arc::ptr_eq(&first.function, &second.function)
    }
}

impl<T> Clone for Hook<T> {
    fn clone(&self) -> Self {
        Self {
            function: Arc::clone(&self.function),
        }
    }
}

impl<T> fmt::Debug for Hook<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Hook(<function>)")
    }
}

/// Returns the value unchanged.
///
/// The identity function is the unit element of composition:
/// `chain(identity, f, [])` behaves exactly like `f`.
///
/// # Examples
///
/// ```
/// use hookwork::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

static_assertions::assert_impl_all!(Hook<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Hook<String>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_with_unit() {
        assert_eq!(identity(()), ());
    }

    #[test]
    fn test_identity_hook_returns_input() {
        let hook = Hook::<String>::identity();
        assert_eq!(hook.apply("unchanged".to_string()), "unchanged");
    }

    #[test]
    fn test_cloned_hook_shares_function() {
        let hook = Hook::new(|value: i32| value + 1);
        let cloned = hook.clone();
        assert!(Hook::ptr_eq(&hook, &cloned));
        assert_eq!(cloned.apply(1), 2);
    }

    #[test]
    fn test_separately_created_hooks_are_distinct() {
        let first = Hook::new(|value: i32| value + 1);
        let second = Hook::new(|value: i32| value + 1);
        assert!(!Hook::ptr_eq(&first, &second));
    }

    #[test]
    fn test_debug_hides_function() {
        let hook = Hook::new(|value: i32| value);
        assert_eq!(format!("{hook:?}"), "Hook(<function>)");
    }
}
