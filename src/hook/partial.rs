//! Partial application over [`Arguments`].
//!
//! [`partial`] fixes leading positional arguments and keyword arguments of a
//! target. [`Partial::partial`] applies the same operation to the partial
//! itself, so partials can be refined step by step.

use std::fmt;

use super::{Arguments, Callable};

/// A target with some of its arguments fixed.
///
/// On every call, the fixed positional arguments come first, followed by the
/// call's positional arguments; the call's keyword arguments override fixed
/// keyword arguments with the same name.
///
/// A `Partial` does not expose a signature, so named hooks cannot be bound to
/// it. Bind hooks to the target first, then fix arguments.
#[derive(Clone)]
pub struct Partial<C, T> {
    target: C,
    fixed: Arguments<T>,
}

impl<C, T: fmt::Debug> fmt::Debug for Partial<C, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Partial")
            .field("fixed", &self.fixed)
            .finish_non_exhaustive()
    }
}

impl<C, T> Partial<C, T> {
    /// Returns the wrapped target.
    #[inline]
    pub const fn target(&self) -> &C {
        &self.target
    }

    /// Returns the fixed arguments.
    #[inline]
    pub const fn fixed(&self) -> &Arguments<T> {
        &self.fixed
    }

    /// Fixes further arguments on top of this partial.
    ///
    /// The result is a partial application of `self`: its fixed positional
    /// arguments follow the ones already fixed here, and its fixed keywords
    /// override the ones fixed here.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hookwork::hook::{Arguments, Callable, opaque, partial};
    ///
    /// let collect = opaque(|arguments: Arguments<i32>| arguments.positional().to_vec());
    /// let first = partial(collect, Arguments::from_positional([1]));
    /// let second = first.partial(Arguments::from_positional([2]));
    ///
    /// assert_eq!(second.call(Arguments::from_positional([3])), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn partial(self, fixed: Arguments<T>) -> Partial<Self, T> {
        partial(self, fixed)
    }
}

impl<C, T> Callable<T> for Partial<C, T>
where
    C: Callable<T>,
    T: Clone,
{
    type Output = C::Output;

    fn call(&self, arguments: Arguments<T>) -> Self::Output {
        self.target.call(self.fixed.clone().merged(arguments))
    }
}

/// Fixes arguments of `target`.
///
/// # Examples
///
/// ```rust
/// use hookwork::hook::{Arguments, Callable, opaque, partial};
///
/// let describe = opaque(|arguments: Arguments<String>| {
///     let unit = arguments.keyword("unit").cloned().unwrap_or_default();
///     format!("{}{unit}", arguments.positional().concat())
/// });
///
/// let in_meters = partial(describe, Arguments::new().with_keyword("unit", "m".to_string()));
///
/// assert_eq!(in_meters.call(Arguments::from_positional(["12".to_string()])), "12m");
/// assert_eq!(
///     in_meters.call(Arguments::from_parts(["3".to_string()], [("unit", "km".to_string())])),
///     "3km"
/// );
/// ```
pub const fn partial<C, T>(target: C, fixed: Arguments<T>) -> Partial<C, T> {
    Partial { target, fixed }
}
