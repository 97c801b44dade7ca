//! The callable abstraction shared by targets and wrappers.
//!
//! Every target that can receive hooks, and every wrapper this crate builds
//! around one, implements [`Callable`]. The optional
//! [`signature`](Callable::signature) method is the introspection capability
//! the named-hook binder relies on.

use std::fmt;

use super::{Arguments, Signature};

/// A callable that receives [`Arguments`] and may expose its parameter names.
///
/// # Examples
///
/// ```rust
/// use hookwork::hook::{Arguments, Callable, Signature, describe, opaque};
///
/// let sum = describe(Signature::new(["a", "b"]), |arguments: Arguments<i32>| {
///     arguments.positional().iter().sum::<i32>()
/// });
/// assert_eq!(sum.call(Arguments::from_positional([2, 3])), 5);
/// assert_eq!(sum.signature().map(Signature::len), Some(2));
///
/// let count = opaque(|arguments: Arguments<i32>| arguments.len());
/// assert!(count.signature().is_none());
/// ```
pub trait Callable<T> {
    /// The value returned by [`Callable::call`].
    type Output;

    /// Invokes the callable.
    fn call(&self, arguments: Arguments<T>) -> Self::Output;

    /// Returns the declared parameter names, if known.
    fn signature(&self) -> Option<&Signature> {
        None
    }

    /// Converts the callable into a plain closure.
    fn into_fn(self) -> impl Fn(Arguments<T>) -> Self::Output
    where
        Self: Sized,
    {
        move |arguments| self.call(arguments)
    }
}

impl<T, C> Callable<T> for &C
where
    C: Callable<T> + ?Sized,
{
    type Output = C::Output;

    fn call(&self, arguments: Arguments<T>) -> Self::Output {
        (**self).call(arguments)
    }

    fn signature(&self) -> Option<&Signature> {
        (**self).signature()
    }
}

impl<T, C> Callable<T> for std::sync::Arc<C>
where
    C: Callable<T> + ?Sized,
{
    type Output = C::Output;

    fn call(&self, arguments: Arguments<T>) -> Self::Output {
        (**self).call(arguments)
    }

    fn signature(&self) -> Option<&Signature> {
        (**self).signature()
    }
}

/// A function paired with its parameter names.
///
/// Created by [`describe`] or by the `#[hookable]` attribute.
#[derive(Clone)]
pub struct Described<F> {
    signature: Signature,
    function: F,
}

impl<F> fmt::Debug for Described<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Described")
            .field("signature", &self.signature)
            .field("function", &format_args!("<function>"))
            .finish()
    }
}

impl<F> Described<F> {
    /// Returns the wrapped function.
    #[inline]
    pub const fn function(&self) -> &F {
        &self.function
    }
}

impl<T, R, F> Callable<T> for Described<F>
where
    F: Fn(Arguments<T>) -> R,
{
    type Output = R;

    #[inline]
    fn call(&self, arguments: Arguments<T>) -> R {
        (self.function)(arguments)
    }

    #[inline]
    fn signature(&self) -> Option<&Signature> {
        Some(&self.signature)
    }
}

/// Pairs a function with its parameter names.
///
/// # Examples
///
/// ```rust
/// use hookwork::hook::{Arguments, Callable, Signature, describe};
///
/// let area = describe(Signature::new(["width", "height"]), |arguments: Arguments<u32>| {
///     let signature = Signature::new(["width", "height"]);
///     let [width, height] = arguments.bind_array::<2>(&signature)?;
///     Ok::<_, hookwork::hook::ArgumentError>(width * height)
/// });
///
/// let arguments = Arguments::new().with_keyword("height", 4).with_keyword("width", 3);
/// assert_eq!(area.call(arguments), Ok(12));
/// ```
pub const fn describe<F>(signature: Signature, function: F) -> Described<F> {
    Described {
        signature,
        function,
    }
}

/// A function whose parameter names are unknown.
///
/// Created by [`opaque`]. It can be wrapped with positional hooks, but binding
/// named hooks to it fails with
/// [`HookError::MissingIntrospection`](super::HookError::MissingIntrospection).
#[derive(Clone, Copy)]
pub struct Opaque<F> {
    function: F,
}

impl<F> fmt::Debug for Opaque<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Opaque(<function>)")
    }
}

impl<T, R, F> Callable<T> for Opaque<F>
where
    F: Fn(Arguments<T>) -> R,
{
    type Output = R;

    #[inline]
    fn call(&self, arguments: Arguments<T>) -> R {
        (self.function)(arguments)
    }
}

/// Wraps a function without exposing parameter names.
pub const fn opaque<F>(function: F) -> Opaque<F> {
    Opaque { function }
}
