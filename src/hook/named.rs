//! Hooks resolved through a target's parameter names.
//!
//! [`bind_named_hooks`] does all of its work once: it reads the target's
//! [`Signature`], expands the [`HookSpec`] into a [`HookTable`] and aligns the
//! table with the signature into a per-position hook list. Each call of the
//! resulting [`NamedHooks`] then only runs the indexed mapping over the
//! positional arguments and a table lookup per keyword argument.
//!
//! # Two application paths
//!
//! The positional path is by index and the keyword path is by name. Both
//! consult the same table, but independently: a keyword whose name is in the
//! table is hooked even when the name is not a declared parameter, and a
//! positional argument beyond the signature is never hooked. An argument is
//! supplied either positionally or by keyword, so no hook runs twice for the
//! same argument.

use std::fmt;

use super::spec::AlignedHooks;
use super::{Arguments, Callable, HookError, HookSpec, HookTable, Signature};
use crate::compose::map_indexed;

/// A target whose arguments are hooked by parameter name.
///
/// Created by [`bind_named_hooks`]. Holds no mutable state: invoking it
/// concurrently from several threads is safe whenever the target allows it.
pub struct NamedHooks<C, T> {
    target: C,
    positional: AlignedHooks<T>,
    table: HookTable<T>,
}

impl<C, T> fmt::Debug for NamedHooks<C, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("NamedHooks")
            .field("hooked", &self.table.names())
            .field("positional", &self.positional)
            .finish_non_exhaustive()
    }
}

impl<C: Clone, T> Clone for NamedHooks<C, T> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
            positional: self.positional.clone(),
            table: self.table.clone(),
        }
    }
}

impl<C, T> NamedHooks<C, T> {
    /// Returns the wrapped target.
    #[inline]
    pub const fn target(&self) -> &C {
        &self.target
    }

    /// Returns the expanded name table.
    #[inline]
    pub const fn table(&self) -> &HookTable<T> {
        &self.table
    }

    /// Returns the wrapped target, discarding the hooks.
    pub fn into_target(self) -> C {
        self.target
    }

    /// Applies the hooks to one call's arguments without invoking the target.
    pub fn transform(&self, arguments: Arguments<T>) -> Arguments<T> {
        let (positional, keyword) = arguments.into_parts();
        let positional = map_indexed(&self.positional, positional, None);
        let keyword = keyword.into_iter().map(|(name, value)| {
            let value = match self.table.get(&name) {
                Some(hook) => hook.apply(value),
                None => value,
            };
            (name, value)
        });
        Arguments::from_parts(positional, keyword)
    }
}

impl<C, T> Callable<T> for NamedHooks<C, T>
where
    C: Callable<T>,
{
    type Output = C::Output;

    fn call(&self, arguments: Arguments<T>) -> Self::Output {
        tracing::trace!(
            positional = arguments.positional().len(),
            keyword = arguments.keywords().len(),
            "invoking named hooks"
        );
        self.target.call(self.transform(arguments))
    }

    fn signature(&self) -> Option<&Signature> {
        self.target.signature()
    }
}

/// Wraps `target` so that its arguments are hooked by parameter name.
///
/// The target's parameter names come from [`Callable::signature`]. Positional
/// argument `i` is passed through the hook registered for the `i`-th
/// parameter name; a keyword argument is passed through the hook registered
/// for its name. Arguments without a hook pass through unchanged, and the
/// target's result is returned as is.
///
/// # Errors
///
/// - [`HookError::MissingIntrospection`] if the target has no signature
/// - [`HookError::InvalidHook`] if a selector carries no hook
/// - [`HookError::DuplicateSelector`] if a name is selected more than once
///
/// No wrapper is returned when construction fails.
///
/// # Examples
///
/// ```rust
/// use hookwork::hook::{Arguments, Callable, HookSpec, Signature, bind_named_hooks, describe};
///
/// let target = describe(Signature::new(["a", "b", "c"]), |arguments: Arguments<i32>| arguments);
///
/// let hooked = bind_named_hooks(
///     target,
///     HookSpec::new()
///         .name("a", |value: i32| value * 2)
///         .names(|value: i32| -value, ["c"]),
/// )
/// .unwrap();
///
/// let received = hooked.call(Arguments::from_positional([1, 2]).with_keyword("c", 3));
/// assert_eq!(received, Arguments::from_parts([2, 2], [("c", -3)]));
/// ```
pub fn bind_named_hooks<C, T>(target: C, spec: HookSpec<T>) -> Result<NamedHooks<C, T>, HookError>
where
    C: Callable<T>,
{
    let signature = target.signature().ok_or(HookError::MissingIntrospection)?;
    let table = spec.expand()?;
    let positional = table.align(signature);

    // Field expressions only run when the event is enabled.
    tracing::debug!(
        parameters = ?signature.names().collect::<Vec<_>>(),
        hooked = ?table.names(),
        keyword_only = ?table
            .names()
            .into_iter()
            .filter(|name| !signature.contains(name))
            .collect::<Vec<_>>(),
        aligned = positional.iter().filter(|hook| hook.is_some()).count(),
        "bound named hooks"
    );

    Ok(NamedHooks {
        target,
        positional,
        table,
    })
}

static_assertions::assert_impl_all!(
    NamedHooks<super::Described<fn(Arguments<i32>) -> i32>, i32>: Send, Sync, Clone
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hook::{Selector, describe, opaque};

    fn echo() -> impl Callable<i32, Output = Arguments<i32>> {
        describe(Signature::new(["a", "b", "c"]), |arguments: Arguments<i32>| {
            arguments
        })
    }

    #[test]
    fn test_unhooked_arguments_pass_through() {
        let hooked = bind_named_hooks(echo(), HookSpec::new()).unwrap();
        let arguments = Arguments::from_parts([1, 2], [("c", 3), ("extra", 4)]);
        assert_eq!(hooked.call(arguments.clone()), arguments);
    }

    #[test]
    fn test_positional_beyond_signature_is_not_hooked() {
        let hooked = bind_named_hooks(
            echo(),
            HookSpec::new().names(|value: i32| value * 10, ["a", "b", "c"]),
        )
        .unwrap();
        let received = hooked.call(Arguments::from_positional([1, 2, 3, 4]));
        assert_eq!(received.positional(), &[10, 20, 30, 4]);
    }

    #[test]
    fn test_keyword_hook_outside_signature_still_applies() {
        let hooked = bind_named_hooks(
            echo(),
            HookSpec::new().name("extra", |value: i32| value + 100),
        )
        .unwrap();
        let received = hooked.call(Arguments::new().with_keyword("extra", 1));
        assert_eq!(received.keyword("extra"), Some(&101));
    }

    #[test]
    fn test_opaque_target_is_rejected() {
        let result = bind_named_hooks(
            opaque(|arguments: Arguments<i32>| arguments.len()),
            HookSpec::new().name("a", |value: i32| value),
        );
        assert_eq!(result.unwrap_err(), HookError::MissingIntrospection);
    }

    #[test]
    fn test_missing_introspection_is_checked_first() {
        let result = bind_named_hooks(
            opaque(|arguments: Arguments<i32>| arguments.len()),
            HookSpec::new().selector(Selector::ByName {
                name: "a".to_string(),
                hook: None,
            }),
        );
        assert_eq!(result.unwrap_err(), HookError::MissingIntrospection);
    }

    #[test]
    fn test_duplicate_on_opaque_return_type_target() {
        let result = bind_named_hooks(
            echo(),
            HookSpec::new()
                .name("b", |value: i32| value)
                .names(|value: i32| value, ["b"]),
        );
        assert_eq!(
            result.unwrap_err(),
            HookError::DuplicateSelector {
                name: "b".to_string()
            }
        );
    }

    #[test]
    fn test_debug_lists_hooked_names() {
        let hooked = bind_named_hooks(
            echo(),
            HookSpec::new().names(|value: i32| value, ["c", "a"]),
        )
        .unwrap();
        let rendered = format!("{hooked:?}");
        assert!(rendered.starts_with(r#"NamedHooks { hooked: ["a", "c"]"#));
        assert!(rendered.contains("Hook(<function>)"));
    }

    #[test]
    fn test_wrapper_forwards_signature() {
        let hooked = bind_named_hooks(echo(), HookSpec::new()).unwrap();
        assert_eq!(hooked.signature(), Some(&Signature::new(["a", "b", "c"])));
    }
}
