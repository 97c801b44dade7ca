//! Hook specifications and their expansion into a name table.
//!
//! A [`HookSpec`] lists selectors in registration order. Expanding it yields
//! a [`HookTable`] that maps every selected parameter name to exactly one
//! hook; a name selected twice is a [`HookError::DuplicateSelector`].

use smallvec::SmallVec;

use super::{HookError, Signature};
use crate::compose::Hook;

#[cfg(feature = "fxhash")]
type NameMap<V> = rustc_hash::FxHashMap<String, V>;

#[cfg(not(feature = "fxhash"))]
type NameMap<V> = std::collections::HashMap<String, V>;

/// Per-position hooks, aligned with a [`Signature`].
pub(crate) type AlignedHooks<T> = SmallVec<[Option<Hook<T>>; 8]>;

/// Identifies which arguments a hook applies to.
///
/// A `None` hook is an invalid registration and is rejected with
/// [`HookError::InvalidHook`] when the specification is expanded.
#[derive(Debug)]
pub enum Selector<T> {
    /// One parameter name mapped to one hook.
    ByName {
        /// The parameter name.
        name: String,
        /// The hook to apply.
        hook: Option<Hook<T>>,
    },
    /// One hook shared by several parameter names.
    ByHook {
        /// The hook to apply.
        hook: Option<Hook<T>>,
        /// The parameter names.
        names: Vec<String>,
    },
}

impl<T> Clone for Selector<T> {
    fn clone(&self) -> Self {
        match self {
            Self::ByName { name, hook } => Self::ByName {
                name: name.clone(),
                hook: hook.clone(),
            },
            Self::ByHook { hook, names } => Self::ByHook {
                hook: hook.clone(),
                names: names.clone(),
            },
        }
    }
}

impl<T> Selector<T> {
    /// Describes the selector for error messages.
    fn describe(&self) -> String {
        match self {
            Self::ByName { name, .. } => name.clone(),
            Self::ByHook { names, .. } => names.join(", "),
        }
    }
}

/// An ordered list of [`Selector`]s.
///
/// # Examples
///
/// ```rust
/// use hookwork::hook::HookSpec;
///
/// let spec = HookSpec::new()
///     .name("a", |value: i32| value * 2)
///     .names(|value: i32| -value, ["b", "c"]);
///
/// let table = spec.expand().unwrap();
/// assert_eq!(table.len(), 3);
/// assert_eq!(table.get("c").map(|hook| hook.apply(4)), Some(-4));
///
/// let conflicting = HookSpec::new()
///     .name("a", |value: i32| value)
///     .names(|value: i32| value, ["a"]);
/// assert!(conflicting.expand().is_err());
/// ```
#[derive(Debug)]
pub struct HookSpec<T> {
    selectors: Vec<Selector<T>>,
}

impl<T> Clone for HookSpec<T> {
    fn clone(&self) -> Self {
        Self {
            selectors: self.selectors.clone(),
        }
    }
}

impl<T> Default for HookSpec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HookSpec<T> {
    /// Creates an empty specification.
    #[inline]
    pub const fn new() -> Self {
        Self {
            selectors: Vec::new(),
        }
    }

    /// Registers a hook for one parameter name.
    #[must_use]
    pub fn name<F>(self, name: impl Into<String>, hook: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        self.selector(Selector::ByName {
            name: name.into(),
            hook: Some(Hook::new(hook)),
        })
    }

    /// Registers one hook for several parameter names.
    #[must_use]
    pub fn names<F, I, S>(self, hook: F, names: I) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selector(Selector::ByHook {
            hook: Some(Hook::new(hook)),
            names: names.into_iter().map(Into::into).collect(),
        })
    }

    /// Registers a selector as is.
    #[must_use]
    pub fn selector(mut self, selector: Selector<T>) -> Self {
        self.selectors.push(selector);
        self
    }

    /// Returns the selectors in registration order.
    #[inline]
    pub fn selectors(&self) -> &[Selector<T>] {
        &self.selectors
    }

    /// Expands the selectors into a name table.
    ///
    /// # Errors
    ///
    /// - [`HookError::InvalidHook`] if a selector carries no hook
    /// - [`HookError::DuplicateSelector`] if a parameter name is selected
    ///   more than once
    pub fn expand(&self) -> Result<HookTable<T>, HookError> {
        let mut hooks: NameMap<Hook<T>> = NameMap::default();
        for selector in &self.selectors {
            match selector {
                Selector::ByName { name, hook } => {
                    let hook = hook.as_ref().ok_or_else(|| HookError::InvalidHook {
                        selector: selector.describe(),
                    })?;
                    insert_unique(&mut hooks, name, hook)?;
                }
                Selector::ByHook { hook, names } => {
                    let hook = hook.as_ref().ok_or_else(|| HookError::InvalidHook {
                        selector: selector.describe(),
                    })?;
                    for name in names {
                        insert_unique(&mut hooks, name, hook)?;
                    }
                }
            }
        }
        Ok(HookTable { hooks })
    }
}

fn insert_unique<T>(
    hooks: &mut NameMap<Hook<T>>,
    name: &str,
    hook: &Hook<T>,
) -> Result<(), HookError> {
    if hooks.contains_key(name) {
        return Err(HookError::DuplicateSelector {
            name: name.to_string(),
        });
    }
    hooks.insert(name.to_string(), hook.clone());
    Ok(())
}

/// Parameter names mapped to hooks, each name at most once.
///
/// Produced by [`HookSpec::expand`]. The table is consulted by name for
/// keyword arguments and, once aligned with a [`Signature`], by index for
/// positional arguments.
#[derive(Debug)]
pub struct HookTable<T> {
    hooks: NameMap<Hook<T>>,
}

impl<T> Clone for HookTable<T> {
    fn clone(&self) -> Self {
        Self {
            hooks: self.hooks.clone(),
        }
    }
}

impl<T> HookTable<T> {
    /// Returns the hook registered for a parameter name.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Hook<T>> {
        self.hooks.get(name)
    }

    /// Returns `true` if a hook is registered for the name.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.hooks.contains_key(name)
    }

    /// Returns the number of registered names.
    #[inline]
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Returns `true` if no names are registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Returns the registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.hooks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Builds the per-position hook list for a signature.
    pub(crate) fn align(&self, signature: &Signature) -> AlignedHooks<T> {
        signature
            .names()
            .map(|name| self.get(name).cloned())
            .collect()
    }
}

static_assertions::assert_impl_all!(HookTable<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(HookSpec<String>: Send, Sync, Clone);
