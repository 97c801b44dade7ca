//! Error types for hook registration and argument binding.
//!
//! [`HookError`] is returned while a binder is being constructed; a failed
//! construction never yields a partially bound callable. [`ArgumentError`] is
//! returned when the arguments of a single call cannot be matched to a
//! [`Signature`](super::Signature).
//!
//! Panics raised by hooks or targets are not represented here: they propagate
//! to the caller untouched.

use thiserror::Error;

/// Errors raised while expanding a [`HookSpec`](super::HookSpec) or binding a
/// target.
///
/// # Examples
///
/// ```rust
/// use hookwork::hook::HookError;
///
/// let error = HookError::DuplicateSelector { name: "count".to_string() };
/// assert_eq!(format!("{error}"), "duplicate hook selector for parameter `count`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HookError {
    /// A selector was registered without a callable hook.
    #[error("uncallable hook provided for selector `{selector}`")]
    InvalidHook {
        /// The selector's parameter name, or its names joined with `, `.
        selector: String,
    },

    /// The same parameter name was assigned a hook more than once.
    #[error("duplicate hook selector for parameter `{name}`")]
    DuplicateSelector {
        /// The parameter name assigned twice.
        name: String,
    },

    /// The target does not expose its parameter names.
    #[error("target does not expose parameter names; describe it with a signature")]
    MissingIntrospection,
}

/// Errors raised while binding an [`Arguments`](super::Arguments) to a
/// [`Signature`](super::Signature).
///
/// # Examples
///
/// ```rust
/// use hookwork::hook::ArgumentError;
///
/// let error = ArgumentError::MissingArgument { name: "depth".to_string() };
/// assert_eq!(format!("{error}"), "missing argument for parameter `depth`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// More positional arguments were supplied than there are parameters.
    #[error("expected at most {expected} positional arguments, received {received}")]
    TooManyPositional {
        /// The number of parameters.
        expected: usize,
        /// The number of positional arguments supplied.
        received: usize,
    },

    /// A keyword argument names no parameter.
    #[error("unexpected keyword argument `{name}`")]
    UnexpectedKeyword {
        /// The keyword's name.
        name: String,
    },

    /// A parameter was supplied both positionally and by keyword.
    #[error("multiple values for parameter `{name}`")]
    MultipleValues {
        /// The parameter's name.
        name: String,
    },

    /// A parameter received no value.
    #[error("missing argument for parameter `{name}`")]
    MissingArgument {
        /// The parameter's name.
        name: String,
    },

    /// The signature's length differs from the requested arity.
    #[error("signature declares {found} parameters, expected {expected}")]
    ArityMismatch {
        /// The requested arity.
        expected: usize,
        /// The signature's length.
        found: usize,
    },
}
