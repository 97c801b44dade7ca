//! Argument hooks.
//!
//! This module transforms the arguments of a callable before the callable
//! runs. A call's arguments are an [`Arguments`] value: ordered positional
//! values plus uniquely named keyword values. Targets and wrappers implement
//! [`Callable`].
//!
//! # Overview
//!
//! - [`bind_named_hooks`]: Hooks selected by parameter name, applied to
//!   positional arguments by index and to keyword arguments by name
//! - [`bind_positional_hooks`]: Hooks applied to positional arguments by
//!   index, with a fallback
//! - [`HookSpec`] / [`Selector`]: Which hook applies to which parameter
//! - [`Signature`]: A target's parameter names
//! - [`describe`] / [`opaque`]: Turn a closure into a [`Callable`], with or
//!   without parameter names
//! - [`partial`]: Fix leading positional and keyword arguments
//!
//! # Registration rules
//!
//! Hook specifications are validated when the binder is built, never at call
//! time:
//!
//! - every selector must carry a hook ([`HookError::InvalidHook`]);
//! - every parameter name may be selected once
//!   ([`HookError::DuplicateSelector`]);
//! - named hooks need the target's signature
//!   ([`HookError::MissingIntrospection`]).
//!
//! # Examples
//!
//! ```
//! use hookwork::hook::{Arguments, Callable, HookError, HookSpec, Signature, bind_named_hooks, describe};
//!
//! let volume = describe(Signature::new(["width", "height", "depth"]), |arguments: Arguments<i64>| {
//!     arguments.bind(&Signature::new(["width", "height", "depth"]))
//!         .map(|values| values.iter().product::<i64>())
//! });
//!
//! // Every dimension is clamped to at least one
//! let clamped = bind_named_hooks(
//!     volume,
//!     HookSpec::new().names(|value: i64| value.max(1), ["width", "height", "depth"]),
//! )
//! .unwrap();
//!
//! let arguments = Arguments::from_positional([0, 3]).with_keyword("depth", -2);
//! assert_eq!(clamped.call(arguments), Ok(3));
//!
//! // Selecting a parameter twice is rejected up front
//! let duplicate = HookSpec::new()
//!     .name("depth", |value: i64| value)
//!     .names(|value: i64| value, ["depth"]);
//! let target = describe(Signature::new(["depth"]), |arguments: Arguments<i64>| arguments.len());
//! assert_eq!(
//!     bind_named_hooks(target, duplicate).unwrap_err(),
//!     HookError::DuplicateSelector { name: "depth".to_string() }
//! );
//! ```

mod arguments;
mod callable;
mod error;
mod named;
mod partial;
mod positional;
mod signature;
mod spec;

pub use arguments::Arguments;
pub use callable::{Callable, Described, Opaque, describe, opaque};
pub use error::{ArgumentError, HookError};
pub use named::{NamedHooks, bind_named_hooks};
pub use partial::{Partial, partial};
pub use positional::{PositionalHooks, bind_positional_hooks};
pub use signature::Signature;
pub use spec::{HookSpec, HookTable, Selector};
