//! Attribute macros for hookwork.
//!
//! Rust function values do not carry their parameter names. This crate
//! records them at compile time so that named hooks can be bound to ordinary
//! functions.
//!
//! # Available Attribute Macros
//!
//! - [`macro@hookable`]: Generates a described callable for a function
//!
//! # Example
//!
//! ```rust,ignore
//! use hookwork::hook::{Arguments, Callable, HookSpec, bind_named_hooks};
//! use hookwork_derive::hookable;
//!
//! #[hookable]
//! fn volume(width: i64, height: i64, depth: i64) -> i64 {
//!     width * height * depth
//! }
//!
//! let clamped = bind_named_hooks(
//!     volume_callable(),
//!     HookSpec::new().names(|value: i64| value.max(1), ["width", "height", "depth"]),
//! )
//! .unwrap();
//!
//! let arguments = Arguments::from_positional([0, 3]).with_keyword("depth", 5);
//! assert_eq!(clamped.call(arguments), Ok(15));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod hookable;

use proc_macro::TokenStream;

/// Generates a described callable for a free function.
///
/// The annotated function is kept as is. A sibling function named
/// `{function_name}_callable` is generated with the same visibility; it
/// returns a `hookwork::hook::Described` whose signature lists the function's
/// parameter names in declaration order, and whose closure binds an
/// `Arguments` to those parameters before calling the function.
///
/// # Requirements
///
/// - The function is a free function (no `self` receiver)
/// - Every parameter is a plain identifier (`name` or `mut name`)
/// - Every parameter has the same type, which becomes the argument type
/// - The function has at least one parameter
/// - The function is not `async`, `unsafe` or generic
///
/// # Generated Code
///
/// ```rust,ignore
/// pub fn area_callable() -> hookwork::hook::Described<
///     impl Fn(Arguments<u32>) -> Result<u32, ArgumentError> + Clone + Send + Sync + 'static,
/// > { ... }
/// ```
///
/// The callable returns `Err(ArgumentError)` when a call's arguments do not
/// bind to the parameters, and `Ok` with the function's result otherwise.
///
/// # Example
///
/// ```rust,ignore
/// use hookwork::hook::{Arguments, Callable};
/// use hookwork_derive::hookable;
///
/// #[hookable]
/// pub fn area(width: u32, height: u32) -> u32 {
///     width * height
/// }
///
/// let callable = area_callable();
/// let arguments = Arguments::new().with_keyword("height", 4).with_keyword("width", 3);
/// assert_eq!(callable.call(arguments), Ok(12));
/// ```
#[proc_macro_attribute]
pub fn hookable(attribute: TokenStream, item: TokenStream) -> TokenStream {
    hookable::hookable_impl(attribute, item)
}
