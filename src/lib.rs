//! # hookwork
//!
//! Argument hooks and function combinators for Rust.
//!
//! ## Overview
//!
//! This library transforms the arguments of an existing callable before the
//! callable runs, and composes callables into pipelines. It includes:
//!
//! - **Indexed Mapping**: per-position transformers with a fallback
//! - **Argument Hooks**: positional and keyword hooks resolved through a
//!   target's parameter names, with conflict detection at registration
//! - **Composition**: `chain` / `chain!` for nested application and
//!   `iterate` for repeated self-application
//! - **Partial Application**: fixing leading positional and keyword arguments
//!
//! ## Feature Flags
//!
//! - `compose`: Indexed mapping, chaining and iteration
//! - `hook`: Arguments, signatures, hook binders and partial application
//! - `derive`: The `#[hookable]` attribute
//! - `serde`: Serialization for `Signature` and `Arguments`
//! - `fxhash`: `FxHashMap` for hook tables
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use hookwork::prelude::*;
//!
//! let target = describe(Signature::new(["a", "b", "c"]), |arguments: Arguments<i32>| arguments);
//!
//! let hooked = bind_named_hooks(
//!     target,
//!     HookSpec::new()
//!         .name("a", |value: i32| value * 2)
//!         .names(|value: i32| -value, ["c"]),
//! )
//! .unwrap();
//!
//! let received = hooked.call(Arguments::from_positional([1, 2]).with_keyword("c", 3));
//! assert_eq!(received.positional(), &[2, 2]);
//! assert_eq!(received.keyword("c"), Some(&-3));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use hookwork::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "hook")]
    pub use crate::hook::*;

    #[cfg(feature = "derive")]
    pub use hookwork_derive::hookable;
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "hook")]
pub mod hook;

#[cfg(feature = "derive")]
pub use hookwork_derive::hookable;
