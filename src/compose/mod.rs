//! Function composition utilities.
//!
//! This module provides the building blocks that the argument-hook binders
//! are made of, and the combinators that compose callables into pipelines.
//!
//! # Overview
//!
//! - [`Hook`]: A shared unary transformer `T -> T`
//! - [`map_indexed`]: Apply per-position transformers to a sequence of values
//! - [`chain`] / [`Chain`]: Compose unary functions, authored outer-first
//! - [`chain!`]: Statically typed composition, authored outer-first
//! - [`iterate`] / [`twice`]: Apply a function to its own output repeatedly
//! - [`identity`]: The identity function
//!
//! # Examples
//!
//! ## Indexed mapping
//!
//! ```
//! use hookwork::compose::{Hook, map_indexed};
//!
//! let double = Hook::new(|value: i32| value * 2);
//! let negate = Hook::new(|value: i32| -value);
//!
//! let mapped = map_indexed(&[Some(double), None], vec![1, 2, 3], Some(&negate));
//! assert_eq!(mapped, vec![2, 2, -3]);
//! ```
//!
//! ## Chaining
//!
//! ```
//! use hookwork::compose::{Hook, chain};
//!
//! // chain(a, b, [c])(x) = a(b(c(x)))
//! let chained = chain(|v: i32| v + 1, |v: i32| v * 2, [Hook::new(|v: i32| v - 3)]);
//! assert_eq!(chained.call(5), 5);
//! ```
//!
//! ## Iteration
//!
//! ```
//! use hookwork::compose::iterate;
//!
//! let octuple = iterate(|v: i32| v * 2, 3);
//! assert_eq!(octuple(1), 8);
//! ```
//!
//! # Laws
//!
//! - **Chain definition**: `chain(a, b, [c]).call(x) == a(b(c(x)))`
//! - **Chain identity**: `chain(identity, f, []).call(x) == f(x)`
//! - **Iterate zero**: `iterate(f, 0)(x) == x`
//! - **Iterate successor**: `iterate(f, n + 1)(x) == f(iterate(f, n)(x))`

mod chain_macro;
mod iterate;
mod map_indexed;
mod pipeline;
mod utils;

pub use iterate::{DEFAULT_TIMES, iterate, twice};
pub use map_indexed::map_indexed;
pub use pipeline::{Chain, chain};
pub use utils::{Hook, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::chain;
