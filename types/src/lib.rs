//! Element type descriptors for engine-managed script arrays.
//!
//! A declaration such as `array<string>` names the type of a script array.
//! This crate parses such declarations against a [`TypeRegistry`] and
//! represents the result as a [`Ty`].
//!
//! # Example
//!
//! ```
//! use scriptvec_types::{ty, TypeRegistry};
//!
//! let registry = TypeRegistry::with_builtins();
//! let arr = registry.resolve("array<string>").unwrap();
//! assert_eq!(arr, ty!(Array[Str]));
//! assert_eq!(arr.to_string(), "array<string>");
//!
//! // `T[]` is shorthand for `array<T>`.
//! assert_eq!(registry.resolve("int[]").unwrap(), ty!(Array[Int]));
//! ```

#![no_std]
extern crate alloc;

mod decl;
mod flags;
mod kind;
mod macros;
mod registry;
mod ty;

pub use decl::{DeclError, DeclErrorKind, MAX_DEPTH};
pub use flags::TyFlags;
pub use kind::{Scalar, TyKind};
pub use registry::TypeRegistry;
pub use ty::{Ty, TyNode};
