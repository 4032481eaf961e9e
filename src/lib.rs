//! scriptvec - container access to engine-managed script arrays
//!
//! # Overview
//!
//! A scripting engine hands out dynamic arrays that it owns and reference
//! counts. [`ScriptVec`] wraps such an array in a familiar container
//! interface (length, indexing, cursors, push/pop, assign) while the engine
//! keeps ownership.
//!
//! # Quick Start
//!
//! ```
//! use scriptvec::{Engine, EngineOptions, ScriptVec};
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let engine = Engine::new(EngineOptions::default(), &arena);
//!
//! let mut names = ScriptVec::<String, _>::new();
//! names.initialize(&engine, "array<string>", 0).unwrap();
//! names.push_back("ada".to_string());
//! names.push_back("grace".to_string());
//!
//! // Share the array with the engine under a global name.
//! let handle = names.share_handle();
//! engine.register_global("names", handle).unwrap();
//!
//! let mut it = names.rbegin();
//! assert_eq!(*it.get(), "grace");
//! it.inc();
//! assert_eq!(*it.get(), "ada");
//!
//! names.release();
//! drop(names);
//!
//! // The engine drops its global reference at shutdown.
//! assert_eq!(engine.shutdown().leaked, 0);
//! ```
//!
//! # Contract modes
//!
//! Misuse such as indexing past the end or using an adapter before
//! `initialize` is a contract violation. In [`ContractMode::Checked`] (the
//! default in debug builds, or with the `checked-contracts` feature) it
//! panics with a description of the violation. In
//! [`ContractMode::Unchecked`] operations are forwarded to the engine as-is.

// Error rendering utilities
pub mod error_renderer;
pub use error_renderer::{CharSet, RenderConfig, render_error, render_error_to};

pub use scriptvec_core::{
    Access, ArrayHandle, Const, ContractMode, Cursor, Engine, EngineOptions, Error, GlobalError,
    InitError, Iter, ManagedArray, Marshal, Message, MessageKind, Mut, OutOfRange,
    ResourceManager, RevCursor, ScriptVec, ShutdownReport, Violation,
};
pub use scriptvec_core::{types, values};
