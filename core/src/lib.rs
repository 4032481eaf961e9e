//! A random-access container facade over engine-managed script arrays.
//!
//! [`ScriptVec`] binds to a reference-counted array owned by a
//! [`ResourceManager`] and forwards container operations to it. Cursors
//! ([`Cursor`], [`RevCursor`]) and a native iterator ([`Iter`]) walk it.
//!
//! ```
//! use bumpalo::Bump;
//! use scriptvec_core::{Engine, EngineOptions, ScriptVec};
//!
//! let arena = Bump::new();
//! let engine = Engine::new(EngineOptions::default(), &arena);
//!
//! let mut v = ScriptVec::<String, _>::new();
//! v.initialize(&engine, "array<string>", 0).unwrap();
//! v.push_back("a".to_string());
//! v.push_back("b".to_string());
//! assert_eq!(v.to_vec(), ["a", "b"]);
//! assert_eq!(v.end() - v.begin(), 2);
//! v.release();
//! ```

#![deny(unsafe_code)]

pub mod contract;
pub mod cursor;
pub mod error;
mod iter;
mod vec;

pub use contract::Violation;
pub use cursor::{Access, Const, Cursor, Mut, RevCursor};
pub use error::{Error, InitError, OutOfRange};
pub use iter::Iter;
pub use vec::ScriptVec;

pub use scriptvec_types as types;
pub use scriptvec_values as values;
pub use scriptvec_values::{
    ArrayHandle, ContractMode, Engine, EngineOptions, GlobalError, ManagedArray, Marshal, Message,
    MessageKind, ResourceManager, ShutdownReport,
};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
