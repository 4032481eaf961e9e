//! Engine-side storage for script arrays.
//!
//! This crate defines the contracts a resource manager must honour to hand
//! out reference-counted arrays ([`ResourceManager`], [`ManagedArray`]), the
//! [`Marshal`] mapping between Rust element types and engine storage, and a
//! small reference [`Engine`] that implements those contracts.

#![deny(unsafe_code)]

mod array;
mod engine;
mod handle;
mod manager;
mod marshal;
mod message;
mod options;
mod raw;

pub use array::{ManagedArray, ScriptArray};
pub use engine::{Engine, GlobalError, ShutdownReport};
pub use handle::{ArrayHandle, SlotTable};
pub use manager::ResourceManager;
pub use marshal::Marshal;
pub use message::{Message, MessageCallback, MessageKind};
pub use options::{ContractMode, EngineOptions};
pub use raw::Raw;

pub use scriptvec_types as types;
