//! Shared helpers for adapter integration tests.

#![allow(dead_code)]

use bumpalo::Bump;
use scriptvec_core::{ContractMode, Engine, EngineOptions};

/// Initialize tracing output for a test. Respects `RUST_LOG`.
pub fn init_test_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let _ = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Run `f` against a fresh engine with the given contract mode.
pub fn with_engine<R>(contracts: ContractMode, f: impl FnOnce(&Engine<'_>) -> R) -> R {
    init_test_logging();
    let arena = Bump::new();
    let engine = Engine::new(
        EngineOptions {
            contracts,
            ..EngineOptions::default()
        },
        &arena,
    );
    f(&engine)
}

pub fn checked<R>(f: impl FnOnce(&Engine<'_>) -> R) -> R {
    with_engine(ContractMode::Checked, f)
}

pub fn unchecked<R>(f: impl FnOnce(&Engine<'_>) -> R) -> R {
    with_engine(ContractMode::Unchecked, f)
}
