//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand, ValueEnum};
use scriptvec::ContractMode;

/// scriptvec - container access to engine-managed script arrays
#[derive(Parser, Debug)]
#[command(name = "scriptvec", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Walk through the adapter operations on a shared string array
    Demo(DemoArgs),

    /// Resolve type declarations against the engine's registry
    Resolve(ResolveArgs),
}

/// Arguments for the `demo` command.
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Number of elements to fill the array with
    #[arg(long, default_value_t = 10)]
    pub count: usize,

    /// Stride of the stepped cursor walk
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(i64).range(1..))]
    pub step: i64,

    /// Contract checking mode (defaults to the build's mode)
    #[arg(long)]
    pub contracts: Option<Contracts>,
}

/// Arguments for the `resolve` command.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Type declarations, e.g. "array<string>" or "int[]"
    #[arg(required = true)]
    pub decls: Vec<String>,
}

/// Contract checking mode.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Contracts {
    /// Panic on precondition violations
    Checked,
    /// Forward operations to the engine as-is
    Unchecked,
}

impl From<Contracts> for ContractMode {
    fn from(contracts: Contracts) -> Self {
        match contracts {
            Contracts::Checked => ContractMode::Checked,
            Contracts::Unchecked => ContractMode::Unchecked,
        }
    }
}
