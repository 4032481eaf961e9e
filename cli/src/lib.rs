//! scriptvec CLI library.
//!
//! This crate provides the `scriptvec` command-line tool, a walkthrough of the
//! array adapter against the reference engine. The public modules are
//! primarily exposed for testing purposes.

pub mod cli;
pub mod commands;
pub mod common;
