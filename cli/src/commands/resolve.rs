//! `scriptvec resolve`: show how the engine reads type declarations.

use bumpalo::Bump;
use scriptvec::{Engine, EngineOptions, Error, InitError, ResourceManager};
use std::process::ExitCode;

use crate::cli::ResolveArgs;
use crate::common::{self, CliResult};

pub fn run(args: ResolveArgs, no_color: bool) -> CliResult<ExitCode> {
    let arena = Bump::new();
    let engine = Engine::new(EngineOptions::default(), &arena);
    engine.set_message_callback(|msg| eprintln!("{msg}"));

    let mut failed = 0;
    for decl in &args.decls {
        let ty = match engine.resolve_type(decl) {
            Ok(ty) => ty,
            Err(source) => {
                failed += 1;
                let error = Error::from(InitError::UnknownType {
                    decl: decl.clone(),
                    source,
                });
                common::error::render(&error, no_color);
                continue;
            }
        };

        let Some(elem) = ty.element() else {
            println!("{decl} => {ty} (scalar)");
            continue;
        };
        // Probe with an empty array; the engine reports element types it
        // cannot hold through the message callback.
        match engine.create_array(0, &ty) {
            Some(handle) => {
                engine.release_array(handle);
                println!("{decl} => {ty} (array of {elem})");
            }
            None => println!("{decl} => {ty} (array of {elem}, unsupported)"),
        }
    }

    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
