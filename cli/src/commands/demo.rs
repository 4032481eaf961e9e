//! `scriptvec demo`: share a string array with the engine and walk it.

use bumpalo::Bump;
use scriptvec::values::Raw;
use scriptvec::{Engine, EngineOptions, GlobalError, ManagedArray, ResourceManager, ScriptVec};
use std::process::ExitCode;
use tracing::debug;

use crate::cli::DemoArgs;
use crate::common::CliResult;

/// Name the array is shared under.
const GLOBAL: &str = "string_array";

pub fn run(args: DemoArgs) -> CliResult<ExitCode> {
    let arena = Bump::new();
    let mut options = EngineOptions::default();
    if let Some(contracts) = args.contracts {
        options.contracts = contracts.into();
    }
    let engine = Engine::new(options, &arena);
    engine.set_message_callback(|msg| println!("{msg}"));

    let mut strings = ScriptVec::<String, _>::new();
    strings.initialize(&engine, "array<string>", 0)?;

    let result = walk(&engine, &mut strings, &args);
    strings.release();
    drop(strings);
    result?;

    let remaining = engine.unregister_global(GLOBAL)?;
    println!("\nUnregistered {GLOBAL}, {remaining} references left");

    let report = engine.shutdown();
    println!(
        "Shutdown released {} globals, {} arrays leaked",
        report.released_globals, report.leaked
    );
    Ok(ExitCode::SUCCESS)
}

fn walk<'e, 'arena>(
    engine: &'e Engine<'arena>,
    strings: &mut ScriptVec<'e, String, Engine<'arena>>,
    args: &DemoArgs,
) -> CliResult<()> {
    let source: Vec<String> = (0..args.count)
        .map(|i| format!("Test from Vec: {i}"))
        .collect();
    strings.assign_iter(source);

    let handle = strings.share_handle();
    if let Err(err) = engine.register_global(GLOBAL, handle) {
        engine.release_array(handle);
        return Err(err.into());
    }

    script_append(engine, "Appended by the engine")?;

    println!("\nThis is Rust");
    for i in 0..strings.len() {
        println!("{}", strings.item(i));
    }

    println!("\nThis is Rust (with cursor)");
    let (mut it, end) = strings.range_mut();
    while it < end {
        println!("{}", it.get());
        it.inc();
    }

    println!("\nThis is Rust (with const cursor)");
    let mut it = strings.begin();
    while it < strings.end() {
        println!("{}", it.get());
        it.inc();
    }

    println!("\nThis is Rust (with reverse cursor)");
    let mut it = strings.rbegin();
    while it < strings.rend() {
        println!("{}", it.get());
        it.inc();
    }

    *strings.back_mut() = "This is the back. (Old Data Erased)".to_string();
    *strings.front_mut() = "This is the front. (Old Data Erased)".to_string();
    println!();
    for item in strings.iter() {
        println!("{item}");
    }

    strings.assign_fill(args.count, "testing fill".to_string());
    println!();
    for item in strings.iter() {
        println!("{item}");
    }

    strings.resize(0);
    for i in 0..args.count {
        strings.push_back(format!("Testing cursors: {i}"));
    }
    println!();
    let step = args.step as isize;
    let end = strings.end();
    let mut it = strings.begin();
    while it < end {
        println!("{}", it.get());
        it += step;
    }

    let size = strings.end() - strings.begin();
    println!("\nSize of current array = {size}");

    let past_end = strings.len();
    if let Err(err) = strings.at(past_end) {
        println!("at({past_end}): {err}");
    }

    Ok(())
}

/// Append to the shared array through its global name, as script code would.
fn script_append(engine: &Engine<'_>, text: &str) -> CliResult<()> {
    let handle = engine
        .global(GLOBAL)
        .ok_or_else(|| GlobalError::NotRegistered(GLOBAL.to_string()))?;
    let mut array = engine
        .array_mut(handle)
        .ok_or(GlobalError::StaleHandle(handle))?;
    array.insert_last(Raw::Str(text.to_string()));
    debug!(len = array.len(), "script appended");
    Ok(())
}
