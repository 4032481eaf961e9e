//! Integration tests for the `demo` command.

mod common;

use common::scriptvec;
use predicates::prelude::*;

const TWO_ITEMS: &str = "
This is Rust
Test from Vec: 0
Test from Vec: 1
Appended by the engine

This is Rust (with cursor)
Test from Vec: 0
Test from Vec: 1
Appended by the engine

This is Rust (with const cursor)
Test from Vec: 0
Test from Vec: 1
Appended by the engine

This is Rust (with reverse cursor)
Appended by the engine
Test from Vec: 1
Test from Vec: 0

This is the front. (Old Data Erased)
Test from Vec: 1
This is the back. (Old Data Erased)

testing fill
testing fill

Testing cursors: 0
Testing cursors: 1

Size of current array = 2
at(2): index 2 is out of range for an array of length 2

Unregistered string_array, 0 references left
Shutdown released 0 globals, 0 arrays leaked
";

#[test]
fn test_demo_full_walkthrough() {
    scriptvec()
        .args(["demo", "--count", "2", "--step", "1"])
        .assert()
        .success()
        .stdout(TWO_ITEMS);
}

#[test]
fn test_demo_defaults() {
    scriptvec()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Test from Vec: 9"))
        .stdout(predicate::str::contains("Size of current array = 10"))
        .stdout(predicate::str::contains("Testing cursors: 8"))
        .stdout(predicate::str::contains("Testing cursors: 9").not())
        .stdout(predicate::str::contains("0 arrays leaked"));
}

#[test]
fn test_demo_step() {
    scriptvec()
        .args(["demo", "--count", "7", "--step", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Testing cursors: 0\nTesting cursors: 3\nTesting cursors: 6\n\nSize",
        ));
}

#[test]
fn test_demo_empty_source() {
    // The engine's append keeps the array non-empty.
    scriptvec()
        .args(["demo", "--count", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "This is Rust\nAppended by the engine\n",
        ))
        .stdout(predicate::str::contains("Size of current array = 0"));
}

#[test]
fn test_demo_unchecked() {
    scriptvec()
        .args(["demo", "--count", "3", "--contracts", "unchecked"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Size of current array = 3"));
}

#[test]
fn test_demo_rejects_zero_step() {
    scriptvec()
        .args(["demo", "--step", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--step"));
}
