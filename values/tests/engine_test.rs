//! The reference engine driven through the public contracts only.

use bumpalo::Bump;
use pretty_assertions::assert_eq;
use scriptvec_values::types::ty;
use scriptvec_values::{
    ContractMode, Engine, EngineOptions, ManagedArray, Raw, ResourceManager,
};

#[test]
fn test_freed_slot_is_reused_with_new_generation() {
    let arena = Bump::new();
    let engine = Engine::new(EngineOptions::default(), &arena);

    let first = engine.create_array(1, &ty!(Array[Int])).unwrap();
    assert_eq!(engine.release_array(first), Some(0));

    let second = engine.create_array(2, &ty!(Array[Int])).unwrap();
    assert_eq!(second.slot(), first.slot());
    assert_ne!(second, first);

    assert!(engine.array(first).is_none());
    assert_eq!(engine.array(second).unwrap().len(), 2);
    assert_eq!(engine.release_array(second), Some(0));
}

#[test]
fn test_two_arrays_borrow_independently() {
    let arena = Bump::new();
    let engine = Engine::new(EngineOptions::default(), &arena);
    let a = engine.create_array(1, &ty!(Array[Str])).unwrap();
    let b = engine.create_array(0, &ty!(Array[Str])).unwrap();

    {
        let source = engine.array(a).unwrap();
        let mut dest = engine.array_mut(b).unwrap();
        for raw in source.items() {
            assert!(dest.insert_last(raw.clone()));
        }
        assert!(!dest.insert_last(Raw::Int(1)));
    }

    assert_eq!(engine.array(b).unwrap().items(), &[Raw::Str(String::new())]);
    assert_eq!(engine.shutdown().leaked, 2);
}

#[test]
fn test_contract_mode_comes_from_options() {
    let arena = Bump::new();
    let engine = Engine::new(
        EngineOptions {
            contracts: ContractMode::Unchecked,
            ..EngineOptions::default()
        },
        &arena,
    );
    assert_eq!(engine.contract_mode(), ContractMode::Unchecked);
}
