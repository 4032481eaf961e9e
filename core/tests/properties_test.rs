//! Property tests for container operations.

mod common;

use common::checked;
use proptest::prelude::*;
use scriptvec_core::{Engine, ScriptVec};

type IntVec<'e, 'arena> = ScriptVec<'e, i64, Engine<'arena>>;

/// Run `f` on an adapter bound to a fresh `array<int>` holding `items`.
fn with_ints<R>(items: &[i64], f: impl FnOnce(&mut IntVec<'_, '_>) -> R) -> R {
    checked(|engine| {
        let mut v = ScriptVec::new();
        v.initialize(engine, "array<int>", 0).unwrap();
        v.extend(items.iter().copied());
        let out = f(&mut v);
        v.release();
        out
    })
}

proptest! {
    #[test]
    fn resize_sets_len(start in prop::collection::vec(any::<i64>(), 0..16), n in 0usize..64) {
        with_ints(&start, |v| {
            v.resize(n);
            prop_assert_eq!(v.len(), n);
            // Surviving prefix is unchanged, new slots are zero.
            for i in 0..n {
                let expected = start.get(i).copied().unwrap_or(0);
                prop_assert_eq!(*v.item(i), expected);
            }
            Ok(())
        })?;
    }

    #[test]
    fn push_back_appends_in_order(items in prop::collection::vec(any::<i64>(), 0..32)) {
        with_ints(&[], |v| {
            for (k, item) in items.iter().enumerate() {
                v.push_back(*item);
                prop_assert_eq!(v.len(), k + 1);
            }
            prop_assert_eq!(v.to_vec(), items.clone());
            Ok(())
        })?;
    }

    #[test]
    fn assign_fill_repeats_value(n in 0usize..32, value in any::<i64>()) {
        with_ints(&[1, 2, 3], |v| {
            v.assign_fill(n, value);
            prop_assert_eq!(v.iter().count(), n);
            prop_assert!(v.iter().all(|x| *x == value));
            Ok(())
        })?;
    }

    #[test]
    fn assign_iter_replaces_contents(
        start in prop::collection::vec(any::<i64>(), 0..8),
        items in prop::collection::vec(any::<i64>(), 0..32),
    ) {
        with_ints(&start, |v| {
            v.assign_iter(items.iter().copied());
            prop_assert_eq!(v.len(), items.len());
            prop_assert_eq!(v.to_vec(), items.clone());
            Ok(())
        })?;
    }

    #[test]
    fn at_matches_item(items in prop::collection::vec(any::<i64>(), 0..16), i in 0usize..32) {
        with_ints(&items, |v| {
            if i < v.len() {
                prop_assert_eq!(*v.at(i).unwrap(), *v.item(i));
            } else {
                let err = v.at(i).unwrap_err();
                prop_assert_eq!(err.index, i);
                prop_assert_eq!(err.len, items.len());
            }
            Ok(())
        })?;
    }

    #[test]
    fn cursor_span_is_len(items in prop::collection::vec(any::<i64>(), 0..32)) {
        with_ints(&items, |v| {
            prop_assert_eq!(v.end() - v.begin(), items.len() as isize);
            prop_assert_eq!(v.rend() - v.rbegin(), items.len() as isize);
            Ok(())
        })?;
    }

    #[test]
    fn front_and_back_are_endpoints(items in prop::collection::vec(any::<i64>(), 1..16)) {
        with_ints(&items, |v| {
            prop_assert_eq!(*v.front(), *v.item(0));
            prop_assert_eq!(*v.back(), *v.item(v.len() - 1));
            Ok(())
        })?;
    }

    #[test]
    fn reverse_visits_reverse_order(items in prop::collection::vec(any::<i64>(), 0..32)) {
        with_ints(&items, |v| {
            let forward: Vec<i64> = v.iter().map(|x| *x).collect();
            let mut backward: Vec<i64> = v.iter().rev().map(|x| *x).collect();
            backward.reverse();
            prop_assert_eq!(&forward, &backward);

            let mut by_cursor = Vec::new();
            let mut it = v.rbegin();
            while it != v.rend() {
                by_cursor.push(*it.get());
                it.inc();
            }
            by_cursor.reverse();
            prop_assert_eq!(forward, by_cursor);
            Ok(())
        })?;
    }
}
