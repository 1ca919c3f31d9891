//! Property-based tests for `BindingStore`.
//!
//! Test coverage:
//! - Key lists never contain duplicates under arbitrary mutation sequences
//! - Sensitivity stays within range under arbitrary adjust/set sequences
//! - Appending grows a list by one only when the key is new
//! - Reset restores factory state and notifies once

use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;

use proptest::prelude::*;

use rebind_config::{BindingStore, ConfigStore, Key, factory_catalog};

/// Strategy for key ids, including case variants of the same key.
fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        Just("W"),
        Just("w"),
        Just("Space"),
        Just("space"),
        Just("E"),
        Just("Ctrl+E"),
        Just("F5"),
        Just("Mouse4"),
        Just("MOUSE4"),
        Just("Esc"),
    ]
    .prop_map(Key::new)
}

/// Strategy for action ids, including one the catalog does not know.
fn action_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("move_forward"),
        Just("jump"),
        Just("interact"),
        Just("no_such_action"),
    ]
}

#[derive(Debug, Clone)]
enum Op {
    Add(&'static str, Key),
    Remove(&'static str, Key),
    Set(&'static str, Vec<Key>),
    Clear(&'static str),
    Adjust(i32),
    SetSensitivity(f64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (action_strategy(), key_strategy()).prop_map(|(a, k)| Op::Add(a, k)),
        (action_strategy(), key_strategy()).prop_map(|(a, k)| Op::Remove(a, k)),
        (action_strategy(), prop::collection::vec(key_strategy(), 0..6))
            .prop_map(|(a, ks)| Op::Set(a, ks)),
        action_strategy().prop_map(Op::Clear),
        (-3i32..=3).prop_map(Op::Adjust),
        (-5.0f64..5.0).prop_map(Op::SetSensitivity),
    ]
}

fn apply(store: &BindingStore, op: Op) {
    match op {
        Op::Add(action, key) => {
            store.add_key(action, key);
        }
        Op::Remove(action, key) => {
            store.remove_key(action, &key);
        }
        Op::Set(action, keys) => {
            store.set_keys(action, keys);
        }
        Op::Clear(action) => {
            store.clear_keys(action);
        }
        Op::Adjust(direction) => {
            store.adjust_sensitivity(direction);
        }
        Op::SetSensitivity(value) => {
            store.set_sensitivity(value);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_key_lists_never_contain_duplicates(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let store = BindingStore::in_memory(factory_catalog());
        for op in ops {
            apply(&store, op);
        }

        for action in store.actions() {
            let keys = store.keys(action.id());
            let unique: HashSet<_> = keys.iter().collect();
            prop_assert_eq!(unique.len(), keys.len());
            prop_assert!(keys.iter().all(|k| !k.is_reserved()));
        }
    }

    #[test]
    fn test_sensitivity_stays_in_range(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let store = BindingStore::in_memory(factory_catalog());
        let range = store.sensitivity_range();
        for op in ops {
            apply(&store, op);
            let value = store.sensitivity();
            prop_assert!(value >= range.min() && value <= range.max(), "out of range: {}", value);
        }
    }

    #[test]
    fn test_append_grows_only_for_new_keys(key in key_strategy(), action in action_strategy()) {
        let store = BindingStore::in_memory(factory_catalog());
        let before = store.keys(action);
        let was_present = before.contains(&key);

        store.add_key(action, key.clone());
        let after = store.keys(action);

        let bindable = store.catalog().contains(action) && !key.is_reserved();
        if bindable && !was_present {
            prop_assert_eq!(after.len(), before.len() + 1);
            prop_assert_eq!(after.last(), Some(&key));
        } else {
            prop_assert_eq!(after, before);
        }
    }

    #[test]
    fn test_reset_restores_defaults_with_one_notification(
        ops in prop::collection::vec(op_strategy(), 0..20)
    ) {
        let store = BindingStore::in_memory(factory_catalog());
        for op in ops {
            apply(&store, op);
        }

        let count = Rc::new(Cell::new(0));
        let inner = Rc::clone(&count);
        store.add_listener(Rc::new(move || inner.set(inner.get() + 1)));

        store.reset_to_defaults();

        prop_assert_eq!(count.get(), 1);
        prop_assert_eq!(store.sensitivity(), store.default_sensitivity());
        for action in store.actions() {
            prop_assert_eq!(store.keys(action.id()), store.default_keys(action.id()));
        }
    }
}
