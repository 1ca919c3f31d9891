//! Commands that edit the keys of a single action.

use anyhow::Result;
use rebind_config::{BindingStore, ConfigStore, Key};

use super::{parse_bindable_key, require_action};

fn describe(keys: &[Key]) -> String {
    if keys.is_empty() {
        "(unbound)".to_string()
    } else {
        keys.iter().map(Key::id).collect::<Vec<_>>().join(", ")
    }
}

pub fn run_bind(store: &BindingStore, action: &str, key: &str) -> Result<()> {
    require_action(store, action)?;
    let key = parse_bindable_key(key)?;

    if store.add_key(action, key.clone()) {
        println!("Bound {} to {action}", key.id());
    } else {
        println!("{action} already has {}", key.id());
    }
    println!("{action}: {}", describe(&store.keys(action)));
    Ok(())
}

pub fn run_unbind(store: &BindingStore, action: &str, key: &str) -> Result<()> {
    require_action(store, action)?;
    // Removal accepts any parsable spelling, reserved or not.
    let key = Key::new(key);

    if store.remove_key(action, &key) {
        println!("Removed {} from {action}", key.id());
    } else {
        println!("{action} has no key {}", key.id());
    }
    println!("{action}: {}", describe(&store.keys(action)));
    Ok(())
}

pub fn run_set(store: &BindingStore, action: &str, keys: &[String]) -> Result<()> {
    require_action(store, action)?;
    let keys = keys
        .iter()
        .map(|raw| parse_bindable_key(raw))
        .collect::<Result<Vec<_>, _>>()?;

    store.set_keys(action, keys);
    println!("{action}: {}", describe(&store.keys(action)));
    Ok(())
}

pub fn run_clear(store: &BindingStore, action: &str) -> Result<()> {
    require_action(store, action)?;
    store.clear_keys(action);
    println!("{action}: {}", describe(&[]));
    Ok(())
}
