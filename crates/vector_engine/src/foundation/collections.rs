//! Specialized collection types

pub use slotmap::{new_key_type, DefaultKey, SlotMap};

/// Remove every value rejected by `keep`, returning how many were removed
pub fn sweep<K: slotmap::Key, V>(map: &mut SlotMap<K, V>, mut keep: impl FnMut(&V) -> bool) -> usize {
    let before = map.len();
    map.retain(|_, value| keep(value));
    before - map.len()
}
