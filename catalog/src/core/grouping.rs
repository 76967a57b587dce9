//! Grouping of derived views by an arbitrary key

use std::collections::HashMap;
use std::hash::Hash;

/// Items sharing one key, in input order
#[derive(Debug, Clone, PartialEq)]
pub struct Group<'a, K, T> {
    pub key: K,
    pub items: Vec<&'a T>,
}

impl<'a, K, T> Group<'a, K, T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&'a T> {
        self.items.first().copied()
    }
}

/// Group items by `key_fn`, keeping groups in first-seen order
pub fn group_by_key<'a, T, K, I, F>(items: I, key_fn: F) -> Vec<Group<'a, K, T>>
where
    T: 'a,
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> K,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<Group<'a, K, T>> = Vec::new();

    for item in items {
        let key = key_fn(item);
        match positions.get(&key) {
            Some(&position) => groups[position].items.push(item),
            None => {
                positions.insert(key.clone(), groups.len());
                groups.push(Group { key, items: vec![item] });
            }
        }
    }

    groups
}

/// Stable ascending sort of groups by a secondary attribute
pub fn sort_groups_by<K, T, F>(groups: &mut [Group<'_, K, T>], metric: F)
where
    F: Fn(&Group<'_, K, T>) -> f64,
{
    groups.sort_by(|a, b| metric(a).total_cmp(&metric(b)));
}
