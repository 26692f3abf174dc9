use crate::collections::{list, LinkedList, Pair};

/// Key/value map that remembers insertion order. Lookups scan the chain, O(n).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderedMap<K, V> {
    entries: LinkedList<Pair<K, V>>,
}

impl<K, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self {
            entries: LinkedList::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.entries.iter().map(|entry| (&entry.first, &entry.second))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(|entry| &entry.first)
    }
}

impl<K: Eq, V> OrderedMap<K, V> {
    /// Update the value in place, or append a new entry. Returns the previous value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(slot) = self.get_mut(&key) {
            return Some(std::mem::replace(slot, value));
        }
        self.entries.insert_end(Pair::new(key, value));
        None
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries
            .iter()
            .find(|entry| entry.first == *key)
            .map(|entry| &entry.second)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.entries
            .iter_mut()
            .find(|entry| entry.first == *key)
            .map(|entry| &mut entry.second)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.entries.position(|entry| entry.first == *key)?;
        self.entries.remove_at(index).ok().map(|entry| entry.second)
    }
}

impl<K: Eq, V: Default> OrderedMap<K, V> {
    /// The value for `key`, appending a default entry first if it is missing.
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V {
        let entry = self
            .entries
            .find_or_insert_end(Pair::new(key, V::default()), |a, b| a.first == b.first);
        &mut entry.second
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = &'a Pair<K, V>;
    type IntoIter = list::Iter<'a, Pair<K, V>>;
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
