use crate::cursors::KeyCursor;
use std::collections::HashMap;
use std::hash::Hash;

/// Insertion-ordered mapping
///
/// Enumerating a `Mapping` yields its keys in the order they were first
/// inserted. Replacing the value of an existing key keeps its original slot.
#[derive(Debug, Clone)]
pub struct Mapping<K, V> {
    keys: Vec<K>,
    values: Vec<V>,
    index: HashMap<K, usize>,
}

impl<K, V> Default for Mapping<K, V> {
    fn default() -> Self {
        Mapping {
            keys: Vec::new(),
            values: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Hash + Eq + Clone, V> Mapping<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous value stored under `key`
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&slot) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.values[slot], value));
        }

        self.index.insert(key.clone(), self.keys.len());
        self.keys.push(key);
        self.values.push(value);
        None
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&slot| &self.values[slot])
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }
}

impl<K, V> Mapping<K, V> {
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Fresh cursor over the keys, in insertion order
    pub fn keys(&self) -> KeyCursor<std::slice::Iter<'_, K>> {
        KeyCursor::new(self.keys.iter())
    }

    pub fn values(&self) -> &[V] {
        &self.values
    }
}

impl<K: Hash + Eq + Clone, V> FromIterator<(K, V)> for Mapping<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Mapping::new();
        for (key, value) in iter {
            mapping.insert(key, value);
        }
        mapping
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::step::Step;

    #[test]
    fn test_insertion_order_kept() {
        let mapping: Mapping<&str, i32> = [("c", 3), ("a", 1), ("b", 2)].into_iter().collect();
        let mut keys = mapping.keys();

        assert_eq!(keys.advance(), Ok(Step::Item(&"c")));
        assert_eq!(keys.advance(), Ok(Step::Item(&"a")));
        assert_eq!(keys.advance(), Ok(Step::Item(&"b")));
        assert_eq!(keys.advance(), Ok(Step::EndOfSequence));
    }

    #[test]
    fn test_replace_keeps_slot() {
        let mut mapping = Mapping::new();
        assert_eq!(mapping.insert("a", 1), None);
        assert_eq!(mapping.insert("b", 2), None);
        assert_eq!(mapping.insert("a", 10), Some(1));

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get(&"a"), Some(&10));
        assert_eq!(mapping.values(), &[10, 2]);

        let mut keys = mapping.keys();
        assert_eq!(keys.advance(), Ok(Step::Item(&"a")));
    }

    #[test]
    fn test_lookup() {
        let mapping: Mapping<String, u8> = [("x".to_string(), 1)].into_iter().collect();

        assert!(mapping.contains_key(&"x".to_string()));
        assert!(!mapping.contains_key(&"y".to_string()));
        assert_eq!(mapping.get(&"y".to_string()), None);
    }

    #[test]
    fn test_empty_mapping() {
        let mapping: Mapping<u8, u8> = Mapping::new();
        let mut keys = mapping.keys();

        assert!(mapping.is_empty());
        assert_eq!(keys.advance(), Ok(Step::EndOfSequence));
    }
}
