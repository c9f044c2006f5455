//! Map with reverse lookup by value.

/// An insertion-ordered map that can also be queried by value.
///
/// # Example
///
/// ```rust
/// use colour_utils::Lookup;
///
/// let persons: Lookup<&str, &str> =
///     [("John", "Doe"), ("Jane", "Doe"), ("Luke", "Skywalker")].into_iter().collect();
///
/// assert_eq!(persons.keys_from_value(&"Doe"), [&"John", &"Jane"]);
/// assert_eq!(persons.first_key_from_value(&"Skywalker"), Some(&"Luke"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Lookup<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> Default for Lookup<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Lookup<K, V> {
    /// Creates an empty lookup.
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the lookup is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl<K: PartialEq, V: PartialEq> Lookup<K, V> {
    /// Inserts or replaces the value stored under `key`.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns every key whose value equals `value`, in insertion order.
    pub fn keys_from_value(&self, value: &V) -> Vec<&K> {
        self.entries
            .iter()
            .filter(|(_, v)| v == value)
            .map(|(k, _)| k)
            .collect()
    }

    /// Returns the first key whose value equals `value`.
    pub fn first_key_from_value(&self, value: &V) -> Option<&K> {
        self.entries.iter().find(|(_, v)| v == value).map(|(k, _)| k)
    }
}

impl<K: PartialEq, V: PartialEq> FromIterator<(K, V)> for Lookup<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut lookup = Self::new();
        for (k, v) in iter {
            lookup.insert(k, v);
        }
        lookup
    }
}
