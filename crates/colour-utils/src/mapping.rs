//! Case-insensitive mappings.
//!
//! Method and dataset tables across the colour crates are keyed by human
//! names (`"Iridas Cube"`, `"CIE Lab"`, `"D65"`). [`CaseInsensitiveMapping`]
//! lets callers spell those names in any case while still reporting the
//! original spelling when iterating.
//!
//! [`LazyCaseInsensitiveMapping`] adds deferred values: a closure stored with
//! [`LazyCaseInsensitiveMapping::insert_lazy`] runs on first access and its
//! result replaces it.

use std::cell::{Cell, OnceCell};
use std::collections::HashMap;
use std::fmt;
use std::ops::Index;

#[inline]
fn fold(key: &str) -> String {
    key.to_lowercase()
}

/// A mutable mapping whose key lookups ignore case.
///
/// Entries keep their insertion order. Each entry stores the original key
/// spelling next to its value; the lowered key is only used for lookup.
///
/// # Example
///
/// ```rust
/// use colour_utils::CaseInsensitiveMapping;
///
/// let methods: CaseInsensitiveMapping<i32> =
///     [("McCamy", 1), ("Hernandez", 2)].into_iter().collect();
///
/// assert_eq!(methods["mccamy"], 1);
/// assert_eq!(methods.keys().collect::<Vec<_>>(), ["McCamy", "Hernandez"]);
/// ```
#[derive(Clone)]
pub struct CaseInsensitiveMapping<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> Default for CaseInsensitiveMapping<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> CaseInsensitiveMapping<V> {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates an empty mapping with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Inserts a value, returning the one previously stored under the same
    /// case-folded key.
    ///
    /// Replacing an entry keeps its position but adopts the new key spelling.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        let folded = fold(&key);
        match self.index.get(&folded) {
            Some(&i) => {
                let slot = &mut self.entries[i];
                slot.0 = key;
                Some(std::mem::replace(&mut slot.1, value))
            }
            None => {
                self.index.insert(folded, self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Returns the value stored under `key`, ignoring case.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(&fold(key)).map(|&i| &self.entries[i].1)
    }

    /// Returns the original key spelling and value stored under `key`.
    pub fn get_key_value(&self, key: &str) -> Option<(&str, &V)> {
        self.index.get(&fold(key)).map(|&i| {
            let (k, v) = &self.entries[i];
            (k.as_str(), v)
        })
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let i = *self.index.get(&fold(key))?;
        Some(&mut self.entries[i].1)
    }

    /// Returns true if the mapping holds `key` in any case.
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(&fold(key))
    }

    /// Removes `key` and returns its value.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let i = self.index.remove(&fold(key))?;
        let (_, value) = self.entries.remove(i);
        for pos in self.index.values_mut() {
            if *pos > i {
                *pos -= 1;
            }
        }
        Some(value)
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the mapping is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Original key spellings in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Iterates `(original key, value)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Iterates `(lowered key, value)` pairs in insertion order.
    pub fn lower_items(&self) -> impl Iterator<Item = (String, &V)> {
        self.entries.iter().map(|(k, v)| (fold(k), v))
    }
}

/// Iterator over `(original key, value)` pairs of a [`CaseInsensitiveMapping`].
pub struct Iter<'a, V> {
    inner: std::slice::Iter<'a, (String, V)>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<'a, V> IntoIterator for &'a CaseInsensitiveMapping<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for CaseInsensitiveMapping<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        mapping.extend(iter);
        mapping
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for CaseInsensitiveMapping<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<V> Index<&str> for CaseInsensitiveMapping<V> {
    type Output = V;

    fn index(&self, key: &str) -> &V {
        match self.get(key) {
            Some(v) => v,
            None => panic!("key {key:?} not found in CaseInsensitiveMapping"),
        }
    }
}

// Equality ignores key case and insertion order.
impl<V: PartialEq> PartialEq for CaseInsensitiveMapping<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .lower_items()
                .all(|(k, v)| other.get(&k).is_some_and(|o| o == v))
    }
}

impl<V: fmt::Debug> fmt::Debug for CaseInsensitiveMapping<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CaseInsensitiveMapping(")?;
        f.debug_map().entries(self.iter()).finish()?;
        f.write_str(")")
    }
}

/// Deferred initializer for a lazy mapping value.
type Thunk<V> = Box<dyn FnOnce() -> V>;

struct LazyValue<V> {
    value: OnceCell<V>,
    init: Cell<Option<Thunk<V>>>,
}

impl<V> LazyValue<V> {
    fn ready(value: V) -> Self {
        Self {
            value: OnceCell::from(value),
            init: Cell::new(None),
        }
    }

    fn pending(init: Thunk<V>) -> Self {
        Self {
            value: OnceCell::new(),
            init: Cell::new(Some(init)),
        }
    }

    fn force(&self) -> Option<&V> {
        if let Some(v) = self.value.get() {
            return Some(v);
        }
        // None only while the initializer itself is running.
        let init = self.init.take()?;
        Some(self.value.get_or_init(init))
    }

    fn is_evaluated(&self) -> bool {
        self.value.get().is_some()
    }

    fn into_value(self) -> Option<V> {
        match self.value.into_inner() {
            Some(v) => Some(v),
            None => self.init.into_inner().map(|init| init()),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for LazyValue<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.get() {
            Some(v) => v.fmt(f),
            None => f.write_str("<lazy>"),
        }
    }
}

/// A [`CaseInsensitiveMapping`] whose values may be computed on first access.
///
/// # Example
///
/// ```rust
/// use colour_utils::LazyCaseInsensitiveMapping;
///
/// let mut methods = LazyCaseInsensitiveMapping::new();
/// methods.insert("McCamy", 1);
/// methods.insert_lazy("Hernandez", || 2);
///
/// assert!(!methods.is_evaluated("hernandez"));
/// assert_eq!(methods.get("hernandez"), Some(&2));
/// assert!(methods.is_evaluated("hernandez"));
/// ```
pub struct LazyCaseInsensitiveMapping<V> {
    inner: CaseInsensitiveMapping<LazyValue<V>>,
}

impl<V> Default for LazyCaseInsensitiveMapping<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> LazyCaseInsensitiveMapping<V> {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self {
            inner: CaseInsensitiveMapping::new(),
        }
    }

    /// Stores an already computed value.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        self.inner.insert(key, LazyValue::ready(value));
    }

    /// Stores a closure evaluated the first time `key` is read.
    pub fn insert_lazy<F>(&mut self, key: impl Into<String>, init: F)
    where
        F: FnOnce() -> V + 'static,
    {
        self.inner.insert(key, LazyValue::pending(Box::new(init)));
    }

    /// Returns the value under `key`, evaluating it first if needed.
    ///
    /// The initializer runs at most once per key.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.inner.get(key)?.force()
    }

    /// Returns true if `key` holds a computed value.
    pub fn is_evaluated(&self, key: &str) -> bool {
        self.inner.get(key).is_some_and(LazyValue::is_evaluated)
    }

    /// Returns true if the mapping holds `key` in any case.
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Removes `key`, evaluating its value if it was still pending.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.inner.remove(key)?.into_value()
    }

    /// Original key spellings in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.inner.keys()
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the mapping is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<V: fmt::Debug> fmt::Debug for LazyCaseInsensitiveMapping<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LazyCaseInsensitiveMapping(")?;
        f.debug_map().entries(self.inner.iter()).finish()?;
        f.write_str(")")
    }
}
