//! Ordered key collections with explicit dedup rules.
//!
//! Requested keys arrive as positional operands and may repeat. Both sets keep
//! the order of first occurrence and silently drop later duplicates:
//!
//! - [`KeySet`] holds bare keys for read and delete.
//! - [`WriteSet`] holds `(key, value)` pairs for write. A duplicate key keeps
//!   the value of its **first** occurrence, so `a=1 a=2` writes `a=1`.
//!
//! `WriteSet` is also the pending set during a write: the engine removes each
//! key with [`WriteSet::take`] once it has been applied to a line, and whatever
//! remains afterwards is appended to the file.

/// Ordered set of unique keys, in order of first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySet {
    keys: Vec<String>,
}

impl KeySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key` unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        if self.contains(&key) {
            return false;
        }
        self.keys.push(key);
        true
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for KeySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = KeySet::new();
        for key in iter {
            set.insert(key);
        }
        set
    }
}

/// Ordered set of key-value pairs, unique by key, first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteSet {
    pairs: Vec<(String, String)>,
}

impl WriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair unless its key is already present. A later pair for an
    /// existing key is discarded. Returns whether the pair was added.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if self.contains(&key) {
            return false;
        }
        self.pairs.push((key, value.into()));
        true
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Value recorded for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Remove `key` and return its pair. Remaining pairs keep their order.
    pub fn take(&mut self, key: &str) -> Option<(String, String)> {
        let idx = self.pairs.iter().position(|(k, _)| k == key)?;
        Some(self.pairs.remove(idx))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl IntoIterator for WriteSet {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for WriteSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = WriteSet::new();
        for (key, value) in iter {
            set.insert(key, value);
        }
        set
    }
}
