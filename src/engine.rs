//! Key-edit engine: apply a read, write or delete to a [`LineStore`].
//!
//! Every function here is pure. The input store is never modified; write and
//! delete build a new store from it. Lines that no requested key matches are
//! carried over byte for byte and in their original order.
//!
//! The three operations deliberately differ in how they treat repeated keys
//! in the file:
//!
//! | Operation | Key on several lines |
//! |-----------|----------------------|
//! | read      | last line in file order wins |
//! | write     | only the first line is replaced, later ones are left stale |
//! | delete    | every matching line is removed |

use std::collections::HashMap;

use tracing::debug;

use crate::keyset::{KeySet, WriteSet};
use crate::store::{self, LineStore};

/// Result of a write: the new store plus which keys went where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    pub store: LineStore,
    /// Keys that replaced an existing line, in file order.
    pub replaced: Vec<String>,
    /// Keys appended at the end, in requested order.
    pub appended: Vec<String>,
}

/// Result of a delete: the new store and the number of lines dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub store: LineStore,
    pub removed: usize,
}

/// Look up every key in `keys`.
///
/// Returns one `(key, value)` per requested key in requested order. Values
/// are the raw trimmed bytes from the file. A key that no line assigns gets
/// an empty value.
pub fn read_values(lines: &LineStore, keys: &KeySet) -> Vec<(String, Vec<u8>)> {
    let mut found: HashMap<&str, &[u8]> = HashMap::new();

    for line in lines.lines() {
        if store::is_comment(line) {
            continue;
        }
        for key in keys.iter() {
            if let Some(idx) = store::match_key(line, key) {
                found.insert(key, store::value_at(line, idx));
            }
        }
    }

    keys.iter()
        .map(|key| {
            let value = found.get(key).copied().unwrap_or_default();
            (key.to_string(), value.to_vec())
        })
        .collect()
}

/// Set every pair in `pairs`.
///
/// The first line assigning a key is replaced with `key=value`; that key is
/// then done and later lines for it stay as they were. Keys no line assigns
/// are appended in requested order.
pub fn write_pairs(lines: &LineStore, pairs: &WriteSet) -> WriteOutcome {
    let mut pending = pairs.clone();
    let mut replaced = Vec::new();
    let mut out = Vec::with_capacity(lines.len() + pairs.len());

    for line in lines.lines() {
        let hit = pending
            .keys()
            .find(|key| store::match_key(line, key).is_some())
            .map(str::to_string);

        match hit.and_then(|key| pending.take(&key)) {
            Some((key, value)) => {
                debug!(%key, %value, "replacing line {}", out.len() + 1);
                out.push(store::format_pair(&key, &value));
                replaced.push(key);
            }
            None => out.push(line.clone()),
        }
    }

    let mut appended = Vec::with_capacity(pending.len());
    for (key, value) in pending {
        debug!(%key, %value, "appending new pair");
        out.push(store::format_pair(&key, &value));
        appended.push(key);
    }

    WriteOutcome {
        store: LineStore::new(out),
        replaced,
        appended,
    }
}

/// Remove every line that assigns any key in `keys`.
pub fn delete_keys(lines: &LineStore, keys: &KeySet) -> DeleteOutcome {
    let kept: Vec<Vec<u8>> = lines
        .lines()
        .iter()
        .filter(|line| !keys.iter().any(|key| store::match_key(line, key).is_some()))
        .cloned()
        .collect();

    let removed = lines.len() - kept.len();
    debug!(removed, "deleted matching lines");

    DeleteOutcome {
        store: LineStore::new(kept),
        removed,
    }
}
