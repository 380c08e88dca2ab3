//! Per-element data cache layered over `data-*` markup attributes.
//!
//! Reads consult the cache first and fall back to the element's
//! `data-<key>` attribute, so values written at runtime shadow the markup
//! without modifying it.

use html::{Id, Node};
use std::collections::HashMap;

/// Cache contents of one element, captured so they can be put back later.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSnapshot(Option<HashMap<String, String>>);

#[derive(Clone, Debug, Default)]
pub struct ElementDataStore {
    values: HashMap<Id, HashMap<String, String>>,
}

impl ElementDataStore {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Cached value only; markup is not consulted.
    pub fn get(&self, id: Id, key: &str) -> Option<&str> {
        self.values
            .get(&id)
            .and_then(|m| m.get(key))
            .map(|s| s.as_str())
    }

    /// Cached value, else the `data-<key>` attribute of `node`.
    pub fn read<'a>(&'a self, node: &'a Node, key: &str) -> Option<&'a str> {
        self.get(node.id(), key)
            .or_else(|| node.attr(&format!("data-{key}")))
    }

    pub fn set(&mut self, id: Id, key: &str, value: String) {
        self.values
            .entry(id)
            .or_default()
            .insert(key.to_string(), value);
    }

    /// Returns the removed value, if one was cached.
    pub fn remove(&mut self, id: Id, key: &str) -> Option<String> {
        let map = self.values.get_mut(&id)?;
        let removed = map.remove(key);
        if map.is_empty() {
            self.values.remove(&id);
        }
        removed
    }

    pub fn keys(&self, id: Id) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .values
            .get(&id)
            .map(|m| m.keys().map(|k| k.as_str()).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }

    pub fn snapshot(&self, id: Id) -> DataSnapshot {
        DataSnapshot(self.values.get(&id).cloned())
    }

    /// Replace everything cached for `id` with `snapshot`.
    pub fn restore(&mut self, id: Id, snapshot: DataSnapshot) {
        match snapshot.0 {
            Some(map) if !map.is_empty() => {
                self.values.insert(id, map);
            }
            _ => {
                self.values.remove(&id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node() -> Node {
        let mut n = Node::element(
            "div",
            vec![("data-cur_min", Some("30")), ("data-rounding", Some("10"))],
            Vec::new(),
        );
        n.set_id(Id(7));
        n
    }

    #[test]
    fn cache_shadows_markup() {
        let n = node();
        let mut data = ElementDataStore::new();
        assert_eq!(data.read(&n, "cur_min"), Some("30"));
        assert_eq!(data.get(n.id(), "cur_min"), None);

        data.set(n.id(), "cur_min", "100".to_string());
        assert_eq!(data.read(&n, "cur_min"), Some("100"));
        assert_eq!(data.read(&n, "rounding"), Some("10"));
        assert_eq!(n.attr("data-cur_min"), Some("30"));

        assert_eq!(data.remove(n.id(), "cur_min"), Some("100".to_string()));
        assert_eq!(data.read(&n, "cur_min"), Some("30"));
    }

    #[test]
    fn restore_puts_back_previous_cache() {
        let n = node();
        let mut data = ElementDataStore::new();
        data.set(n.id(), "user", "kept".to_string());
        let snap = data.snapshot(n.id());

        data.set(n.id(), "initialized", "true".to_string());
        data.set(n.id(), "user", "changed".to_string());
        assert_eq!(data.keys(n.id()), vec!["initialized", "user"]);

        data.restore(n.id(), snap);
        assert_eq!(data.keys(n.id()), vec!["user"]);
        assert_eq!(data.get(n.id(), "user"), Some("kept"));

        let empty = ElementDataStore::new().snapshot(n.id());
        data.restore(n.id(), empty);
        assert!(data.keys(n.id()).is_empty());
    }
}
