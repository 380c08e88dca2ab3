//! Document-scoped pointer listeners.
//!
//! Every listener is tagged with a namespace so that a subsystem can detach
//! all of its listeners as a unit without touching listeners owned by
//! unrelated code. The registry only records subscriptions; routing an event
//! to the code behind a namespace is left to the owner of the registry.

use core_types::PointerEventKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Listener {
    pub id: ListenerId,
    pub kind: PointerEventKind,
    pub namespace: String,
}

#[derive(Debug, Default)]
pub struct DocumentListeners {
    listeners: Vec<Listener>,
    next_id: u64,
}

impl DocumentListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, kind: PointerEventKind, namespace: &str) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.listeners.push(Listener {
            id,
            kind,
            namespace: namespace.to_string(),
        });
        id
    }

    /// Returns `true` if a listener was removed.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        before != self.listeners.len()
    }

    /// Detach every listener in `namespace`; returns how many were removed.
    pub fn remove_namespace(&mut self, namespace: &str) -> usize {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.namespace != namespace);
        before - self.listeners.len()
    }

    /// Raw number of attached listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Distinct event kinds with at least one listener, in first-bound order.
    pub fn bound_kinds(&self) -> Vec<PointerEventKind> {
        let mut out: Vec<PointerEventKind> = Vec::new();
        for l in &self.listeners {
            if !out.contains(&l.kind) {
                out.push(l.kind);
            }
        }
        out
    }

    /// Distinct namespaces in use, in first-bound order.
    pub fn namespaces(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for l in &self.listeners {
            if !out.contains(&l.namespace.as_str()) {
                out.push(&l.namespace);
            }
        }
        out
    }

    pub fn count_in_namespace(&self, namespace: &str) -> usize {
        self.listeners
            .iter()
            .filter(|l| l.namespace == namespace)
            .count()
    }

    /// Listeners that should observe an event of `kind`, in bound order.
    pub fn listeners_for(&self, kind: PointerEventKind) -> impl Iterator<Item = &Listener> {
        self.listeners.iter().filter(move |l| l.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_a_namespace_as_a_unit() {
        let mut listeners = DocumentListeners::new();
        listeners.add(PointerEventKind::Move, "slider");
        listeners.add(PointerEventKind::Up, "slider");
        let other = listeners.add(PointerEventKind::Move, "app");

        assert_eq!(listeners.len(), 3);
        assert_eq!(listeners.namespaces(), vec!["slider", "app"]);
        assert_eq!(listeners.count_in_namespace("slider"), 2);

        assert_eq!(listeners.remove_namespace("slider"), 2);
        assert_eq!(listeners.len(), 1);
        assert_eq!(listeners.namespaces(), vec!["app"]);

        assert!(listeners.remove(other));
        assert!(!listeners.remove(other));
        assert!(listeners.is_empty());
    }

    #[test]
    fn reports_bound_kinds_once() {
        let mut listeners = DocumentListeners::new();
        listeners.add(PointerEventKind::Up, "a");
        listeners.add(PointerEventKind::Move, "a");
        listeners.add(PointerEventKind::Up, "b");

        assert_eq!(
            listeners.bound_kinds(),
            vec![PointerEventKind::Up, PointerEventKind::Move]
        );
        let up: Vec<&str> = listeners
            .listeners_for(PointerEventKind::Up)
            .map(|l| l.namespace.as_str())
            .collect();
        assert_eq!(up, vec!["a", "b"]);
    }
}
