//! Undirected collaboration graph over contacts.
//!
//! # Responsibility
//! - Track which contacts participate in the graph.
//! - Store symmetric collaboration edges and answer adjacency queries.
//!
//! # Invariants
//! - Keys are `ContactId`s; one key per contact added via `add_contact`.
//! - Edges only connect two present keys.
//! - Every edge is stored in both neighbor sets or in neither.
//! - Neighbor sets are sets, so re-adding an edge is a no-op.

use crate::model::contact::ContactId;
use crate::repo::contact_arena::ContactArena;
use std::collections::{BTreeMap, BTreeSet};

/// Adjacency-set graph keyed by contact id.
#[derive(Debug, Default)]
pub struct CollaborationGraph {
    adjacency: BTreeMap<ContactId, BTreeSet<ContactId>>,
}

impl CollaborationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `contact` with no neighbors. Returns `false` if already present.
    pub fn add_contact(&mut self, contact: ContactId) -> bool {
        if self.adjacency.contains_key(&contact) {
            return false;
        }
        self.adjacency.insert(contact, BTreeSet::new());
        true
    }

    /// Connects `first` and `second` in both directions.
    ///
    /// Silently ignored when either endpoint is absent. Returns whether a new
    /// edge was created.
    pub fn add_collaboration(&mut self, first: ContactId, second: ContactId) -> bool {
        if !self.contains(first) || !self.contains(second) {
            return false;
        }

        let mut created = false;
        if let Some(neighbors) = self.adjacency.get_mut(&first) {
            created |= neighbors.insert(second);
        }
        if let Some(neighbors) = self.adjacency.get_mut(&second) {
            created |= neighbors.insert(first);
        }
        created
    }

    /// Snapshot of every key. Callers must not depend on the order.
    pub fn contacts(&self) -> Vec<ContactId> {
        self.adjacency.keys().copied().collect()
    }

    /// Neighbor set of `contact`; empty when the contact is absent.
    pub fn neighbors(&self, contact: ContactId) -> BTreeSet<ContactId> {
        self.adjacency.get(&contact).cloned().unwrap_or_default()
    }

    /// Every undirected edge exactly once, as `(lower, higher)` id pairs.
    pub fn edges(&self) -> Vec<(ContactId, ContactId)> {
        self.adjacency
            .iter()
            .flat_map(|(from, neighbors)| {
                neighbors
                    .range(*from..)
                    .map(move |to| (*from, *to))
            })
            .collect()
    }

    pub fn contains(&self, contact: ContactId) -> bool {
        self.adjacency.contains_key(&contact)
    }

    pub fn degree(&self, contact: ContactId) -> usize {
        self.adjacency.get(&contact).map_or(0, BTreeSet::len)
    }

    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Renders `"{name} collaborates with: a, b"` per key.
    pub fn render_all(&self, arena: &ContactArena) -> String {
        let mut out = String::new();
        for (contact, neighbors) in &self.adjacency {
            let Some(record) = arena.get(*contact) else {
                continue;
            };
            let names = neighbors
                .iter()
                .filter_map(|id| arena.get(*id))
                .map(|neighbor| neighbor.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            out.push_str(&format!("{} collaborates with: {}\n", record.name, names));
        }
        out
    }
}
