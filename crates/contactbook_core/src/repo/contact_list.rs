//! Append-only singly linked contact list.
//!
//! # Responsibility
//! - Record contacts in insertion order.
//! - Provide linear, case-insensitive lookup by name.
//!
//! # Invariants
//! - Nodes are never unlinked; `len` only grows.
//! - Traversal from `head` following `next` visits contacts in append order.

use crate::model::contact::{Contact, ContactId};
use crate::repo::contact_arena::ContactArena;

/// Fixed report text for an empty list.
pub const EMPTY_LIST_MESSAGE: &str = "No contacts registered.";

#[derive(Debug, Clone, Copy)]
struct ListNode {
    contact: ContactId,
    next: Option<usize>,
}

/// Singly linked list of contact references.
///
/// Nodes live in a slab and link by slot index; `tail` keeps append O(1).
#[derive(Debug, Default)]
pub struct ContactList {
    nodes: Vec<ListNode>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl ContactList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a contact in `arena` and links it after the current tail.
    pub fn append(
        &mut self,
        arena: &mut ContactArena,
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> ContactId {
        let id = arena.alloc(name, phone, email);
        self.append_existing(id);
        id
    }

    /// Links an already allocated contact after the current tail.
    pub fn append_existing(&mut self, contact: ContactId) {
        let slot = self.nodes.len();
        self.nodes.push(ListNode {
            contact,
            next: None,
        });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
    }

    /// Returns the first contact whose name matches ignoring case.
    pub fn find_by_name<'a>(&self, arena: &'a ContactArena, name: &str) -> Option<&'a Contact> {
        self.iter()
            .filter_map(|id| arena.get(id))
            .find(|contact| contact.name_matches(name))
    }

    /// Renders one line per contact in insertion order.
    pub fn render_all(&self, arena: &ContactArena) -> String {
        if self.is_empty() {
            return format!("{EMPTY_LIST_MESSAGE}\n");
        }

        let mut out = String::new();
        for contact in self.iter().filter_map(|id| arena.get(id)) {
            out.push_str(&contact.listing_line());
            out.push('\n');
        }
        out
    }

    /// Walks the links from head to tail.
    pub fn iter(&self) -> ListIter<'_> {
        ListIter {
            list: self,
            cursor: self.head,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

/// Iterator over list links, yielding contact ids.
pub struct ListIter<'a> {
    list: &'a ContactList,
    cursor: Option<usize>,
}

impl Iterator for ListIter<'_> {
    type Item = ContactId;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.nodes.get(self.cursor?)?;
        self.cursor = node.next;
        Some(node.contact)
    }
}
