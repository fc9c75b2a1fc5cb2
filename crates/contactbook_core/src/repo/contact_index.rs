//! Binary search tree index over contact names.
//!
//! # Responsibility
//! - Keep contacts ordered by case-insensitive name.
//! - Provide average O(log n) lookup and in-order enumeration.
//!
//! # Invariants
//! - No two nodes hold names that are equal ignoring case; the first
//!   inserted contact wins and later equal names are dropped.
//! - Left subtree names sort before the node, right subtree names after.
//! - The tree is never rebalanced; shape depends on insertion order.
//!
//! Traversals and drop are iterative so a degenerate (sorted-insert) tree
//! cannot exhaust the call stack.

use crate::model::contact::{compare_names, Contact, ContactId};
use crate::repo::contact_arena::ContactArena;
use std::cmp::Ordering;

type Link = Option<Box<IndexNode>>;

#[derive(Debug)]
struct IndexNode {
    contact: ContactId,
    left: Link,
    right: Link,
}

impl IndexNode {
    fn leaf(contact: ContactId) -> Box<Self> {
        Box::new(Self {
            contact,
            left: None,
            right: None,
        })
    }
}

/// Unbalanced BST keyed by contact name, ignoring case.
#[derive(Debug, Default)]
pub struct ContactIndex {
    root: Link,
    len: usize,
}

impl ContactIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `contact` at its ordered position.
    ///
    /// Returns `false` when a node with an equal name already exists (the
    /// tree is left untouched) or when `contact` is unknown to `arena`.
    pub fn insert(&mut self, arena: &ContactArena, contact: ContactId) -> bool {
        let Some(new_name) = arena.get(contact).map(|record| record.name.as_str()) else {
            return false;
        };

        let mut link = &mut self.root;
        while let Some(node) = link {
            let Some(existing) = arena.get(node.contact) else {
                return false;
            };
            link = match compare_names(new_name, &existing.name) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }

        *link = Some(IndexNode::leaf(contact));
        self.len += 1;
        true
    }

    /// Finds the contact whose name equals `name` ignoring case.
    pub fn search<'a>(&self, arena: &'a ContactArena, name: &str) -> Option<&'a Contact> {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            let contact = arena.get(node.contact)?;
            cursor = match compare_names(name, &contact.name) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(contact),
            };
        }
        None
    }

    /// Returns contact ids in left-root-right order.
    pub fn in_order(&self) -> Vec<ContactId> {
        let mut ordered = Vec::with_capacity(self.len);
        let mut stack: Vec<&IndexNode> = Vec::new();
        let mut cursor = self.root.as_deref();

        while cursor.is_some() || !stack.is_empty() {
            while let Some(node) = cursor {
                stack.push(node);
                cursor = node.left.as_deref();
            }
            if let Some(node) = stack.pop() {
                ordered.push(node.contact);
                cursor = node.right.as_deref();
            }
        }
        ordered
    }

    /// Renders one listing line per contact in ascending name order.
    pub fn in_order_text(&self, arena: &ContactArena) -> String {
        let mut out = String::new();
        for contact in self.in_order().into_iter().filter_map(|id| arena.get(id)) {
            out.push_str(&contact.listing_line());
            out.push('\n');
        }
        out
    }

    /// Number of levels on the longest root-to-leaf path; `0` when empty.
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&IndexNode, usize)> = self
            .root
            .as_deref()
            .map(|node| (node, 1))
            .into_iter()
            .collect();

        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            if let Some(left) = node.left.as_deref() {
                stack.push((left, depth + 1));
            }
            if let Some(right) = node.right.as_deref() {
                stack.push((right, depth + 1));
            }
        }
        deepest
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

impl Drop for ContactIndex {
    fn drop(&mut self) {
        let mut pending: Vec<Box<IndexNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}
