//! Authoritative contact storage.
//!
//! # Responsibility
//! - Own every `Contact` record exactly once.
//! - Hand out stable `ContactId`s that list/index/graph views reference.
//!
//! # Invariants
//! - Records are never removed or reordered; ids stay valid for the arena
//!   lifetime.
//! - Lookups with an id from another arena return `None` instead of panicking.

use crate::model::contact::{Contact, ContactId};

/// Append-only arena of contact records.
#[derive(Debug, Default)]
pub struct ContactArena {
    records: Vec<Contact>,
}

impl ContactArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores one new contact and returns its id.
    pub fn alloc(
        &mut self,
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> ContactId {
        let id = ContactId::from_slot(self.records.len());
        self.records.push(Contact {
            id,
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        });
        id
    }

    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.records.get(id.as_usize())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.records.iter()
    }
}
