//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical contact record shared by list/index/graph views.
//! - Provide the case-insensitive name comparison used by lookups.
//!
//! # Invariants
//! - `ContactId` is assigned by `ContactArena` and never reused.
//! - A contact record is never copied into a view; views hold `ContactId`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// Stable identifier for one contact inside its arena.
///
/// Ids are dense slot indices, so ordering by id is allocation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(usize);

impl ContactId {
    pub(crate) fn from_slot(slot: usize) -> Self {
        Self(slot)
    }

    /// Returns the raw slot index, used by UI-facing envelopes.
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl Display for ContactId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Canonical contact record.
///
/// Phone and email are free-form and unvalidated; empty strings mean absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    /// Returns whether `name` equals this contact's name ignoring case.
    pub fn name_matches(&self, name: &str) -> bool {
        compare_names(&self.name, name) == Ordering::Equal
    }

    /// Formats the one-line listing used by list and index reports.
    pub fn listing_line(&self) -> String {
        format!(
            "Name: {}, Phone: {}, Email: {}",
            self.name, self.phone, self.email
        )
    }
}

/// Compares two names lexicographically, ignoring case.
///
/// Every character is folded to uppercase and then to lowercase before
/// comparison, so `"ana"`, `"ANA"` and `"Ana"` compare equal, and so do
/// `"Σ"`, `"σ"` and `"ς"`.
pub fn compare_names(left: &str, right: &str) -> Ordering {
    left.chars()
        .map(fold_case)
        .cmp(right.chars().map(fold_case))
}

/// Single-char case fold. Multi-char uppercase mappings (`ß` -> `SS`) keep
/// the original char; multi-char lowercase mappings (`İ` -> `i̇`) keep the
/// leading char.
fn fold_case(c: char) -> char {
    let mut upper = c.to_uppercase();
    let upper = match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    };
    upper.to_lowercase().next().unwrap_or(upper)
}
