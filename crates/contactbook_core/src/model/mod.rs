//! Contact domain model.
//!
//! # Invariants
//! - Every contact is identified by an arena-assigned `ContactId`.
//! - Name lookups and ordering ignore case.

pub mod contact;
