//! In-memory contact structures.
//!
//! # Responsibility
//! - Store contacts once (`ContactArena`) and expose list, BST and graph
//!   views that reference them by `ContactId`.
//!
//! # Invariants
//! - Structures are failure-free: absence is reported through `Option` or
//!   empty results, never errors.
//! - Structures do not keep each other in sync; `service::contact_book`
//!   does.

pub mod collaboration_graph;
pub mod contact_arena;
pub mod contact_index;
pub mod contact_list;
