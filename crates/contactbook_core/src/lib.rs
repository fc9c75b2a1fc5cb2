//! Core domain logic for the contact book.
//! This crate is the single source of truth for contact invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{AppConfig, ConfigError, SeedContact, SeedData};
pub use logging::{default_log_level, init_console_logging, init_logging, logging_status};
pub use model::contact::{compare_names, Contact, ContactId};
pub use repo::collaboration_graph::CollaborationGraph;
pub use repo::contact_arena::ContactArena;
pub use repo::contact_index::ContactIndex;
pub use repo::contact_list::{ContactList, EMPTY_LIST_MESSAGE};
pub use service::command::{Command, CommandOutcome};
pub use service::contact_book::{ContactBook, ContactBookError, GraphEdge, GraphNode, GraphView};

/// Core crate version, printed in host banners.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
