//! FFI use-case API for GUI-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to the UI via FRB.
//! - Hold one contact book per session handle; no process-wide book.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every mutating call runs under the session mutex, so an added contact
//!   appears in list, index and graph together.

use contactbook_core::{
    init_logging as init_logging_inner, AppConfig, Command, CommandOutcome, ContactBook,
};
use log::info;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Response envelope for one UI action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the action was applied or answered positively.
    pub ok: bool,
    /// Status lines appended to the output area.
    pub lines: Vec<String>,
    /// Whether the graph panel should redraw.
    pub graph_changed: bool,
}

impl From<CommandOutcome> for ActionResponse {
    fn from(value: CommandOutcome) -> Self {
        Self {
            ok: value.ok,
            lines: value.lines,
            graph_changed: value.graph_changed,
        }
    }
}

/// Graph node for the circular renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNodeItem {
    pub id: usize,
    pub name: String,
}

/// Undirected edge between two node ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEdgeItem {
    pub from: usize,
    pub to: usize,
}

/// Full node/edge snapshot taken under the session lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphSnapshot {
    pub nodes: Vec<GraphNodeItem>,
    pub edges: Vec<GraphEdgeItem>,
}

/// One contact book owned by the UI.
#[flutter_rust_bridge::frb(opaque)]
pub struct ContactBookSession {
    book: Mutex<ContactBook>,
}

impl ContactBookSession {
    /// Opens a session preloaded with the built-in demo contacts.
    #[flutter_rust_bridge::frb(sync)]
    pub fn new_seeded() -> Self {
        Self::wrap(ContactBook::with_builtin_seed())
    }

    /// Opens an empty session.
    #[flutter_rust_bridge::frb(sync)]
    pub fn new_empty() -> Self {
        Self::wrap(ContactBook::new())
    }

    /// Opens a session seeded from a JSON config document.
    ///
    /// Returns the config error message when parsing or validation fails.
    #[flutter_rust_bridge::frb(sync)]
    pub fn from_config_json(config_json: String) -> Result<Self, String> {
        let config = AppConfig::from_json_str(&config_json).map_err(|err| err.to_string())?;
        Ok(Self::wrap(ContactBook::from_seed(&config.seed)))
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn add_contact(&self, name: String, phone: String, email: String) -> ActionResponse {
        self.run(Command::AddContact { name, phone, email })
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn search(&self, name: String) -> ActionResponse {
        self.run(Command::Search { name })
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn show_all(&self) -> ActionResponse {
        self.run(Command::ShowAll)
    }

    /// `None` means the corresponding selector is empty.
    #[flutter_rust_bridge::frb(sync)]
    pub fn add_collaboration(
        &self,
        first: Option<String>,
        second: Option<String>,
    ) -> ActionResponse {
        self.run(Command::AddCollaboration { first, second })
    }

    /// Names for both collaboration selectors.
    #[flutter_rust_bridge::frb(sync)]
    pub fn selectable_names(&self) -> Vec<String> {
        self.lock().selectable_names()
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn graph_snapshot(&self) -> GraphSnapshot {
        let view = self.lock().graph_view();
        GraphSnapshot {
            nodes: view
                .nodes
                .into_iter()
                .map(|node| GraphNodeItem {
                    id: node.id.as_usize(),
                    name: node.name,
                })
                .collect(),
            edges: view
                .edges
                .into_iter()
                .map(|edge| GraphEdgeItem {
                    from: edge.from.as_usize(),
                    to: edge.to.as_usize(),
                })
                .collect(),
        }
    }

    fn wrap(book: ContactBook) -> Self {
        info!(
            "event=session_open module=ffi status=ok contacts={}",
            book.contacts().len()
        );
        Self {
            book: Mutex::new(book),
        }
    }

    fn run(&self, command: Command) -> ActionResponse {
        self.lock().dispatch(command).into()
    }

    fn lock(&self) -> MutexGuard<'_, ContactBook> {
        // Dispatch never panics mid-mutation; a poisoned guard is reusable.
        self.book.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
