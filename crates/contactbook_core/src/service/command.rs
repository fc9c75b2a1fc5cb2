//! Command handlers for UI-driven actions.
//!
//! # Responsibility
//! - Map one user action to one synchronous `ContactBook` call.
//! - Translate policy errors into the status lines shown by the UI.
//!
//! # Invariants
//! - Commands are handled one at a time on the caller's thread.
//! - Dispatch never panics; every outcome carries at least one status line.

use crate::service::contact_book::{ContactBook, ContactBookError};
use log::info;

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a contact to list, index and graph.
    AddContact {
        name: String,
        phone: String,
        email: String,
    },
    /// Look a contact up by name.
    Search { name: String },
    /// Render list, index and graph reports.
    ShowAll,
    /// Link two contacts selected by name. `None` means nothing selected.
    AddCollaboration {
        first: Option<String>,
        second: Option<String>,
    },
}

impl Command {
    fn label(&self) -> &'static str {
        match self {
            Self::AddContact { .. } => "add_contact",
            Self::Search { .. } => "search",
            Self::ShowAll => "show_all",
            Self::AddCollaboration { .. } => "add_collaboration",
        }
    }
}

/// Result of dispatching one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Whether the action was applied or answered positively.
    pub ok: bool,
    /// Status lines to append to the UI output area.
    pub lines: Vec<String>,
    /// Whether graph nodes or edges changed and a redraw is due.
    pub graph_changed: bool,
}

impl CommandOutcome {
    fn success(line: impl Into<String>, graph_changed: bool) -> Self {
        Self {
            ok: true,
            lines: vec![line.into()],
            graph_changed,
        }
    }

    fn failure(line: impl Into<String>) -> Self {
        Self {
            ok: false,
            lines: vec![line.into()],
            graph_changed: false,
        }
    }
}

impl ContactBook {
    /// Handles one command and returns its status lines.
    pub fn dispatch(&mut self, command: Command) -> CommandOutcome {
        let label = command.label();
        let outcome = match command {
            Command::AddContact { name, phone, email } => {
                match self.add_contact(&name, &phone, &email) {
                    Ok(_) => CommandOutcome::success(
                        format!("Contact added: {}", name.trim()),
                        true,
                    ),
                    Err(err) => CommandOutcome::failure(status_line(&err)),
                }
            }
            Command::Search { name } => match self.search(&name) {
                Some(contact) => CommandOutcome::success(
                    format!(
                        "Found: {}, {}, {}",
                        contact.name, contact.phone, contact.email
                    ),
                    false,
                ),
                None => CommandOutcome::failure("Contact not found"),
            },
            Command::ShowAll => CommandOutcome {
                ok: true,
                lines: self.report().lines().map(str::to_string).collect(),
                graph_changed: false,
            },
            Command::AddCollaboration { first, second } => {
                match self.add_collaboration(first.as_deref(), second.as_deref()) {
                    Ok(created) => CommandOutcome::success(
                        format!(
                            "Collaboration added between {} and {}",
                            first.as_deref().unwrap_or_default().trim(),
                            second.as_deref().unwrap_or_default().trim()
                        ),
                        created,
                    ),
                    Err(err) => CommandOutcome::failure(status_line(&err)),
                }
            }
        };

        info!(
            "event=command module=service command={} status={}",
            label,
            if outcome.ok { "ok" } else { "rejected" }
        );
        outcome
    }
}

fn status_line(err: &ContactBookError) -> &'static str {
    match err {
        ContactBookError::EmptyName => "Name is required.",
        ContactBookError::MissingSelection => "You must select two contacts.",
        ContactBookError::SelfCollaboration(_) => "A contact cannot collaborate with itself.",
        ContactBookError::ContactNotFound(_) => "Error looking up contacts for collaboration.",
    }
}
