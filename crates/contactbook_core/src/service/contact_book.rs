//! Contact book use-case service.
//!
//! # Responsibility
//! - Own the contact arena and the list/index/graph views over it.
//! - Apply caller-facing policy (blank names, self links, lookups) before
//!   touching the failure-free structures.
//!
//! # Invariants
//! - `add_contact` allocates once and registers the same id in list, index
//!   and graph within one call.
//! - Collaborations are resolved through the index before the graph is
//!   mutated.
//! - Log events carry ids and counts only, never phone or email values.

use crate::config::SeedData;
use crate::model::contact::{Contact, ContactId};
use crate::repo::collaboration_graph::CollaborationGraph;
use crate::repo::contact_arena::ContactArena;
use crate::repo::contact_index::ContactIndex;
use crate::repo::contact_list::ContactList;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Policy errors raised by contact book operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactBookError {
    /// Contact name is blank after trim.
    EmptyName,
    /// One or both collaboration endpoints were not provided.
    MissingSelection,
    /// Both collaboration endpoints name the same contact.
    SelfCollaboration(String),
    /// Name did not resolve through the index.
    ContactNotFound(String),
}

impl Display for ContactBookError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "contact name must not be blank"),
            Self::MissingSelection => write!(f, "two contacts must be selected"),
            Self::SelfCollaboration(name) => {
                write!(f, "contact cannot collaborate with itself: {name}")
            }
            Self::ContactNotFound(name) => write!(f, "contact not found: {name}"),
        }
    }
}

impl Error for ContactBookError {}

/// Renderer node: one graph key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: ContactId,
    pub name: String,
}

/// Renderer edge: one undirected collaboration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: ContactId,
    pub to: ContactId,
}

/// Node/edge snapshot consumed by an external graph renderer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphView {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Coordinator over arena, list, index and graph.
#[derive(Debug, Default)]
pub struct ContactBook {
    contacts: ContactArena,
    list: ContactList,
    index: ContactIndex,
    graph: CollaborationGraph,
}

impl ContactBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a book and replays `seed` through the regular add paths.
    ///
    /// Seed contacts with blank names and collaborations that do not
    /// resolve are skipped with a warning.
    pub fn from_seed(seed: &SeedData) -> Self {
        let mut book = Self::new();
        for contact in &seed.contacts {
            if let Err(err) = book.add_contact(&contact.name, &contact.phone, &contact.email) {
                warn!("event=seed_contact module=service status=skipped reason=\"{err}\"");
            }
        }
        for (first, second) in &seed.collaborations {
            if let Err(err) =
                book.add_collaboration(Some(first.as_str()), Some(second.as_str()))
            {
                warn!("event=seed_collaboration module=service status=skipped reason=\"{err}\"");
            }
        }
        info!(
            "event=seed_loaded module=service status=ok contacts={} edges={}",
            book.contacts.len(),
            book.graph.edge_count()
        );
        book
    }

    /// Creates a book with the built-in demo seed.
    pub fn with_builtin_seed() -> Self {
        Self::from_seed(&SeedData::builtin())
    }

    /// Adds one contact to list, index and graph.
    ///
    /// # Contract
    /// - Inputs are trimmed; a blank name returns `EmptyName`.
    /// - A name equal (ignoring case) to an indexed contact is still listed
    ///   and added to the graph, but the index keeps the first contact.
    pub fn add_contact(
        &mut self,
        name: &str,
        phone: &str,
        email: &str,
    ) -> Result<ContactId, ContactBookError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ContactBookError::EmptyName);
        }

        let id = self
            .list
            .append(&mut self.contacts, name, phone.trim(), email.trim());
        let indexed = self.index.insert(&self.contacts, id);
        self.graph.add_contact(id);

        if indexed {
            debug!("event=contact_add module=service status=ok id={id}");
        } else {
            warn!("event=contact_add module=service status=duplicate_name id={id}");
        }
        Ok(id)
    }

    /// Looks up a contact by name through the index.
    pub fn search(&self, name: &str) -> Option<&Contact> {
        self.index.search(&self.contacts, name.trim())
    }

    /// Records a collaboration between two named contacts.
    ///
    /// Returns whether a new edge was created; re-adding an existing edge
    /// succeeds with `false`. Two names that resolve to the same contact
    /// (`"Ana"` and `"ANA"`) are a self-collaboration.
    pub fn add_collaboration(
        &mut self,
        first: Option<&str>,
        second: Option<&str>,
    ) -> Result<bool, ContactBookError> {
        let (first, second) = match (non_blank(first), non_blank(second)) {
            (Some(first), Some(second)) => (first, second),
            _ => return Err(ContactBookError::MissingSelection),
        };
        if first == second {
            return Err(ContactBookError::SelfCollaboration(first.to_string()));
        }

        let first_id = self.resolve(first)?;
        let second_id = self.resolve(second)?;
        if first_id == second_id {
            return Err(ContactBookError::SelfCollaboration(first.to_string()));
        }
        let created = self.graph.add_collaboration(first_id, second_id);
        debug!(
            "event=collaboration_add module=service status=ok from={first_id} to={second_id} created={created}"
        );
        Ok(created)
    }

    /// Full text report: list order, index order, collaborations.
    pub fn report(&self) -> String {
        let mut out = String::new();
        out.push_str("--- Contact list ---\n");
        out.push_str(&self.list.render_all(&self.contacts));
        out.push_str("\n--- Tree in order ---\n");
        out.push_str(&self.index.in_order_text(&self.contacts));
        out.push_str("\n--- Collaborations ---\n");
        out.push_str(&self.graph.render_all(&self.contacts));
        out
    }

    /// Names of every graph key, for selection widgets.
    pub fn selectable_names(&self) -> Vec<String> {
        self.graph
            .contacts()
            .into_iter()
            .filter_map(|id| self.contacts.get(id))
            .map(|contact| contact.name.clone())
            .collect()
    }

    /// Snapshot of graph nodes and edges for rendering.
    pub fn graph_view(&self) -> GraphView {
        let nodes = self
            .graph
            .contacts()
            .into_iter()
            .filter_map(|id| self.contacts.get(id))
            .map(|contact| GraphNode {
                id: contact.id,
                name: contact.name.clone(),
            })
            .collect();
        let edges = self
            .graph
            .edges()
            .into_iter()
            .map(|(from, to)| GraphEdge { from, to })
            .collect();
        GraphView { nodes, edges }
    }

    pub fn contacts(&self) -> &ContactArena {
        &self.contacts
    }

    pub fn list(&self) -> &ContactList {
        &self.list
    }

    pub fn index(&self) -> &ContactIndex {
        &self.index
    }

    pub fn graph(&self) -> &CollaborationGraph {
        &self.graph
    }

    fn resolve(&self, name: &str) -> Result<ContactId, ContactBookError> {
        self.index
            .search(&self.contacts, name)
            .map(|contact| contact.id)
            .ok_or_else(|| ContactBookError::ContactNotFound(name.to_string()))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
