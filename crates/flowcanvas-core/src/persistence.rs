//! Persistence port for workflows.
//!
//! The engine never talks to the network. Adapters (browser `fetch`, native
//! HTTP client, in-memory) implement [`WorkflowRepository`]; the editor only
//! sees snapshots going in and out. Futures are not `Send` so the same trait
//! serves the single-threaded browser runtime.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::snapshot::GraphSnapshot;

/// Server-assigned workflow identifier.
///
/// Backends hand these out as strings or integers; both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawWorkflowId", into = "String")]
pub struct WorkflowId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawWorkflowId {
    Text(String),
    Number(u64),
}

impl TryFrom<RawWorkflowId> for WorkflowId {
    type Error = PersistenceError;

    fn try_from(raw: RawWorkflowId) -> Result<Self, Self::Error> {
        match raw {
            RawWorkflowId::Text(text) => Self::new(text),
            RawWorkflowId::Number(n) => Self::new(n.to_string()),
        }
    }
}

impl From<WorkflowId> for String {
    fn from(id: WorkflowId) -> Self {
        id.0
    }
}

impl WorkflowId {
    /// # Errors
    /// Returns [`PersistenceError::Decode`] for an empty or blank id.
    pub fn new(id: impl Into<String>) -> Result<Self, PersistenceError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(PersistenceError::Decode {
                reason: "workflow id cannot be empty".to_string(),
            });
        }
        Ok(Self(id))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkflowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Entry of the workflow list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowSummary {
    pub id: WorkflowId,
    #[serde(default)]
    pub name: String,
}

impl WorkflowSummary {
    /// Name to show in lists; unnamed workflows fall back to their id
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.name.trim().is_empty() {
            format!("Workflow #{}", self.id)
        } else {
            self.name.clone()
        }
    }
}

/// Server reply to a save
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedWorkflow {
    pub id: WorkflowId,
}

/// Errors from a repository adapter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    #[error("failed to fetch workflows (status {status})")]
    ListFailed { status: u16 },

    #[error("failed to load workflow (status {status})")]
    LoadFailed { status: u16 },

    #[error("failed to save workflow (status {status})")]
    SaveFailed { status: u16 },

    #[error("failed to delete workflow (status {status})")]
    DeleteFailed { status: u16 },

    #[error("workflow '{0}' not found")]
    NotFound(WorkflowId),

    #[error("request failed: {reason}")]
    Transport { reason: String },

    #[error("unexpected response: {reason}")]
    Decode { reason: String },
}

impl PersistenceError {
    pub fn transport(reason: impl fmt::Display) -> Self {
        Self::Transport {
            reason: reason.to_string(),
        }
    }

    pub fn decode(reason: impl fmt::Display) -> Self {
        Self::Decode {
            reason: reason.to_string(),
        }
    }
}

/// Storage backend for workflows
#[async_trait(?Send)]
pub trait WorkflowRepository {
    /// All workflows visible to the current session
    async fn list(&self) -> Result<Vec<WorkflowSummary>, PersistenceError>;

    async fn load(&self, id: &WorkflowId) -> Result<GraphSnapshot, PersistenceError>;

    /// Creates (`id == None`) or replaces a workflow
    async fn save(
        &self,
        id: Option<&WorkflowId>,
        snapshot: &GraphSnapshot,
    ) -> Result<SavedWorkflow, PersistenceError>;

    /// Updates only the workflow's name
    async fn rename(&self, id: &WorkflowId, name: &str) -> Result<(), PersistenceError>;

    async fn delete(&self, id: &WorkflowId) -> Result<(), PersistenceError>;
}

/// URL layout of the REST backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestRoutes {
    base: String,
}

impl RestRoutes {
    #[must_use]
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// `GET` for the list, `POST` to create
    #[must_use]
    pub fn collection(&self) -> String {
        format!("{}/workflows", self.base)
    }

    /// `GET`, `PUT` and `DELETE` for one workflow
    #[must_use]
    pub fn item(&self, id: &WorkflowId) -> String {
        format!("{}/workflows/{id}", self.base)
    }
}

/// `Authorization` header value for a session token
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Body of a rename request
#[derive(Debug, Clone, Serialize)]
pub struct RenameBody<'a> {
    pub name: &'a str,
}

/// Transient message shown after a persistence action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Failure(String),
}

impl Notice {
    #[must_use]
    pub fn saved(result: &Result<SavedWorkflow, PersistenceError>) -> Self {
        match result {
            Ok(_) => Self::Success("Workflow saved!".to_string()),
            Err(_) => Self::Failure("Failed to save workflow".to_string()),
        }
    }

    #[must_use]
    pub fn deleted(result: &Result<(), PersistenceError>) -> Self {
        match result {
            Ok(()) => Self::Success("Workflow deleted".to_string()),
            Err(_) => Self::Failure("Failed to delete workflow".to_string()),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success(message) | Self::Failure(message) => message,
        }
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

/// Process-local repository for tests and offline use
#[derive(Debug, Default)]
pub struct InMemoryWorkflowRepository {
    workflows: RefCell<BTreeMap<WorkflowId, GraphSnapshot>>,
    next_id: Cell<u64>,
}

impl InMemoryWorkflowRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.workflows.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.workflows.borrow().is_empty()
    }

    fn allocate_id(&self) -> Result<WorkflowId, PersistenceError> {
        let next = self.next_id.get() + 1;
        self.next_id.set(next);
        WorkflowId::new(next.to_string())
    }
}

#[async_trait(?Send)]
impl WorkflowRepository for InMemoryWorkflowRepository {
    async fn list(&self) -> Result<Vec<WorkflowSummary>, PersistenceError> {
        Ok(self
            .workflows
            .borrow()
            .iter()
            .map(|(id, snapshot)| WorkflowSummary {
                id: id.clone(),
                name: snapshot.name.clone(),
            })
            .collect())
    }

    async fn load(&self, id: &WorkflowId) -> Result<GraphSnapshot, PersistenceError> {
        self.workflows
            .borrow()
            .get(id)
            .cloned()
            .ok_or_else(|| PersistenceError::NotFound(id.clone()))
    }

    async fn save(
        &self,
        id: Option<&WorkflowId>,
        snapshot: &GraphSnapshot,
    ) -> Result<SavedWorkflow, PersistenceError> {
        let id = match id {
            Some(id) if self.workflows.borrow().contains_key(id) => id.clone(),
            Some(id) => return Err(PersistenceError::NotFound(id.clone())),
            None => self.allocate_id()?,
        };
        self.workflows
            .borrow_mut()
            .insert(id.clone(), snapshot.clone());
        Ok(SavedWorkflow { id })
    }

    async fn rename(&self, id: &WorkflowId, name: &str) -> Result<(), PersistenceError> {
        let mut workflows = self.workflows.borrow_mut();
        let snapshot = workflows
            .get_mut(id)
            .ok_or_else(|| PersistenceError::NotFound(id.clone()))?;
        snapshot.name = name.to_string();
        Ok(())
    }

    async fn delete(&self, id: &WorkflowId) -> Result<(), PersistenceError> {
        self.workflows
            .borrow_mut()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| PersistenceError::NotFound(id.clone()))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_workflow_id_accepts_numbers_and_strings() {
        let id: WorkflowId = serde_json::from_value(serde_json::json!(42)).unwrap();
        assert_eq!(id.as_str(), "42");
        let id: WorkflowId = serde_json::from_value(serde_json::json!("abc")).unwrap();
        assert_eq!(id.as_str(), "abc");
        assert!(serde_json::from_value::<WorkflowId>(serde_json::json!("")).is_err());
        assert_eq!(serde_json::to_value(&id).unwrap(), serde_json::json!("abc"));
    }

    #[test]
    fn test_summary_display_name() {
        let summary = WorkflowSummary {
            id: WorkflowId::new("7").unwrap(),
            name: String::new(),
        };
        assert_eq!(summary.display_name(), "Workflow #7");
    }

    #[test]
    fn test_rest_routes() {
        let routes = RestRoutes::new("http://localhost:3000/api/");
        assert_eq!(routes.collection(), "http://localhost:3000/api/workflows");
        assert_eq!(
            routes.item(&WorkflowId::new("12").unwrap()),
            "http://localhost:3000/api/workflows/12"
        );
        assert_eq!(bearer("t0k"), "Bearer t0k");
    }

    #[test]
    fn test_notices() {
        let ok: Result<SavedWorkflow, PersistenceError> = Ok(SavedWorkflow {
            id: WorkflowId::new("1").unwrap(),
        });
        assert_eq!(Notice::saved(&ok).message(), "Workflow saved!");
        let failed: Result<(), PersistenceError> = Err(PersistenceError::DeleteFailed { status: 500 });
        assert!(Notice::deleted(&failed).is_failure());
    }
}
