//! The remote ledger API seam.

use async_trait::async_trait;
use ganesh_ledger::{Expense, Member};
use serde::Serialize;

/// Failure of a call to the remote ledger API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SyncError {
    #[error("client is offline")]
    Offline,
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({0}): {1}")]
    Api(u16, String),
    #[error("parse error: {0}")]
    Parse(String),
    /// The local HTTP client could not be set up; no request was attempted.
    #[error("HTTP client setup failed: {0}")]
    Client(String),
}

impl SyncError {
    /// True when the remote could not be reached at all.
    pub fn is_network(&self) -> bool {
        matches!(self, SyncError::Network(_) | SyncError::Offline)
    }
}

/// What happened to the remote half of an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "error", rename_all = "snake_case")]
pub enum RemoteOutcome {
    Confirmed,
    Failed(SyncError),
}

impl RemoteOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, RemoteOutcome::Confirmed)
    }

    pub fn error(&self) -> Option<&SyncError> {
        match self {
            RemoteOutcome::Confirmed => None,
            RemoteOutcome::Failed(e) => Some(e),
        }
    }
}

impl<T> From<&Result<T, SyncError>> for RemoteOutcome {
    fn from(result: &Result<T, SyncError>) -> Self {
        match result {
            Ok(_) => RemoteOutcome::Confirmed,
            Err(e) => RemoteOutcome::Failed(e.clone()),
        }
    }
}

/// Remote collections of members and expenses.
///
/// Creates are the only mutations the remote knows about; edits and deletes
/// stay local to the store.
#[async_trait]
pub trait LedgerApi: Send + Sync {
    async fn list_members(&self) -> Result<Vec<Member>, SyncError>;

    async fn list_expenses(&self) -> Result<Vec<Expense>, SyncError>;

    /// Create a member remotely. The response body is not used.
    async fn create_member(&self, member: &Member) -> Result<(), SyncError>;

    /// Create an expense remotely. The attachment name is never transmitted.
    async fn create_expense(&self, expense: &Expense) -> Result<(), SyncError>;
}
