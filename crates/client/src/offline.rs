//! Connectivity and remote-error state attached to the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::remote::SyncError;

/// Connectivity state of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectivityState {
    /// The remote answered the last call (even if it answered with an error).
    #[default]
    Online,
    /// The last call could not reach the remote.
    Offline,
}

/// The most recent remote failure and when it happened.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LastError {
    pub error: SyncError,
    pub at: DateTime<Utc>,
}

/// Remote-facing status of a store.
///
/// The last error is kept until explicitly cleared so that callers polling
/// after a burst of optimistic writes can still see that one failed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SyncStatus {
    connectivity: ConnectivityState,
    last_error: Option<LastError>,
    loaded_at: Option<DateTime<Utc>>,
}

impl SyncStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connectivity(&self) -> ConnectivityState {
        self.connectivity
    }

    pub fn is_offline(&self) -> bool {
        self.connectivity == ConnectivityState::Offline
    }

    pub fn last_error(&self) -> Option<&LastError> {
        self.last_error.as_ref()
    }

    /// Time of the last load in which both collections were fetched.
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    pub fn clear_last_error(&mut self) {
        self.last_error = None;
    }

    pub(crate) fn record_success(&mut self) {
        self.connectivity = ConnectivityState::Online;
    }

    pub(crate) fn record_failure(&mut self, error: SyncError) {
        match &error {
            SyncError::Offline | SyncError::Network(_) => {
                self.connectivity = ConnectivityState::Offline;
            }
            SyncError::Api(..) | SyncError::Parse(_) => {
                self.connectivity = ConnectivityState::Online;
            }
            // Nothing reached the wire.
            SyncError::Client(_) => {}
        }
        self.last_error = Some(LastError {
            error,
            at: Utc::now(),
        });
    }

    pub(crate) fn record_load(&mut self) {
        self.loaded_at = Some(Utc::now());
    }

    /// Ensure the client is online; return error if offline.
    pub fn require_online(&self) -> Result<(), SyncError> {
        if self.is_offline() {
            Err(SyncError::Offline)
        } else {
            Ok(())
        }
    }
}
