//! `ganesh-client`
//!
//! **Responsibility:** local ledger state kept in step with the fund's API.
//!
//! This crate provides:
//! - The ledger sync store (optimistic creates, local-only edits/deletes)
//! - The remote API seam with HTTP and in-memory implementations
//! - Connectivity and last-error tracking
//! - Environment configuration and the `ganesh-fund` command line
//!
//! Only creates reach the API; edits and deletes stay local (see [`store`]).

pub mod cli;
pub mod config;
pub mod http;
pub mod in_memory;
pub mod offline;
pub mod remote;
pub mod store;

pub use config::{ClientConfig, ConfigError};
pub use http::HttpLedgerApi;
pub use in_memory::InMemoryLedgerApi;
pub use offline::{ConnectivityState, LastError, SyncStatus};
pub use remote::{LedgerApi, RemoteOutcome, SyncError};
pub use store::{LedgerStore, LoadOutcome, WritePolicy, WriteReceipt};
