use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use ganesh_ledger::{Expense, Member};

use crate::remote::{LedgerApi, SyncError};

/// In-memory stand-in for the remote API.
///
/// Intended for tests/dev. Each list call and the writes can be made to fail independently
/// to simulate an unreachable backend.
#[derive(Debug, Default)]
pub struct InMemoryLedgerApi {
    members: RwLock<Vec<Member>>,
    expenses: RwLock<Vec<Expense>>,
    fail_member_reads: AtomicBool,
    fail_expense_reads: AtomicBool,
    fail_writes: AtomicBool,
    create_calls: AtomicUsize,
}

impl InMemoryLedgerApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(members: Vec<Member>, expenses: Vec<Expense>) -> Self {
        Self {
            members: RwLock::new(members),
            expenses: RwLock::new(expenses),
            ..Self::default()
        }
    }

    /// Make both list calls fail (or succeed again).
    pub fn set_fail_reads(&self, fail: bool) {
        self.set_fail_member_reads(fail);
        self.set_fail_expense_reads(fail);
    }

    pub fn set_fail_member_reads(&self, fail: bool) {
        self.fail_member_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_expense_reads(&self, fail: bool) {
        self.fail_expense_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of the remote member collection.
    pub fn members(&self) -> Vec<Member> {
        self.members
            .read()
            .map(|m| m.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Snapshot of the remote expense collection.
    pub fn expenses(&self) -> Vec<Expense> {
        self.expenses
            .read()
            .map(|e| e.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Number of create requests received, including failed ones.
    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    fn check(&self, flag: &AtomicBool) -> Result<(), SyncError> {
        if flag.load(Ordering::SeqCst) {
            Err(SyncError::Network("simulated network failure".to_string()))
        } else {
            Ok(())
        }
    }
}

fn poisoned() -> SyncError {
    SyncError::Network("lock poisoned".to_string())
}

#[async_trait]
impl LedgerApi for InMemoryLedgerApi {
    async fn list_members(&self) -> Result<Vec<Member>, SyncError> {
        self.check(&self.fail_member_reads)?;
        self.members.read().map(|m| m.clone()).map_err(|_| poisoned())
    }

    async fn list_expenses(&self) -> Result<Vec<Expense>, SyncError> {
        self.check(&self.fail_expense_reads)?;
        self.expenses.read().map(|e| e.clone()).map_err(|_| poisoned())
    }

    async fn create_member(&self, member: &Member) -> Result<(), SyncError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.check(&self.fail_writes)?;
        self.members
            .write()
            .map_err(|_| poisoned())?
            .push(member.clone());
        Ok(())
    }

    async fn create_expense(&self, expense: &Expense) -> Result<(), SyncError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.check(&self.fail_writes)?;
        // The wire body carries item and amount only.
        let stored = Expense {
            file: None,
            ..expense.clone()
        };
        self.expenses
            .write()
            .map_err(|_| poisoned())?
            .push(stored);
        Ok(())
    }
}
