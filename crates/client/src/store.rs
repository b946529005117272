//! The ledger sync store.
//!
//! Holds the local member and expense lists, mirrors creates to the remote
//! API and derives totals from whatever is held locally.
//!
//! Contract:
//! - Writes are optimistic: the record is appended locally before the remote
//!   create is awaited, and stays there whatever the remote says (unless the
//!   store was built with [`WritePolicy::RollbackOnFailure`]).
//! - Edits and deletes are local only. The remote is never told, so the two
//!   sides can diverge until the next [`LedgerStore::load`].
//! - Remote failures never surface as `Err`; they are returned as a
//!   [`RemoteOutcome`] and recorded on the store's [`SyncStatus`].

use std::str::FromStr;
use std::sync::Arc;

use ganesh_core::{DomainError, DomainResult};
use ganesh_ledger::{Amount, Dashboard, Expense, ExpensePatch, Member, MemberPatch, Totals};
use serde::{Deserialize, Serialize};

use crate::offline::SyncStatus;
use crate::remote::{LedgerApi, RemoteOutcome, SyncError};

/// What to do with an optimistic write when the remote create fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WritePolicy {
    /// Keep the local record regardless of the remote outcome.
    #[default]
    Optimistic,
    /// Remove the local record again if the remote create failed.
    RollbackOnFailure,
}

impl FromStr for WritePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "optimistic" => Ok(Self::Optimistic),
            "rollback" | "rollback_on_failure" => Ok(Self::RollbackOnFailure),
            other => Err(format!("unknown write policy: {other}")),
        }
    }
}

/// Result of an add operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteReceipt {
    /// Position the record was appended at.
    pub index: usize,
    pub remote: RemoteOutcome,
    /// True when the local record was removed again after a remote failure.
    pub rolled_back: bool,
}

/// Result of [`LedgerStore::load`], per collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadOutcome {
    pub members: RemoteOutcome,
    pub expenses: RemoteOutcome,
}

impl LoadOutcome {
    pub fn is_complete(&self) -> bool {
        self.members.is_confirmed() && self.expenses.is_confirmed()
    }
}

/// Local view of the fund ledger, kept in step with a remote [`LedgerApi`].
pub struct LedgerStore {
    api: Arc<dyn LedgerApi>,
    policy: WritePolicy,
    members: Vec<Member>,
    expenses: Vec<Expense>,
    status: SyncStatus,
}

impl LedgerStore {
    /// Create an empty store with the default (optimistic) write policy.
    pub fn new(api: Arc<dyn LedgerApi>) -> Self {
        Self::with_policy(api, WritePolicy::default())
    }

    pub fn with_policy(api: Arc<dyn LedgerApi>, policy: WritePolicy) -> Self {
        Self {
            api,
            policy,
            members: Vec::new(),
            expenses: Vec::new(),
            status: SyncStatus::new(),
        }
    }

    pub fn policy(&self) -> WritePolicy {
        self.policy
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn status(&self) -> &SyncStatus {
        &self.status
    }

    pub fn clear_last_error(&mut self) {
        self.status.clear_last_error();
    }

    /// Fails with [`SyncError::Offline`] if the last remote call could not
    /// reach the API. The store itself never gates writes on this.
    pub fn require_online(&self) -> Result<(), SyncError> {
        self.status.require_online()
    }

    /// Fetch both collections and replace local state wholesale.
    ///
    /// A collection whose fetch fails is left empty.
    pub async fn load(&mut self) -> LoadOutcome {
        let (members, expenses) =
            tokio::join!(self.api.list_members(), self.api.list_expenses());

        let members_outcome = RemoteOutcome::from(&members);
        let expenses_outcome = RemoteOutcome::from(&expenses);

        self.members = self.observe("list members", members).unwrap_or_default();
        self.expenses = self.observe("list expenses", expenses).unwrap_or_default();

        let outcome = LoadOutcome {
            members: members_outcome,
            expenses: expenses_outcome,
        };
        if outcome.is_complete() {
            self.status.record_load();
        }

        tracing::info!(
            members = self.members.len(),
            expenses = self.expenses.len(),
            complete = outcome.is_complete(),
            "ledger loaded"
        );

        outcome
    }

    /// Record a member contribution locally and create it remotely.
    pub async fn add_member(
        &mut self,
        name: impl Into<String>,
        amount: impl Into<Amount>,
    ) -> DomainResult<WriteReceipt> {
        let member = Member::new(name, amount)?;
        let index = self.members.len();
        self.members.push(member.clone());

        let result = self.api.create_member(&member).await;
        let remote = RemoteOutcome::from(&result);
        let _ = self.observe("create member", result);

        let rolled_back = self.should_roll_back(&remote);
        if rolled_back {
            self.members.truncate(index);
        }

        tracing::info!(index, confirmed = remote.is_confirmed(), rolled_back, "member added");

        Ok(WriteReceipt {
            index,
            remote,
            rolled_back,
        })
    }

    /// Record an expense locally and create it remotely (without the file).
    pub async fn add_expense(
        &mut self,
        item: impl Into<String>,
        amount: impl Into<Amount>,
        file: Option<String>,
    ) -> DomainResult<WriteReceipt> {
        let expense = Expense::new(item, amount, file)?;
        let index = self.expenses.len();
        self.expenses.push(expense.clone());

        let result = self.api.create_expense(&expense).await;
        let remote = RemoteOutcome::from(&result);
        let _ = self.observe("create expense", result);

        let rolled_back = self.should_roll_back(&remote);
        if rolled_back {
            self.expenses.truncate(index);
        }

        tracing::info!(index, confirmed = remote.is_confirmed(), rolled_back, "expense added");

        Ok(WriteReceipt {
            index,
            remote,
            rolled_back,
        })
    }

    /// Replace fields of the member at `index`. Local only.
    pub fn edit_member(&mut self, index: usize, patch: MemberPatch) -> DomainResult<&Member> {
        DomainError::check_index(index, self.members.len())?;
        let next = self.members[index].patched(patch)?;
        self.members[index] = next;
        tracing::debug!(index, "member edited locally");
        Ok(&self.members[index])
    }

    /// Replace fields of the expense at `index`. Local only.
    pub fn edit_expense(&mut self, index: usize, patch: ExpensePatch) -> DomainResult<&Expense> {
        DomainError::check_index(index, self.expenses.len())?;
        let next = self.expenses[index].patched(patch)?;
        self.expenses[index] = next;
        tracing::debug!(index, "expense edited locally");
        Ok(&self.expenses[index])
    }

    /// Remove the member at `index`; later members shift down by one. Local only.
    pub fn delete_member(&mut self, index: usize) -> DomainResult<Member> {
        DomainError::check_index(index, self.members.len())?;
        tracing::debug!(index, "member deleted locally");
        Ok(self.members.remove(index))
    }

    /// Remove the expense at `index`; later expenses shift down by one. Local only.
    pub fn delete_expense(&mut self, index: usize) -> DomainResult<Expense> {
        DomainError::check_index(index, self.expenses.len())?;
        tracing::debug!(index, "expense deleted locally");
        Ok(self.expenses.remove(index))
    }

    /// Totals over the current local lists. Recomputed on every call.
    pub fn totals(&self) -> Totals {
        Totals::compute(&self.members, &self.expenses)
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::compute(&self.members, &self.expenses)
    }

    fn should_roll_back(&self, remote: &RemoteOutcome) -> bool {
        self.policy == WritePolicy::RollbackOnFailure && !remote.is_confirmed()
    }

    fn observe<T>(&mut self, op: &'static str, result: Result<T, SyncError>) -> Option<T> {
        match result {
            Ok(value) => {
                self.status.record_success();
                Some(value)
            }
            Err(error) => {
                tracing::warn!(op, %error, "remote call failed");
                self.status.record_failure(error);
                None
            }
        }
    }
}
