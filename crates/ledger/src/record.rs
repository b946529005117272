//! Ledger records: member contributions and expenses.
//!
//! Records carry no identity of their own; callers address them by their
//! position in a list.

use std::path::Path;

use ganesh_core::{DomainError, DomainResult, ValueObject};
use serde::{Deserialize, Serialize};

use crate::amount::Amount;

/// A member and the amount they contributed.
///
/// Fields missing from a remote record decode as blank, so one incomplete
/// row does not hide the rest of the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: Amount,
}

/// An expense paid out of the fund.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    #[serde(default)]
    pub item: String,
    #[serde(default)]
    pub amount: Amount,
    /// Attachment file name (name only, no contents).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl ValueObject for Member {}
impl ValueObject for Expense {}

fn require(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} is required")));
    }
    Ok(())
}

/// Reduce a user-supplied attachment reference to a bare file name.
fn file_name_only(file: Option<String>) -> Option<String> {
    let file = file?;
    let trimmed = file.trim();
    if trimmed.is_empty() {
        return None;
    }
    Path::new(trimmed)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .or_else(|| Some(trimmed.to_string()))
}

impl Member {
    /// Build a member, rejecting blank fields.
    pub fn new(name: impl Into<String>, amount: impl Into<Amount>) -> DomainResult<Self> {
        let member = Self {
            name: name.into(),
            amount: amount.into(),
        };
        member.validate()?;
        Ok(member)
    }

    pub fn validate(&self) -> DomainResult<()> {
        require("name", &self.name)?;
        require("amount", self.amount.as_str())
    }

    /// Return a copy with the patched fields replaced.
    pub fn patched(&self, patch: MemberPatch) -> DomainResult<Self> {
        let next = Self {
            name: patch.name.unwrap_or_else(|| self.name.clone()),
            amount: patch.amount.unwrap_or_else(|| self.amount.clone()),
        };
        next.validate()?;
        Ok(next)
    }
}

impl Expense {
    /// Build an expense, rejecting blank fields. `file` is reduced to its
    /// file name; a blank file is treated as absent.
    pub fn new(
        item: impl Into<String>,
        amount: impl Into<Amount>,
        file: Option<String>,
    ) -> DomainResult<Self> {
        let expense = Self {
            item: item.into(),
            amount: amount.into(),
            file: file_name_only(file),
        };
        expense.validate()?;
        Ok(expense)
    }

    pub fn validate(&self) -> DomainResult<()> {
        require("item", &self.item)?;
        require("amount", self.amount.as_str())
    }

    /// Return a copy with the patched fields replaced.
    pub fn patched(&self, patch: ExpensePatch) -> DomainResult<Self> {
        let next = Self {
            item: patch.item.unwrap_or_else(|| self.item.clone()),
            amount: patch.amount.unwrap_or_else(|| self.amount.clone()),
            file: match patch.file {
                Some(file) => file_name_only(file),
                None => self.file.clone(),
            },
        };
        next.validate()?;
        Ok(next)
    }
}

/// Fields to replace on a member. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberPatch {
    pub name: Option<String>,
    pub amount: Option<Amount>,
}

impl MemberPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn amount(mut self, amount: impl Into<Amount>) -> Self {
        self.amount = Some(amount.into());
        self
    }
}

impl From<Member> for MemberPatch {
    fn from(member: Member) -> Self {
        Self {
            name: Some(member.name),
            amount: Some(member.amount),
        }
    }
}

/// Fields to replace on an expense. `None` keeps the current value;
/// `file: Some(None)` clears the attachment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpensePatch {
    pub item: Option<String>,
    pub amount: Option<Amount>,
    pub file: Option<Option<String>>,
}

impl ExpensePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(mut self, item: impl Into<String>) -> Self {
        self.item = Some(item.into());
        self
    }

    pub fn amount(mut self, amount: impl Into<Amount>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    pub fn file(mut self, file: Option<String>) -> Self {
        self.file = Some(file);
        self
    }
}

impl From<Expense> for ExpensePatch {
    fn from(expense: Expense) -> Self {
        Self {
            item: Some(expense.item),
            amount: Some(expense.amount),
            file: Some(expense.file),
        }
    }
}
