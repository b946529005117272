//! Fund ledger (member contributions and expenses).
//!
//! Pure domain logic only: no IO, no HTTP, no persistence concerns.

pub mod amount;
pub mod record;
pub mod totals;

pub use amount::Amount;
pub use record::{Expense, ExpensePatch, Member, MemberPatch};
pub use totals::{Dashboard, Totals};
