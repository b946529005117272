//! Argument parsing for the `ganesh-fund` binary.

use clap::{Parser, Subcommand};

/// Ganesh fund ledger client
#[derive(Parser, Debug)]
#[command(name = "ganesh-fund")]
#[command(about = "Track member contributions and expenses of the fund")]
pub struct Args {
    /// What to do after loading the ledger (defaults to `dashboard`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Dashboard)
    }
}

/// One invocation of the binary.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show totals
    Dashboard,
    /// List member contributions
    Members,
    /// List expenses
    Expenses,
    /// Record a contribution
    AddMember {
        name: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Record an expense
    AddExpense {
        item: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Attachment file name (kept locally, never uploaded)
        file: Option<String>,
    },
}
