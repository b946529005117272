//! `ganesh-fund` entry point: one load, an optional write, JSON on stdout.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use ganesh_client::cli::{Args, Command};
use ganesh_client::{ClientConfig, HttpLedgerApi, LedgerStore};
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let command = Args::parse().into_command();
    ganesh_observability::init();

    let config = ClientConfig::from_env().context("invalid client configuration")?;
    tracing::info!(api_url = %config.api_url, policy = ?config.write_policy, "starting session");

    let api = HttpLedgerApi::from_config(&config).context("failed to build API client")?;
    let mut store = LedgerStore::with_policy(Arc::new(api), config.write_policy);

    let loaded = store.load().await;
    if !loaded.is_complete() {
        tracing::warn!(?loaded, "ledger only partially loaded");
    }

    let output = match command {
        Command::Dashboard => json!({
            "dashboard": store.dashboard(),
            "status": store.status(),
        }),
        Command::Members => json!({ "members": indexed(store.members()) }),
        Command::Expenses => json!({ "expenses": indexed(store.expenses()) }),
        Command::AddMember { name, amount } => {
            let receipt = store
                .add_member(name, amount)
                .await
                .context("member not recorded")?;
            json!({ "receipt": receipt, "totals": store.totals() })
        }
        Command::AddExpense { item, amount, file } => {
            let receipt = store
                .add_expense(item, amount, file)
                .await
                .context("expense not recorded")?;
            json!({ "receipt": receipt, "totals": store.totals() })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn indexed<T: serde::Serialize>(records: &[T]) -> Vec<serde_json::Value> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| json!({ "index": index, "record": record }))
        .collect()
}
