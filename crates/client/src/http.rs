//! HTTP implementation of [`LedgerApi`] backed by `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use ganesh_ledger::{Expense, Member};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::remote::{LedgerApi, SyncError};

const MAX_LOG_BODY_CHARS: usize = 512;

/// Client for the fund's REST API.
#[derive(Debug, Clone)]
pub struct HttpLedgerApi {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct NewMemberBody<'a> {
    name: &'a str,
    amount: &'a str,
}

#[derive(Serialize)]
struct NewExpenseBody<'a> {
    item: &'a str,
    amount: &'a str,
}

impl HttpLedgerApi {
    /// Create a client for `base_url` (e.g. "https://ganesh-backend.onrender.com").
    ///
    /// Setup failures are [`SyncError::Client`]: nothing was sent, so they
    /// say nothing about connectivity.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SyncError> {
        let base_url = base_url.trim_end_matches('/');
        reqwest::Url::parse(base_url)
            .map_err(|e| SyncError::Client(format!("invalid base URL {base_url:?}: {e}")))?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SyncError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, SyncError> {
        Self::new(&config.api_url, config.timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn fetch_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, SyncError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SyncError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| SyncError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(SyncError::Api(status.as_u16(), preview(&body)));
        }

        serde_json::from_str(&body)
            .map_err(|e| SyncError::Parse(format!("GET {path}: {e}")))
    }

    async fn post_json<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<(), SyncError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");

        let resp = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| SyncError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(SyncError::Api(status.as_u16(), preview(&text)));
        }

        Ok(())
    }
}

fn preview(body: &str) -> String {
    let mut out = body.chars().take(MAX_LOG_BODY_CHARS).collect::<String>();
    if body.chars().count() > MAX_LOG_BODY_CHARS {
        out.push_str("...");
    }
    out
}

#[async_trait]
impl LedgerApi for HttpLedgerApi {
    async fn list_members(&self) -> Result<Vec<Member>, SyncError> {
        self.fetch_list("/members").await
    }

    async fn list_expenses(&self) -> Result<Vec<Expense>, SyncError> {
        self.fetch_list("/expenses").await
    }

    async fn create_member(&self, member: &Member) -> Result<(), SyncError> {
        let body = NewMemberBody {
            name: &member.name,
            amount: member.amount.as_str(),
        };
        self.post_json("/members", &body).await
    }

    async fn create_expense(&self, expense: &Expense) -> Result<(), SyncError> {
        let body = NewExpenseBody {
            item: &expense.item,
            amount: expense.amount.as_str(),
        };
        self.post_json("/expenses", &body).await
    }
}
