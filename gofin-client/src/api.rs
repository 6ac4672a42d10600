//! Backend access: the `TransactionsApi` seam and its reqwest implementation.

use std::future::Future;
use std::time::Duration;

use gofin_core::{Balance, Transaction};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::debug;

use crate::error::ApiError;

/// Multipart field the import endpoint reads the file from.
pub const IMPORT_FIELD: &str = "file";

const CSV_MIME: &str = "text/csv";

/// Body of `GET /transactions`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
    pub balance: Balance,
}

/// One file bound under a fixed field name, ready to be sent as multipart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportPayload {
    pub field: &'static str,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImportPayload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            field: IMPORT_FIELD,
            file_name: file_name.into(),
            bytes,
        }
    }

    fn into_form(self) -> Result<Form, ApiError> {
        let part = Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(CSV_MIME)
            .map_err(|e| ApiError::Malformed(e.to_string()))?;
        Ok(Form::new().part(self.field, part))
    }
}

/// What the dashboard and the uploader need from the backend.
pub trait TransactionsApi {
    fn list_transactions(
        &self,
    ) -> impl Future<Output = Result<TransactionsResponse, ApiError>> + Send;

    fn import_transactions(
        &self,
        payload: ImportPayload,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl TransactionsApi for HttpApi {
    async fn list_transactions(&self) -> Result<TransactionsResponse, ApiError> {
        let url = self.endpoint("transactions");
        debug!(%url, "fetching transactions");

        let resp = self.client.get(&url).send().await?;
        let resp = check_status(resp).await?;
        let body: TransactionsResponse = resp.json().await?;

        debug!(count = body.transactions.len(), "transactions received");
        Ok(body)
    }

    async fn import_transactions(&self, payload: ImportPayload) -> Result<(), ApiError> {
        let url = self.endpoint("transactions/import");
        debug!(%url, file = %payload.file_name, bytes = payload.bytes.len(), "uploading import");

        let form = payload.into_form()?;
        let resp = self.client.post(&url).multipart(form).send().await?;
        check_status(resp).await?;
        Ok(())
    }
}

async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        message: server_message(&body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("error").to_string()),
    })
}

/// The backend reports failures as `{ "status": "error", "message": "..." }`.
fn server_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
        error: Option<String>,
    }

    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .message
        .or(parsed.error)
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
}
