//! Injectable HTTP capability backing the API client.
//!
//! The client never talks to reqwest directly; it goes through the
//! `Fetch` trait so the same code path serves production and tests.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Patch,
}

/// One outgoing request: an absolute URL plus an optional JSON body.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub method: Method,
    pub url: String,
    pub json_body: Option<serde_json::Value>,
}

impl FetchRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self { method: Method::Get, url: url.into(), json_body: None }
    }

    pub fn patch(url: impl Into<String>, body: serde_json::Value) -> Self {
        Self { method: Method::Patch, url: url.into(), json_body: Some(body) }
    }
}

/// The response as the client needs it: status line plus raw body.
/// A non-2xx status is still an `Ok` at this layer; classifying it is
/// the API client's job.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Other(String),
}

#[async_trait]
pub trait Fetch: Send + Sync {
    async fn send(&self, req: FetchRequest) -> Result<FetchResponse, FetchError>;
}

/// Production capability over a shared `reqwest::Client`.
///
/// No timeout is configured: a hung backend hangs the caller, matching
/// the contract the UI is written against.
#[derive(Debug, Default, Clone)]
pub struct ReqwestFetch {
    client: reqwest::Client,
}

impl ReqwestFetch {
    pub fn new() -> Self {
        Self { client: reqwest::Client::new() }
    }
}

#[async_trait]
impl Fetch for ReqwestFetch {
    async fn send(&self, req: FetchRequest) -> Result<FetchResponse, FetchError> {
        let builder = match req.method {
            Method::Get => self.client.get(&req.url),
            Method::Patch => self.client.patch(&req.url),
        };
        let builder = match &req.json_body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let resp = builder.send().await?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();

        Ok(FetchResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("").to_string(),
            body,
        })
    }
}
