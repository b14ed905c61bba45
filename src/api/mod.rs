//! Typed client for the Cleopatra backend REST API.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use crate::config::Config;

pub mod transport;

use transport::{Fetch, FetchError, FetchRequest, ReqwestFetch};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Execution {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    pub time_created: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    pub id: i64,
    pub execution_id: i64,
    pub name: String,
    pub platform: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: String,
    /// Wall time of the test in milliseconds.
    #[serde(default)]
    pub execution_time: Option<i64>,
    pub counter: i64,
    #[serde(default)]
    pub log: Option<String>,
    #[serde(default)]
    pub screenshot_id: Option<i64>,
    #[serde(default)]
    pub created_by: Option<String>,
    pub time_created: i64,
}

/// Backend-computed pass/fail/ignored counts. `ignor` is the key the
/// backend actually emits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Summary {
    pub total: i64,
    pub pass: i64,
    pub fail: i64,
    pub ignor: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExecutionsResponse {
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub has_next: bool,
    pub items: Vec<Execution>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestResultsResponse {
    pub execution_id: i64,
    #[serde(default)]
    pub summary: Option<Summary>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub has_next: bool,
    pub items: Vec<TestResult>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{operation} failed: {status} {status_text}")]
    Status {
        operation: &'static str,
        status: u16,
        status_text: String,
    },
    #[error("{operation} failed: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: FetchError,
    },
    #[error("{operation} returned malformed payload: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Client for the three backend operations the front-end uses.
///
/// Errors are logged here and returned unchanged; recovery (if any)
/// belongs to the caller. No retry, no timeout.
#[derive(Clone)]
pub struct CleopatraClient {
    fetch: Arc<dyn Fetch>,
    base_url: String,
}

impl CleopatraClient {
    pub fn from_config(cfg: &Config) -> Self {
        Self::with_fetch(cfg.api_base_url(), Arc::new(ReqwestFetch::new()))
    }

    /// Build a client around any fetch capability. Tests use this to
    /// run the full client/loader path against a stub backend.
    pub fn with_fetch(base_url: impl Into<String>, fetch: Arc<dyn Fetch>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { fetch, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_executions(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<ExecutionsResponse, ApiError> {
        let url = format!(
            "{}/api/executions?limit={}&offset={}",
            self.base_url, limit, offset
        );
        self.get_json("fetch executions", url).await
    }

    pub async fn fetch_execution_results(
        &self,
        execution_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<TestResultsResponse, ApiError> {
        let url = format!(
            "{}/api/execution/{}/result?limit={}&offset={}&include_summary=true",
            self.base_url, execution_id, limit, offset
        );
        self.get_json("fetch test results", url).await
    }

    /// Fire-and-forget status patch: any 2xx (204 expected) is success
    /// and the body is ignored. Callers re-fetch to observe the change.
    pub async fn update_test_result_status(
        &self,
        result_id: i64,
        status: &str,
    ) -> Result<(), ApiError> {
        const OP: &str = "update test result status";
        let url = format!("{}/api/result/{}/status", self.base_url, result_id);
        let req = FetchRequest::patch(url, serde_json::json!({ "status": status }));

        let resp = self.fetch.send(req).await.map_err(|source| {
            let err = ApiError::Transport { operation: OP, source };
            error!("{err}");
            err
        })?;

        if !resp.is_success() {
            let err = ApiError::Status {
                operation: OP,
                status: resp.status,
                status_text: resp.status_text,
            };
            error!("{err}");
            return Err(err);
        }
        Ok(())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        operation: &'static str,
        url: String,
    ) -> Result<T, ApiError> {
        let resp = self
            .fetch
            .send(FetchRequest::get(url))
            .await
            .map_err(|source| {
                let err = ApiError::Transport { operation, source };
                error!("{err}");
                err
            })?;

        if !resp.is_success() {
            let err = ApiError::Status {
                operation,
                status: resp.status,
                status_text: resp.status_text,
            };
            error!("{err}");
            return Err(err);
        }

        serde_json::from_str(&resp.body).map_err(|source| {
            let err = ApiError::Decode { operation, source };
            error!("{err}");
            err
        })
    }
}
