// Shared test doubles for the client/loader contract tests

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use cleoview::api::transport::{Fetch, FetchError, FetchRequest, FetchResponse};
use cleoview::api::CleopatraClient;

pub enum StubReply {
    Response(FetchResponse),
    TransportFailure(String),
}

/// Fetch capability that replays canned replies and records every
/// request it sees.
pub struct StubFetch {
    replies: Mutex<VecDeque<StubReply>>,
    pub requests: Mutex<Vec<FetchRequest>>,
}

impl StubFetch {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn push_response(&self, status: u16, status_text: &str, body: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(StubReply::Response(FetchResponse {
                status,
                status_text: status_text.to_string(),
                body: body.to_string(),
            }));
    }

    pub fn push_transport_failure(&self, message: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(StubReply::TransportFailure(message.to_string()));
    }

    pub fn recorded_urls(&self) -> Vec<String> {
        self.requests.lock().unwrap().iter().map(|r| r.url.clone()).collect()
    }
}

#[async_trait]
impl Fetch for StubFetch {
    async fn send(&self, req: FetchRequest) -> Result<FetchResponse, FetchError> {
        self.requests.lock().unwrap().push(req);
        match self.replies.lock().unwrap().pop_front() {
            Some(StubReply::Response(resp)) => Ok(resp),
            Some(StubReply::TransportFailure(msg)) => Err(FetchError::Other(msg)),
            None => Err(FetchError::Other("stub exhausted".to_string())),
        }
    }
}

pub fn client_with(fetch: Arc<StubFetch>) -> CleopatraClient {
    CleopatraClient::with_fetch("http://cleopatra.test", fetch)
}

/// A plausible executions envelope as the backend would serialize it.
#[allow(dead_code)]
pub fn executions_body(total: i64, limit: i64, offset: i64, names: &[&str]) -> String {
    let items: Vec<serde_json::Value> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            serde_json::json!({
                "id": offset + i as i64 + 1,
                "name": name,
                "tag": "nightly",
                "created_by": "ci",
                "time_created": 1_700_000_000 + i as i64
            })
        })
        .collect();
    let has_next = offset + (items.len() as i64) < total;
    serde_json::json!({
        "total": total,
        "limit": limit,
        "offset": offset,
        "has_next": has_next,
        "items": items
    })
    .to_string()
}

/// One test result item in the backend's shape.
#[allow(dead_code)]
pub fn result_item(id: i64, platform: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "execution_id": 7,
        "name": format!("test_case_{id}"),
        "platform": platform,
        "description": null,
        "status": status,
        "execution_time": 1500,
        "counter": 1,
        "log": null,
        "screenshot_id": null,
        "created_by": "ci",
        "time_created": 1_700_000_100 + id
    })
}
