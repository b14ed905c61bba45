//! Executions list page loader.

use tracing::error;

use crate::api::{CleopatraClient, Execution};

use super::PageQuery;

/// View-model for the executions list page. `error` is set (and the
/// rest zeroed/empty) when the backend call failed; the page renders
/// an empty state instead of failing the navigation.
#[derive(Debug, Clone)]
pub struct ExecutionsPage {
    pub executions: Vec<Execution>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub has_next: bool,
    pub error: Option<String>,
}

pub async fn load(client: &CleopatraClient, query: &PageQuery) -> ExecutionsPage {
    let limit = query.limit();
    let offset = query.offset();

    match client.fetch_executions(limit, offset).await {
        Ok(resp) => ExecutionsPage {
            executions: resp.items,
            total: resp.total,
            limit: resp.limit,
            offset: resp.offset,
            has_next: resp.has_next,
            error: None,
        },
        Err(err) => {
            error!("error loading executions: {err}");
            ExecutionsPage {
                executions: Vec::new(),
                total: 0,
                limit,
                offset,
                has_next: false,
                error: Some(err.to_string()),
            }
        }
    }
}
