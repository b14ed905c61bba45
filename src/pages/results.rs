//! Execution detail page loader.

use tracing::error;

use crate::api::{CleopatraClient, Summary, TestResult};

use super::{distinct, PageQuery};

/// View-model for one page of an execution's results.
///
/// `available_platforms`/`available_statuses` are the distinct values
/// present in the current page only (first-seen order). Filters built
/// from them reflect the page, not the whole execution.
#[derive(Debug, Clone)]
pub struct ResultsPage {
    pub results: Vec<TestResult>,
    pub summary: Summary,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub has_next: bool,
    pub execution_id: i64,
    pub available_platforms: Vec<String>,
    pub available_statuses: Vec<String>,
    pub error: Option<String>,
}

/// `id_raw` comes straight from the route path. An unparseable id
/// degrades at this boundary into the error-shaped page, the same
/// outcome the backend would produce for a nonsense id.
pub async fn load(client: &CleopatraClient, id_raw: &str, query: &PageQuery) -> ResultsPage {
    let limit = query.limit();
    let offset = query.offset();

    let execution_id = match id_raw.trim().parse::<i64>() {
        Ok(id) => id,
        Err(_) => {
            error!("error loading test results: invalid execution id {id_raw:?}");
            return empty_page(0, limit, offset, format!("invalid execution id: {id_raw}"));
        }
    };

    match client.fetch_execution_results(execution_id, limit, offset).await {
        Ok(resp) => {
            let available_platforms = distinct(resp.items.iter().map(|r| r.platform.as_str()));
            let available_statuses = distinct(resp.items.iter().map(|r| r.status.as_str()));
            ResultsPage {
                results: resp.items,
                summary: resp.summary.unwrap_or_default(),
                total: resp.total,
                limit: resp.limit,
                offset: resp.offset,
                has_next: resp.has_next,
                execution_id,
                available_platforms,
                available_statuses,
                error: None,
            }
        }
        Err(err) => {
            error!("error loading test results: {err}");
            empty_page(execution_id, limit, offset, err.to_string())
        }
    }
}

fn empty_page(execution_id: i64, limit: i64, offset: i64, error: String) -> ResultsPage {
    ResultsPage {
        results: Vec::new(),
        summary: Summary::default(),
        total: 0,
        limit,
        offset,
        has_next: false,
        execution_id,
        available_platforms: Vec::new(),
        available_statuses: Vec::new(),
        error: Some(error),
    }
}
