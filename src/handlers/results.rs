//! One-shot execution detail command.

use anyhow::Result;

use crate::api::CleopatraClient;
use crate::pages::{self, PageQuery};
use crate::store::ExecutionStore;

/// Outside a browse session the store is empty, so the header falls
/// back to the execution id.
pub async fn run(
    client: &CleopatraClient,
    store: &ExecutionStore,
    execution_id: &str,
    limit: Option<String>,
    offset: Option<String>,
) -> Result<()> {
    let query = PageQuery::new(limit, offset);
    let page = pages::results::load(client, execution_id, &query).await;
    super::render_results_page(&page, store.current());
    Ok(())
}
