//! One-shot executions list command.

use anyhow::Result;

use crate::api::CleopatraClient;
use crate::pages::{self, PageQuery};

pub async fn run(
    client: &CleopatraClient,
    limit: Option<String>,
    offset: Option<String>,
) -> Result<()> {
    let query = PageQuery::new(limit, offset);
    let page = pages::executions::load(client, &query).await;
    super::render_executions_page(&page);
    Ok(())
}
