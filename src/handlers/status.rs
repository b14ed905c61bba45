//! Status patch command.

use anyhow::Result;

use crate::api::CleopatraClient;

/// The patch has no recovery boundary of its own: failure propagates
/// to main. On success the backend state changed; re-fetch to see it.
pub async fn run(client: &CleopatraClient, result_id: i64, status: &str) -> Result<()> {
    client.update_test_result_status(result_id, status).await?;
    println!("result {result_id} status set to {status}");
    Ok(())
}
