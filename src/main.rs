use anyhow::Result;

use cleoview::api::CleopatraClient;
use cleoview::cli::{Cli, Command};
use cleoview::config::Config;
use cleoview::handlers;
use cleoview::store::ExecutionStore;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let cfg = Config::load();
    let client = CleopatraClient::from_config(&cfg);

    match args.command {
        Command::Executions { limit, offset } => {
            handlers::executions::run(&client, limit, offset).await
        }
        Command::Results { execution_id, limit, offset } => {
            // One-shot invocations start with an empty store: the
            // header falls back to the execution id.
            let store = ExecutionStore::new();
            handlers::results::run(&client, &store, &execution_id, limit, offset).await
        }
        Command::SetStatus { result_id, status } => {
            handlers::status::run(&client, result_id, &status).await
        }
        Command::Browse => handlers::browse::run(&client).await,
    }
}
