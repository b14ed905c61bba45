use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "cleoview", about = "Terminal front-end for the Cleopatra test reporting backend", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List executions.
    Executions {
        /// Page size (raw query value; defaults to 50).
        #[arg(long)]
        limit: Option<String>,
        /// Page start (raw query value; defaults to 0).
        #[arg(long)]
        offset: Option<String>,
    },

    /// Show one execution's test results.
    Results {
        /// Execution id.
        #[arg(value_name = "EXECUTION_ID")]
        execution_id: String,
        #[arg(long)]
        limit: Option<String>,
        #[arg(long)]
        offset: Option<String>,
    },

    /// Patch a test result's status.
    SetStatus {
        #[arg(value_name = "RESULT_ID")]
        result_id: i64,
        /// Status code (P, F, I, ...).
        #[arg(value_name = "STATUS")]
        status: String,
    },

    /// Browse executions and results interactively.
    Browse,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
