// Library crate for cleoview exposed to the binary and tests

pub mod api;
pub mod cli;
pub mod config;
pub mod handlers;
pub mod pages;
pub mod store;
pub mod utils;

pub use api::{CleopatraClient, Execution, ExecutionsResponse, Summary, TestResult, TestResultsResponse};
