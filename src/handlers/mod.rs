//! CLI handlers: one per subcommand, plus shared table rendering.

use owo_colors::OwoColorize;

use crate::api::Execution;
use crate::pages::{executions::ExecutionsPage, results::ResultsPage};
use crate::utils::{format_date_time, format_execution_time, status_info};

pub mod browse;
pub mod executions;
pub mod results;
pub mod status;

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

/// Status text colored by its display class.
fn colored_status(code: &str) -> String {
    let info = status_info(code);
    match info.class {
        "status-passed" => format!("{}", info.text.green()),
        "status-failed" => format!("{}", info.text.red()),
        "status-ignored" => format!("{}", info.text.yellow()),
        _ => info.text,
    }
}

pub(crate) fn render_executions_page(page: &ExecutionsPage) {
    if let Some(err) = &page.error {
        eprintln!("{} {}", "error:".red(), err);
    }

    if page.executions.is_empty() {
        println!("No executions.");
    } else {
        println!(
            "{:>6}  {:<30} {:<16} {:<14} {}",
            "ID", "NAME", "TAG", "CREATED BY", "CREATED"
        );
        for e in &page.executions {
            println!(
                "{:>6}  {:<30} {:<16} {:<14} {}",
                e.id,
                e.name,
                opt(&e.tag),
                opt(&e.created_by),
                format_date_time(e.time_created)
            );
        }
    }

    render_page_footer(page.executions.len(), page.total, page.limit, page.offset, page.has_next);
}

pub(crate) fn render_results_page(page: &ResultsPage, execution: Option<&Execution>) {
    // Name/tag come from the store; the detail page never fetches
    // execution metadata on its own.
    match execution {
        Some(e) => {
            let tag = e.tag.as_deref().unwrap_or("-");
            println!("{} ({})", e.name.bold(), tag);
        }
        None => println!("{}", format!("Execution #{}", page.execution_id).bold()),
    }

    if let Some(err) = &page.error {
        eprintln!("{} {}", "error:".red(), err);
    }

    let s = &page.summary;
    println!(
        "summary: {} total, {}, {}, {}",
        s.total,
        format!("{} passed", s.pass).green(),
        format!("{} failed", s.fail).red(),
        format!("{} ignored", s.ignor).yellow()
    );

    if page.results.is_empty() {
        println!("No results.");
    } else {
        println!(
            "{:>6}  {:<36} {:<12} {:<10} {:>9}  {}",
            "ID", "NAME", "PLATFORM", "STATUS", "TIME", "CREATED"
        );
        for r in &page.results {
            let time = r
                .execution_time
                .map(format_execution_time)
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{:>6}  {:<36} {:<12} {:<10} {:>9}  {}",
                r.id,
                r.name,
                r.platform,
                colored_status(&r.status),
                time,
                format_date_time(r.time_created)
            );
        }
        println!("platforms: {}", page.available_platforms.join(", "));
        println!("statuses:  {}", page.available_statuses.join(", "));
    }

    render_page_footer(page.results.len(), page.total, page.limit, page.offset, page.has_next);
}

fn render_page_footer(shown: usize, total: i64, limit: i64, offset: i64, has_next: bool) {
    if shown == 0 {
        println!("showing 0 of {total}");
        return;
    }
    let from = offset + 1;
    let to = offset + shown as i64;
    if has_next {
        println!(
            "showing {from}-{to} of {total} (next page: --offset {})",
            offset + limit
        );
    } else {
        println!("showing {from}-{to} of {total}");
    }
}
