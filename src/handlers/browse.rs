//! Interactive browse session: list → detail navigation carrying the
//! execution store between pages.
//!
//! Requests are issued one at a time (each navigation awaits its load
//! before the next prompt), so a slow earlier response can never land
//! on top of a newer page.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use crate::api::CleopatraClient;
use crate::pages::{self, executions::ExecutionsPage, results::ResultsPage, PageQuery, DEFAULT_LIMIT};
use crate::store::ExecutionStore;

enum View {
    List(ExecutionsPage),
    Detail(ResultsPage),
}

pub async fn run(client: &CleopatraClient) -> Result<()> {
    if !io::stdin().is_terminal() {
        bail!("browse mode requires a terminal");
    }

    let mut store = ExecutionStore::new();
    let mut offset: i64 = 0;

    let mut view = View::List(load_list(client, offset).await);
    render(&view, &store);

    let stdin = io::stdin();
    loop {
        print!("{} ", ">".cyan());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let parts: Vec<&str> = line.split_whitespace().collect();

        match parts.as_slice() {
            [] => continue,
            ["q"] | ["quit"] => break,
            ["h"] | ["help"] | ["?"] => {
                print_help();
                continue;
            }
            ["n"] | ["next"] => {
                let has_next = match &view {
                    View::List(p) => p.has_next,
                    View::Detail(p) => p.has_next,
                };
                if !has_next {
                    println!("already on the last page");
                    continue;
                }
                offset += DEFAULT_LIMIT;
            }
            ["p"] | ["prev"] => {
                if offset == 0 {
                    println!("already on the first page");
                    continue;
                }
                offset = (offset - DEFAULT_LIMIT).max(0);
            }
            ["r"] | ["refresh"] => {}
            ["o", id] | ["open", id] => {
                let Ok(id) = id.parse::<i64>() else {
                    println!("usage: open <execution-id>");
                    continue;
                };
                // The list page hands the chosen execution to the
                // store; the detail page reads name/tag from there.
                let from_page = match &view {
                    View::List(p) => p.executions.iter().find(|e| e.id == id).cloned(),
                    View::Detail(_) => None,
                };
                match from_page {
                    Some(e) => store.set(e),
                    None => store.clear(),
                }
                offset = 0;
                view = View::Detail(load_detail(client, id, offset).await);
                render(&view, &store);
                continue;
            }
            ["b"] | ["back"] => {
                if matches!(view, View::List(_)) {
                    println!("already on the executions list");
                    continue;
                }
                store.clear();
                offset = 0;
                view = View::List(load_list(client, offset).await);
                render(&view, &store);
                continue;
            }
            ["s", id, code] | ["set", id, code] => {
                let Ok(id) = id.parse::<i64>() else {
                    println!("usage: set <result-id> <status>");
                    continue;
                };
                match client.update_test_result_status(id, code).await {
                    Ok(()) => println!("result {id} status set to {code}"),
                    Err(err) => {
                        println!("{} {}", "error:".red(), err);
                        continue;
                    }
                }
                // Fire-and-forget mutation: re-fetch to observe it
            }
            _ => {
                println!("unknown command (try help)");
                continue;
            }
        }

        view = match view {
            View::List(_) => View::List(load_list(client, offset).await),
            View::Detail(p) => View::Detail(load_detail(client, p.execution_id, offset).await),
        };
        render(&view, &store);
    }

    Ok(())
}

async fn load_list(client: &CleopatraClient, offset: i64) -> ExecutionsPage {
    let query = PageQuery::new(None, Some(offset.to_string()));
    pages::executions::load(client, &query).await
}

async fn load_detail(client: &CleopatraClient, execution_id: i64, offset: i64) -> ResultsPage {
    let query = PageQuery::new(None, Some(offset.to_string()));
    pages::results::load(client, &execution_id.to_string(), &query).await
}

fn render(view: &View, store: &ExecutionStore) {
    println!();
    match view {
        View::List(page) => super::render_executions_page(page),
        View::Detail(page) => super::render_results_page(page, store.current()),
    }
}

fn print_help() {
    println!("commands:");
    println!("  open <id>          view an execution's results");
    println!("  set <id> <status>  patch a result's status (P, F, I, ...)");
    println!("  next / prev        page through the current view");
    println!("  back               return to the executions list");
    println!("  refresh            reload the current view");
    println!("  quit               exit");
}
