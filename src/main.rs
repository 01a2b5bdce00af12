//! Backlog Graph - prints the backlog as a Graphviz graph

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = backlog_graph::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
