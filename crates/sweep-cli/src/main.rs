//! sweep CLI: bulk find-and-replace with single-level undo.
//!
//! One-shot mode (`replace`) runs a single bulk replace; `repl` keeps the
//! engine alive so `undo` can reverse the last replace.
//!
//! Logging: set `RUST_LOG=sweep_core=debug` (or `info`, `warn`) to see
//! engine logs on stderr.

mod cli;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sweep_core::{BulkEditor, ReplaceError, ReplaceRequest, ReplaceStats};
use sweep_io::FsStore;

use crate::cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("sweep_core=warn,sweep_io=warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    match cli.command {
        Command::Replace {
            filter,
            search,
            replace_with,
            root,
            json,
        } => {
            let mut editor = BulkEditor::new(FsStore::new(root));
            let stats = editor.run_replace(&ReplaceRequest::new(filter, search, replace_with))?;
            print_stats(&stats, json)
        }
        Command::Repl { root } => run_repl(root),
    }
}

fn print_stats(stats: &ReplaceStats, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(stats)?);
    } else {
        println!(
            "Replaced {} occurrence(s) in {} file(s).",
            stats.occurrences_replaced, stats.files_mutated
        );
    }
    Ok(())
}

fn run_repl(root: PathBuf) -> anyhow::Result<()> {
    let mut editor = BulkEditor::new(FsStore::new(root));
    println!(
        "sweep repl over {} (commands: replace, undo, quit)",
        editor.store().root().display()
    );
    let stdin = io::stdin();

    loop {
        let Some(line) = prompt(&stdin, "sweep> ")? else {
            break;
        };
        match line.trim() {
            "" => {}
            "replace" => {
                let (Some(filter), Some(search), Some(replacement)) = (
                    prompt(&stdin, "File filter: ")?,
                    prompt(&stdin, "Search pattern: ")?,
                    prompt(&stdin, "Replace with: ")?,
                ) else {
                    break;
                };
                match editor.run_replace(&ReplaceRequest::new(filter, search, replacement)) {
                    Ok(stats) => print_stats(&stats, false)?,
                    Err(err) => eprintln!("error: {err}"),
                }
            }
            "undo" => match editor.run_undo() {
                Ok(()) => println!("Restored files from the last bulk replace."),
                Err(ReplaceError::NothingToUndo) => println!("Nothing to undo."),
                Err(err) => eprintln!("error: {err}"),
            },
            "quit" | "exit" => break,
            other => println!("unknown command: {other} (try: replace, undo, quit)"),
        }
    }
    Ok(())
}

/// Print `label`, then read one line. `None` on EOF.
fn prompt(stdin: &io::Stdin, label: &str) -> anyhow::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if stdin.lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
