use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sweep")]
#[command(about = "Bulk find-and-replace across a project tree with single-level undo.")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Run one bulk replace and exit. Undo state does not survive the
    /// process; use `repl` for a session with undo.
    Replace {
        /// Literal substring a file's content must contain to participate.
        #[arg(long)]
        filter: String,

        /// Regular expression replaced globally within each selected file.
        #[arg(long)]
        search: String,

        /// Literal replacement text (no $1 expansion).
        #[arg(long)]
        replace_with: String,

        /// Project root to enumerate (default: current directory).
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Print statistics as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Interactive session: replace and undo against one project root.
    Repl {
        /// Project root to enumerate (default: current directory).
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
}
