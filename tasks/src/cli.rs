//! Command line argument definitions

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tasks")]
#[command(about = "Development task automation for the RAG project")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Task to run; `tasks help` lists them. Dashes and underscores are interchangeable.
    #[arg(allow_hyphen_values = true)]
    pub command: Option<String>,

    /// Anything after the task name is ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub rest: Vec<String>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}
