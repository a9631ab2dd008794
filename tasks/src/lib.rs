//! Development task runner for the rag-api workspace.
//!
//! `tasks <command>` looks the command up in a fixed table and runs the
//! matching procedure. Procedures spawn external tools one step at a time;
//! the first failing step ends the run with that tool's exit code.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod registry;
pub mod runner;
pub mod tasks;

pub use error::{Result, TaskError};
