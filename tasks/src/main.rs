//! tasks - development task runner entry point

use clap::Parser;
use tasks::{
    cli::Cli,
    config::TasksConfig,
    logging,
    registry::TaskRegistry,
    tasks::{execute, TaskContext},
    Result, TaskError,
};
use std::io::Write;
use tokio::signal;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logger(cli.verbose, cli.quiet) {
        eprintln!("{}", e);
    }

    let registry = TaskRegistry::builtin();

    // A terminal Ctrl+C also kills the running tool; the interrupt wins.
    let result = tokio::select! {
        biased;
        _ = interrupted() => Err(TaskError::Interrupted),
        result = run(cli.command, registry) => result,
    };

    if let Err(err) = result {
        report(&err, &registry);
        let _ = std::io::stdout().flush();
        std::process::exit(err.exit_code());
    }
}

async fn run(command: Option<String>, registry: TaskRegistry) -> Result<()> {
    let Some(token) = command else {
        print!("{}", registry.help());
        return Err(TaskError::MissingCommand);
    };

    let task = registry
        .find(&token)
        .ok_or_else(|| TaskError::UnknownCommand(token.clone()))?;

    let config = TasksConfig::load()?;
    tracing::debug!(?config, task = task.name, "Loaded configuration");

    let ctx = TaskContext::new(config, registry);
    execute(task, &ctx).await
}

/// Resolves on Ctrl+C. If the handler cannot be installed the run simply
/// cannot be interrupted this way.
async fn interrupted() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
}

fn report(err: &TaskError, registry: &TaskRegistry) {
    match err {
        // Help text was already printed.
        TaskError::MissingCommand => {}
        TaskError::UnknownCommand(token) => print!("{}", registry.unknown_command(token)),
        TaskError::CommandFailed { code, .. } => {
            println!("❌ Command failed with exit code {}", code)
        }
        TaskError::Interrupted => println!("\n❌ Task interrupted by user"),
        TaskError::ToolMissing { .. } => println!("❌ {}", err),
        other => println!("❌ Task failed: {}", other),
    }
}
