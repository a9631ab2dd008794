//! Procedures behind each command.

pub mod clean;
pub mod health;
pub mod requirements;
pub mod setup;

use crate::config::TasksConfig;
use crate::error::{Result, TaskError};
use crate::registry::{Task, TaskKind, TaskRegistry};
use crate::runner::{Runner, Step};
use std::path::PathBuf;

pub const QDRANT_SCRIPT: &str = "scripts/setup_qdrant.sh";
pub const INGEST_SCRIPT: &str = "scripts/ingest_documents.sh";
pub const OPENAPI_OUTPUT: &str = "docs/openapi.json";

/// Everything a procedure needs.
#[derive(Debug, Clone)]
pub struct TaskContext {
    pub config: TasksConfig,
    pub registry: TaskRegistry,
    pub runner: Runner,
}

impl TaskContext {
    pub fn new(config: TasksConfig, registry: TaskRegistry) -> Self {
        let runner = Runner::new(config.root.clone());
        Self {
            config,
            registry,
            runner,
        }
    }
}

/// Run `task`, printing its banner first and its completion line on success.
pub async fn execute(task: &Task, ctx: &TaskContext) -> Result<()> {
    tracing::debug!(task = task.name, "Starting task");
    announce(task.banner);

    match task.kind {
        TaskKind::Setup => setup::run(ctx).await?,
        TaskKind::Clean => {
            clean::run(ctx.runner.root())?;
        }
        TaskKind::Health => health::run(&ctx.config).await?,
        TaskKind::Requirements => requirements::run(ctx).await?,
        TaskKind::Qdrant => run_script(ctx, QDRANT_SCRIPT).await?,
        TaskKind::Ingest => run_script(ctx, INGEST_SCRIPT).await?,
        TaskKind::Help => print!("{}", ctx.registry.help()),
        kind => run_steps(ctx, &plan(kind, &ctx.config)).await?,
    }

    announce(task.done.unwrap_or_default());
    Ok(())
}

/// Steps of the tasks that are nothing more than a fixed sequence of cargo
/// invocations. Empty for tasks with their own procedure.
pub fn plan(kind: TaskKind, config: &TasksConfig) -> Vec<Step> {
    let cargo = |args: &[&str]| Step::new(config.cargo.as_str(), args.iter().copied());

    match kind {
        TaskKind::Install => vec![
            cargo(&["fetch"]),
            Step::new("rustup", ["component", "add", "clippy", "rustfmt"]),
        ],
        TaskKind::Dev => vec![cargo(&["run", "-p", "rag-api"])],
        TaskKind::Test => vec![cargo(&["test", "--workspace", "--all-targets"])],
        TaskKind::TestUnit => vec![cargo(&["test", "--workspace", "--lib"])],
        TaskKind::TestIntegration => vec![cargo(&["test", "--workspace", "--tests"])],
        TaskKind::Lint => vec![
            cargo(&["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"]),
            cargo(&["fmt", "--all", "--", "--check"]),
        ],
        TaskKind::Format => vec![
            cargo(&["fmt", "--all"]),
            cargo(&["clippy", "--workspace", "--fix", "--allow-dirty", "--allow-staged"]),
        ],
        TaskKind::Docs => vec![
            cargo(&[
                "run",
                "-p",
                "rag-api",
                "--",
                "--generate-openapi-json",
                "--output",
                OPENAPI_OUTPUT,
            ]),
            cargo(&["doc", "--workspace", "--no-deps"]),
        ],
        TaskKind::Build => vec![cargo(&["build", "--workspace", "--release"])],
        TaskKind::Setup
        | TaskKind::Clean
        | TaskKind::Qdrant
        | TaskKind::Ingest
        | TaskKind::Health
        | TaskKind::Requirements
        | TaskKind::Help => Vec::new(),
    }
}

async fn run_steps(ctx: &TaskContext, steps: &[Step]) -> Result<()> {
    for step in steps {
        ctx.runner.run(step).await?;
    }
    Ok(())
}

/// Delegate to a project script under the workspace root.
async fn run_script(ctx: &TaskContext, script: &str) -> Result<()> {
    let path: PathBuf = ctx.runner.root().join(script);
    if !path.is_file() {
        return Err(TaskError::ScriptMissing(path));
    }
    ctx.runner.run(&Step::new("sh", [script])).await
}

fn announce(line: &str) {
    if !line.is_empty() {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command_lines(kind: TaskKind) -> Vec<String> {
        plan(kind, &TasksConfig::default())
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn test_tasks_select_targets() {
        assert_eq!(command_lines(TaskKind::Test), ["cargo test --workspace --all-targets"]);
        assert_eq!(command_lines(TaskKind::TestUnit), ["cargo test --workspace --lib"]);
        assert_eq!(
            command_lines(TaskKind::TestIntegration),
            ["cargo test --workspace --tests"]
        );
    }

    #[test]
    fn lint_runs_clippy_then_format_check() {
        assert_eq!(
            command_lines(TaskKind::Lint),
            [
                "cargo clippy --workspace --all-targets -- -D warnings",
                "cargo fmt --all -- --check",
            ]
        );
    }

    #[test]
    fn docs_generates_openapi_through_the_service_binary() {
        let lines = command_lines(TaskKind::Docs);
        assert_eq!(
            lines[0],
            "cargo run -p rag-api -- --generate-openapi-json --output docs/openapi.json"
        );
        assert_eq!(lines[1], "cargo doc --workspace --no-deps");
    }

    #[test]
    fn configured_cargo_is_used() {
        let config = TasksConfig {
            cargo: "/opt/cargo".to_string(),
            ..TasksConfig::default()
        };
        let steps = plan(TaskKind::Build, &config);
        assert_eq!(steps[0].program, "/opt/cargo");
    }

    #[test]
    fn procedural_tasks_have_no_fixed_plan() {
        for kind in [
            TaskKind::Setup,
            TaskKind::Clean,
            TaskKind::Qdrant,
            TaskKind::Ingest,
            TaskKind::Health,
            TaskKind::Requirements,
            TaskKind::Help,
        ] {
            assert!(plan(kind, &TasksConfig::default()).is_empty(), "{kind:?}");
        }
    }

    #[tokio::test]
    async fn missing_script_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let config = TasksConfig {
            root: dir.path().to_path_buf(),
            ..TasksConfig::default()
        };
        let ctx = TaskContext::new(config, TaskRegistry::builtin());

        let err = run_script(&ctx, QDRANT_SCRIPT).await.unwrap_err();

        assert!(matches!(err, TaskError::ScriptMissing(_)));
    }
}
