use super::{announce, plan, run_steps, TaskContext};
use crate::error::{Result, TaskError};
use crate::registry::TaskKind;
use crate::runner::Step;
use std::path::Path;

/// Project skeleton created by `setup`, relative to the workspace root.
pub const PROJECT_DIRECTORIES: &[&str] = &[
    "data/raw",
    "data/processed",
    "docs",
    "scripts",
    "rag-api/tests/fixtures",
];

const CARGO_HINT: &str = "Please install it first:\n   \
    curl --proto '=https' --tlsv1.2 -sSf https://sh.rustup.rs | sh\n   \
    or visit: https://rustup.rs";

pub async fn run(ctx: &TaskContext) -> Result<()> {
    check_cargo(ctx).await?;

    create_directories(ctx.runner.root())?;
    println!("✅ Directory structure created");

    if let Some(install) = ctx.registry.get(TaskKind::Install) {
        announce(install.banner);
        run_steps(ctx, &plan(TaskKind::Install, &ctx.config)).await?;
        announce(install.done.unwrap_or_default());
    }

    Ok(())
}

/// Fail with an install hint unless the configured cargo answers `--version`.
pub async fn check_cargo(ctx: &TaskContext) -> Result<()> {
    let cargo = &ctx.config.cargo;

    if which::which(cargo).is_err() {
        return Err(missing(cargo));
    }

    if !ctx.runner.probe(&Step::new(cargo.as_str(), ["--version"])).await {
        return Err(missing(cargo));
    }

    Ok(())
}

fn missing(tool: &str) -> TaskError {
    TaskError::ToolMissing {
        tool: tool.to_string(),
        hint: CARGO_HINT.to_string(),
    }
}

pub fn create_directories(root: &Path) -> Result<()> {
    for dir in PROJECT_DIRECTORIES {
        std::fs::create_dir_all(root.join(dir))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TasksConfig;
    use crate::registry::TaskRegistry;

    #[test]
    fn creates_skeleton_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();

        create_directories(dir.path()).unwrap();
        create_directories(dir.path()).unwrap();

        for sub in PROJECT_DIRECTORIES {
            assert!(dir.path().join(sub).is_dir(), "{} missing", sub);
        }
    }

    #[tokio::test]
    async fn missing_cargo_is_reported_with_hint() {
        let config = TasksConfig {
            cargo: "definitely-not-cargo-xyz".to_string(),
            ..TasksConfig::default()
        };
        let ctx = TaskContext::new(config, TaskRegistry::builtin());

        let err = check_cargo(&ctx).await.unwrap_err();

        assert!(matches!(err, TaskError::ToolMissing { .. }));
        assert!(err.to_string().contains("rustup"));
    }
}
