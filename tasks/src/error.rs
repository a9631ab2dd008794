use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for the task runner
pub type Result<T> = std::result::Result<T, TaskError>;

/// Everything that can end a task run.
#[derive(Error, Debug)]
pub enum TaskError {
    #[error("no command given")]
    MissingCommand,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("`{command}` exited with code {code}")]
    CommandFailed { command: String, code: i32 },

    #[error("Task interrupted by user")]
    Interrupted,

    #[error("{tool} is not installed. {hint}")]
    ToolMissing { tool: String, hint: String },

    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("script not found: {}", .0.display())]
    ScriptMissing(PathBuf),

    #[error("health check failed: {0}")]
    Health(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl TaskError {
    /// Process exit status for this error: the failing tool's own code for
    /// step failures, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            TaskError::CommandFailed { code, .. } => *code,
            _ => 1,
        }
    }
}

impl From<config::ConfigError> for TaskError {
    fn from(err: config::ConfigError) -> Self {
        TaskError::Config(err.to_string())
    }
}

impl From<walkdir::Error> for TaskError {
    fn from(err: walkdir::Error) -> Self {
        TaskError::Io(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failure_propagates_tool_exit_code() {
        let err = TaskError::CommandFailed {
            command: "cargo test".to_string(),
            code: 101,
        };
        assert_eq!(err.exit_code(), 101);
    }

    #[test]
    fn other_failures_exit_with_one() {
        assert_eq!(TaskError::MissingCommand.exit_code(), 1);
        assert_eq!(TaskError::UnknownCommand("nope".into()).exit_code(), 1);
        assert_eq!(TaskError::Interrupted.exit_code(), 1);
        assert_eq!(TaskError::Health("down".into()).exit_code(), 1);
    }
}
