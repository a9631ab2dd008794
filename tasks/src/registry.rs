//! The fixed command table.

use std::fmt::Write as _;

/// Procedure behind a command name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Setup,
    Install,
    Dev,
    Test,
    TestUnit,
    TestIntegration,
    Lint,
    Format,
    Clean,
    Qdrant,
    Ingest,
    Docs,
    Build,
    Health,
    Requirements,
    Help,
}

/// One entry of the command table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Task {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: TaskKind,
    /// Printed before the procedure starts.
    pub banner: &'static str,
    /// Printed after the procedure succeeds.
    pub done: Option<&'static str>,
}

const TASKS: &[Task] = &[
    Task {
        name: "setup",
        description: "Initial project setup",
        kind: TaskKind::Setup,
        banner: "🚀 Setting up RAG project...",
        done: Some("✅ Project setup complete!"),
    },
    Task {
        name: "install",
        description: "Install all dependencies",
        kind: TaskKind::Install,
        banner: "📦 Installing dependencies...",
        done: Some("✅ Dependencies installed"),
    },
    Task {
        name: "dev",
        description: "Start development server",
        kind: TaskKind::Dev,
        banner: "🔧 Starting development server...",
        done: None,
    },
    Task {
        name: "test",
        description: "Run test suite",
        kind: TaskKind::Test,
        banner: "🧪 Running tests...",
        done: None,
    },
    Task {
        name: "test_unit",
        description: "Run only unit tests",
        kind: TaskKind::TestUnit,
        banner: "🧪 Running unit tests...",
        done: None,
    },
    Task {
        name: "test_integration",
        description: "Run only integration tests",
        kind: TaskKind::TestIntegration,
        banner: "🧪 Running integration tests...",
        done: None,
    },
    Task {
        name: "lint",
        description: "Run clippy and check formatting",
        kind: TaskKind::Lint,
        banner: "🔍 Running linting and format checks...",
        done: Some("✅ Linting complete"),
    },
    Task {
        name: "format",
        description: "Format code with rustfmt and apply clippy fixes",
        kind: TaskKind::Format,
        banner: "🎨 Formatting code...",
        done: Some("✅ Code formatted"),
    },
    Task {
        name: "clean",
        description: "Clean up generated files",
        kind: TaskKind::Clean,
        banner: "🧹 Cleaning up...",
        done: Some("✅ Cleanup complete"),
    },
    Task {
        name: "qdrant",
        description: "Setup Qdrant collections",
        kind: TaskKind::Qdrant,
        banner: "🗄️  Setting up Qdrant collections...",
        done: Some("✅ Qdrant setup complete"),
    },
    Task {
        name: "ingest",
        description: "Ingest sample documents",
        kind: TaskKind::Ingest,
        banner: "📄 Ingesting documents...",
        done: Some("✅ Documents ingested"),
    },
    Task {
        name: "docs",
        description: "Generate documentation",
        kind: TaskKind::Docs,
        banner: "📚 Generating documentation...",
        done: Some("✅ Documentation generated"),
    },
    Task {
        name: "build",
        description: "Build the project",
        kind: TaskKind::Build,
        banner: "🏗️  Building project...",
        done: Some("✅ Build complete"),
    },
    Task {
        name: "health",
        description: "Run system health checks",
        kind: TaskKind::Health,
        banner: "💊 Running health checks...",
        done: None,
    },
    Task {
        name: "requirements",
        description: "Export dependency lists",
        kind: TaskKind::Requirements,
        banner: "📝 Exporting requirements...",
        done: Some("✅ Requirements exported"),
    },
    Task {
        name: "help",
        description: "Show available commands",
        kind: TaskKind::Help,
        banner: "",
        done: None,
    },
];

/// Ordered, immutable view of the command table.
#[derive(Debug, Clone, Copy)]
pub struct TaskRegistry {
    tasks: &'static [Task],
}

impl Default for TaskRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TaskRegistry {
    pub fn builtin() -> Self {
        Self { tasks: TASKS }
    }

    /// Look up a command as typed on the command line; `test-unit` and
    /// `test_unit` name the same task.
    pub fn find(&self, token: &str) -> Option<&'static Task> {
        let name = normalize(token);
        self.tasks.iter().find(|task| task.name == name)
    }

    pub fn get(&self, kind: TaskKind) -> Option<&'static Task> {
        self.tasks.iter().find(|task| task.kind == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Task> {
        self.tasks.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.tasks.iter().map(|task| task.name)
    }

    /// Usage text listing every command with its description.
    pub fn help(&self) -> String {
        let width = self.names().map(str::len).max().unwrap_or(0);
        let mut text = String::from(
            "Development task automation for the RAG project.\n\n\
             Usage:\n    tasks <command>\n\nAvailable commands:\n",
        );
        for task in self.iter() {
            let _ = writeln!(text, "    {:<width$}  - {}", task.name, task.description);
        }
        text
    }

    /// Message printed for a command that is not in the table.
    pub fn unknown_command(&self, token: &str) -> String {
        let mut text = format!("❌ Unknown command: {}\n\nAvailable commands:\n", token);
        for name in self.names() {
            let _ = writeln!(text, "  {}", name);
        }
        text
    }
}

pub fn normalize(token: &str) -> String {
    token.replace('-', "_")
}
