use super::TaskContext;
use crate::error::Result;
use crate::runner::Step;
use std::collections::BTreeSet;
use std::fs;

/// `(output file, cargo tree --edges value)`.
pub const EXPORTS: &[(&str, &str)] = &[
    ("requirements.txt", "normal"),
    ("requirements-dev.txt", "normal,dev"),
];

pub async fn run(ctx: &TaskContext) -> Result<()> {
    for &(file, edges) in EXPORTS {
        let step = Step::new(
            ctx.config.cargo.as_str(),
            [
                "tree",
                "--workspace",
                "--edges",
                edges,
                "--prefix",
                "none",
            ],
        );
        let tree = ctx.runner.capture(&step).await?;

        let mut contents = dependency_lines(&tree).join("\n");
        contents.push('\n');
        let path = ctx.runner.root().join(file);
        fs::write(&path, contents)?;
        println!("  Wrote {}", path.display());
    }
    Ok(())
}

/// Sorted, de-duplicated `name vX.Y.Z` lines from `cargo tree --prefix none`
/// output, without the `(*)` repeat markers and path annotations.
pub fn dependency_lines(tree: &str) -> Vec<String> {
    tree.lines()
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            let name = parts.next()?;
            let version = parts.next()?;
            Some(format!("{} {}", name, version))
        })
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
