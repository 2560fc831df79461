//! Shared command context passed into command families.

use std::path::{Path, PathBuf};

use crate::runtime::error::{XtaskError, XtaskResult};

/// Shared execution context for xtask command families.
#[derive(Clone, Debug)]
pub struct CommandContext {
    root: PathBuf,
}

impl CommandContext {
    /// Create a new command context rooted at the current workspace.
    pub fn new() -> XtaskResult<Self> {
        Ok(Self::with_root(workspace_root()?))
    }

    /// Create a context rooted at an explicit directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Workspace root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a user-supplied path; relative paths are taken from the workspace root.
    pub fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

fn workspace_root() -> XtaskResult<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| XtaskError::environment("xtask lives under workspace root"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn relative_paths_resolve_against_root() {
        let ctx = CommandContext::with_root("/work/catalog");
        assert_eq!(
            ctx.resolve("data/meta.json"),
            PathBuf::from("/work/catalog/data/meta.json")
        );
        assert_eq!(ctx.resolve("/tmp/meta.json"), PathBuf::from("/tmp/meta.json"));
    }
}
