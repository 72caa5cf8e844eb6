//! Project and plugin root discovery.
//!
//! The engine takes explicit paths everywhere; only this layer consults
//! the environment, once per invocation.

use std::env;
use std::path::{Path, PathBuf};

/// Project root: `CLAUDE_PROJECT_DIR` if set, else the nearest ancestor
/// of the working directory containing `.claude`, else the working
/// directory itself.
pub fn discover_project_root() -> PathBuf {
    if let Some(root) = env::var_os("CLAUDE_PROJECT_DIR") {
        return PathBuf::from(root);
    }
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    nearest_claude_root(&cwd)
}

/// Walk `start` and its ancestors for a `.claude` directory.
pub fn nearest_claude_root(start: &Path) -> PathBuf {
    for candidate in start.ancestors() {
        if candidate.join(".claude").is_dir() {
            return candidate.to_path_buf();
        }
    }
    start.to_path_buf()
}

/// Plugin root for static resources: `CLAUDE_PLUGIN_ROOT` if set, else
/// the directory containing the running executable, else the working
/// directory.
pub fn discover_plugin_root() -> PathBuf {
    if let Some(root) = env::var_os("CLAUDE_PLUGIN_ROOT") {
        return PathBuf::from(root);
    }
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::nearest_claude_root;
    use tempfile::TempDir;

    #[test]
    fn finds_marker_in_ancestor() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".claude")).unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(nearest_claude_root(&nested), dir.path());
    }

    #[test]
    fn prefers_the_nearest_marker() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".claude")).unwrap();
        let nested = dir.path().join("sub");
        std::fs::create_dir_all(nested.join(".claude")).unwrap();

        assert_eq!(nearest_claude_root(&nested), nested);
    }
}
