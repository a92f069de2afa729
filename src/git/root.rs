//! Repository root discovery by walking up the directory tree.

use std::path::{Path, PathBuf};

use normalize_path::NormalizePath;

/// Entry name whose presence marks a git repository root.
pub const GIT_MARKER: &str = ".git";

/// Decides whether a directory is the root of a repository.
///
/// Implemented by [`GitMarker`] for real filesystems and by any
/// `Fn(&Path) -> bool`, which keeps the walk testable without touching disk.
pub trait RepoMarker {
    fn is_repository_root(&self, dir: &Path) -> bool;
}

impl<F> RepoMarker for F
where
    F: Fn(&Path) -> bool,
{
    fn is_repository_root(&self, dir: &Path) -> bool {
        self(dir)
    }
}

/// Marker that checks for a named entry (`.git` by default) inside the directory.
///
/// Both forms git creates are accepted: a `.git` directory in a regular clone,
/// and a `.git` file in linked worktrees and submodules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitMarker {
    name: String,
}

impl GitMarker {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for GitMarker {
    fn default() -> Self {
        Self::named(GIT_MARKER)
    }
}

impl RepoMarker for GitMarker {
    fn is_repository_root(&self, dir: &Path) -> bool {
        dir.join(&self.name).exists()
    }
}

/// Find the nearest directory at or above `start` that the marker accepts.
///
/// If `start` is an existing file the walk begins at its parent directory
/// (`.` for a bare relative file name), otherwise at `start` itself. The path is normalized lexically first, so
/// `..` components never make the walk revisit a directory. Each step pops one
/// component; the walk ends when there is no parent left, which bounds it at
/// `depth(start) + 1` marker checks.
///
/// Returns `None` for an empty path without consulting the marker.
pub fn locate_repo_root(start: &Path, marker: &impl RepoMarker) -> Option<PathBuf> {
    if start.as_os_str().is_empty() {
        return None;
    }

    let start = start.normalize();
    let mut current: &Path = if start.is_file() {
        // A bare relative file name lives in the working directory
        match start.parent() {
            Some(parent) if parent.as_os_str().is_empty() => Path::new("."),
            parent => parent?,
        }
    } else {
        &start
    };

    loop {
        log::trace!("Probing {} for a repository marker", current.display());
        if marker.is_repository_root(current) {
            log::debug!("Repository root: {}", current.display());
            return Some(current.to_path_buf());
        }

        match current.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && parent != current => {
                current = parent;
            }
            _ => {
                log::debug!("No repository marker above {}", start.display());
                return None;
            }
        }
    }
}
