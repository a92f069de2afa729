use std::path::{Path, PathBuf};

/// Get the user's home directory.
///
/// Uses the `home` crate which handles platform-specific detection:
/// - Unix: `$HOME` environment variable
/// - Windows: `USERPROFILE` or `HOMEDRIVE`/`HOMEPATH`
pub fn home_dir() -> Option<PathBuf> {
    home::home_dir()
}

/// Format a filesystem path for user-facing output.
///
/// Replaces home directory prefix with `~` (e.g., `/Users/alex/notes` -> `~/notes`).
/// Paths outside home are returned unchanged.
pub fn format_path_for_display(path: &Path) -> String {
    if let Some(home) = home_dir()
        && let Ok(stripped) = path.strip_prefix(&home)
    {
        if stripped.as_os_str().is_empty() {
            return "~".to_string();
        }

        let mut display_path = PathBuf::from("~");
        display_path.push(stripped);
        return display_path.display().to_string();
    }

    path.display().to_string()
}

/// Turn a user-supplied path into the absolute starting point for root discovery.
///
/// Relative paths are joined onto `cwd`. Existing paths are canonicalized with
/// `dunce` so symlinked checkouts resolve to the directory git itself reports,
/// without Windows verbatim prefixes (`\\?\`). Paths that don't exist are kept
/// as joined; the locator normalizes them lexically.
pub fn resolve_start_path(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };

    match dunce::canonicalize(&joined) {
        Ok(canonical) => canonical,
        Err(e) => {
            log::debug!("Not canonicalizing {}: {}", joined.display(), e);
            joined
        }
    }
}
