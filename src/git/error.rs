//! Resolution error types and formatting
//!
//! **`ResolveError`** is a typed enum for the ways resolving a web URL can
//! fail. Use `.into()` to convert to `anyhow::Error` while preserving the type
//! for pattern matching; [`exit_code`] recovers it from an `anyhow::Error`.
//! Display produces styled output for users.

use std::path::PathBuf;

use color_print::cformat;
use shell_escape::escape;

use crate::path::format_path_for_display;
use crate::styling::{error_message, hint_message};

/// Why no web URL could be produced for a path.
///
/// ```
/// use std::path::PathBuf;
/// use repolink::git::ResolveError;
///
/// let err = ResolveError::NotARepo { path: PathBuf::from("/tmp") };
/// assert_eq!(err.reason(), "not-a-repo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, strum::IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum ResolveError {
    /// No ancestor of the path carries a repository marker.
    #[strum(serialize = "not-a-repo")]
    NotARepo { path: PathBuf },
    /// The repository exists but the requested remote is not configured.
    NoRemote { root: PathBuf, remote: String },
    /// Asking git for the remote address failed; `error` is git's message.
    QueryFailed { root: PathBuf, error: String },
}

impl ResolveError {
    /// Stable machine-readable reason: `not-a-repo`, `no-remote` or `query-failed`.
    pub fn reason(&self) -> &'static str {
        self.into()
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotARepo { .. } => 2,
            Self::NoRemote { .. } => 3,
            Self::QueryFailed { .. } => 4,
        }
    }
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveError::NotARepo { path } => {
                let path = format_path_for_display(path);
                write!(
                    f,
                    "{}\n{}",
                    error_message(cformat!("<bold>{path}</> is not inside a git repository")),
                    hint_message("No parent directory contains a .git entry")
                )
            }

            ResolveError::NoRemote { root, remote } => {
                let root = format_path_for_display(root);
                let escaped = escape(remote.as_str().into());
                write!(
                    f,
                    "{}\n{}",
                    error_message(cformat!(
                        "Repository <bold>{root}</> has no remote named <bold>{remote}</>"
                    )),
                    hint_message(cformat!(
                        "To add one, run <bright-black>git remote add {escaped} <<url>></>"
                    ))
                )
            }

            ResolveError::QueryFailed { root, error } => {
                let root = format_path_for_display(root);
                let message = cformat!("Could not read remote configuration of <bold>{root}</>");
                if error.is_empty() {
                    write!(f, "{}", error_message(message))
                } else {
                    write!(f, "{}\n{}", error_message(message), hint_message(error))
                }
            }
        }
    }
}

impl std::error::Error for ResolveError {}

/// Exit code for an error returned by the CLI, if it carries one.
pub fn exit_code(err: &anyhow::Error) -> Option<i32> {
    err.downcast_ref::<ResolveError>().map(ResolveError::exit_code)
}
