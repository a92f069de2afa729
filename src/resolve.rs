//! Path to web URL resolution.
//!
//! Straight-line composition of root discovery, remote lookup and address
//! normalization:
//!
//! 1. Locate the repository root containing the path, or fail with
//!    [`ResolveError::NotARepo`] without consulting git.
//! 2. Read the configured address of the remote, or fail with
//!    [`ResolveError::NoRemote`] / [`ResolveError::QueryFailed`].
//! 3. Normalize the address into a [`WebUrl`].

use std::path::Path;

use crate::config::UserConfig;
use crate::git::{
    GitMarker, GitRemoteReader, RemoteReader, RepoMarker, ResolveError, WebUrl, locate_repo_root,
    normalize_remote_url,
};

/// Resolve the web URL of the repository containing `path`.
///
/// The marker and reader are injected so callers can resolve against a fake
/// filesystem or without spawning git.
pub fn resolve_repository_web_url(
    path: &Path,
    remote: &str,
    marker: &impl RepoMarker,
    reader: &impl RemoteReader,
) -> Result<WebUrl, ResolveError> {
    let root = locate_repo_root(path, marker).ok_or_else(|| ResolveError::NotARepo {
        path: path.to_path_buf(),
    })?;

    let address = match reader.remote_address(&root, remote) {
        Ok(Some(address)) => address,
        Ok(None) => {
            return Err(ResolveError::NoRemote {
                root,
                remote: remote.to_string(),
            });
        }
        Err(e) => {
            log::debug!("Remote query failed in {}: {:#}", root.display(), e);
            return Err(ResolveError::QueryFailed {
                root,
                error: format!("{e:#}"),
            });
        }
    };

    let url = normalize_remote_url(&address);
    log::info!("{} -> {}", address, url);
    Ok(url)
}

/// Resolution with the standard collaborators: a `.git`-style marker and the
/// git-backed remote reader.
#[derive(Debug, Clone)]
pub struct Resolver<R = GitRemoteReader> {
    marker: GitMarker,
    reader: R,
    remote: String,
}

impl Resolver {
    /// Resolver configured from the user config (`remote` and `marker` keys).
    pub fn from_config(config: &UserConfig) -> Self {
        Self::with_reader(GitRemoteReader, config)
    }
}

impl<R: RemoteReader> Resolver<R> {
    pub fn with_reader(reader: R, config: &UserConfig) -> Self {
        Self {
            marker: GitMarker::named(config.marker()),
            reader,
            remote: config.remote().to_string(),
        }
    }

    /// Override the remote whose address is resolved.
    pub fn remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = remote.into();
        self
    }

    pub fn remote_name(&self) -> &str {
        &self.remote
    }

    pub fn resolve(&self, path: &Path) -> Result<WebUrl, ResolveError> {
        resolve_repository_web_url(path, &self.remote, &self.marker, &self.reader)
    }
}
