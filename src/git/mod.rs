//! Git repository discovery and remote address handling
//!
//! - [`locate_repo_root`] walks up from a path to the nearest repository root.
//! - [`normalize_remote_url`] rewrites a remote address into a web URL.
//! - [`RemoteReader`] is the seam to `git` for reading a remote's address.
//!
//! The locator and the normalizer are independent of each other and of git
//! itself; only [`GitRemoteReader`] spawns processes.

mod error;
mod remote;
mod root;
mod url;

pub use error::{ResolveError, exit_code};
pub use remote::{DEFAULT_REMOTE, GitRemoteReader, RemoteReader};
pub use root::{GIT_MARKER, GitMarker, RepoMarker, locate_repo_root};
pub use url::{RemoteAddress, WebUrl, normalize_remote_url};
