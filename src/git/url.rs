//! Git remote address normalization.
//!
//! Turns the address stored in `remote.<name>.url` into the HTTPS page of the
//! repository on its hosting provider.

use std::fmt;

/// A remote address classified by shape.
///
/// Classification is ordered; the first matching form wins:
///
/// 1. `<user>@<host>:<owner/repo>.git` ([`Ssh`](Self::Ssh))
/// 2. `https://...` ([`Https`](Self::Https))
/// 3. anything else ([`Unrecognized`](Self::Unrecognized))
///
/// # Example
///
/// ```
/// use repolink::git::RemoteAddress;
///
/// let address = RemoteAddress::classify("git@github.com:owner/repo.git");
/// assert_eq!(
///     address,
///     RemoteAddress::Ssh { user: "git", host: "github.com", path: "owner/repo" }
/// );
/// assert_eq!(address.to_web_url().as_str(), "https://github.com/owner/repo");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteAddress<'a> {
    /// scp-like SSH address. `path` excludes the `.git` suffix and may contain
    /// nested groups (`group/sub/repo`).
    Ssh {
        user: &'a str,
        host: &'a str,
        path: &'a str,
    },
    /// HTTPS address with at most one trailing `.git` already removed.
    Https { url: &'a str },
    /// `ssh://`, `git://`, `http://`, local paths, SSH without `.git`...
    Unrecognized(&'a str),
}

impl<'a> RemoteAddress<'a> {
    /// Classify a raw remote address. Never fails.
    ///
    /// Matching is case-sensitive and the input is not trimmed.
    pub fn classify(address: &'a str) -> Self {
        if let Some(ssh) = Self::match_ssh(address) {
            return ssh;
        }
        if let Some(https) = Self::match_https(address) {
            return https;
        }
        Self::Unrecognized(address)
    }

    fn match_ssh(address: &'a str) -> Option<Self> {
        // git@github.com:owner/repo.git
        let rest = address.strip_suffix(".git")?;
        let (user, rest) = rest.split_once('@')?;
        let (host, path) = rest.split_once(':')?;

        if user.is_empty() || user.contains(['/', ':']) {
            return None;
        }
        // A slash before the colon makes git treat the address as a local path,
        // so `git@a/b:c.git` passes through unchanged
        if host.is_empty() || host.contains('/') || path.is_empty() {
            return None;
        }

        Some(Self::Ssh { user, host, path })
    }

    fn match_https(address: &'a str) -> Option<Self> {
        if !address.starts_with("https://") {
            return None;
        }
        let url = address.strip_suffix(".git").unwrap_or(address);
        Some(Self::Https { url })
    }

    /// Short name of the detected form, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Ssh { .. } => "ssh",
            Self::Https { .. } => "https",
            Self::Unrecognized(_) => "unrecognized",
        }
    }

    /// The browsable URL for this address. Unrecognized addresses pass through.
    pub fn to_web_url(&self) -> WebUrl {
        match self {
            Self::Ssh { host, path, .. } => WebUrl(format!("https://{host}/{path}")),
            Self::Https { url } => WebUrl((*url).to_string()),
            Self::Unrecognized(raw) => WebUrl((*raw).to_string()),
        }
    }
}

/// Normalized web address of a repository, e.g. `https://github.com/owner/repo`.
///
/// For unrecognized remote shapes this holds the original address unchanged,
/// so callers always have something to display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WebUrl(String);

impl WebUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for WebUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for WebUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Rewrite a remote address into the repository's web URL.
///
/// Pure and total: unrecognized input is returned byte-for-byte.
pub fn normalize_remote_url(address: &str) -> WebUrl {
    let classified = RemoteAddress::classify(address);
    log::debug!("Remote address {address:?} classified as {}", classified.kind());
    classified.to_web_url()
}
