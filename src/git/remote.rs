//! Reading the configured remote address of a repository.

use std::path::Path;
use std::process::Command;

use anyhow::Context;

use crate::shell_exec::run;

/// Remote used when neither the config file nor the command line names one.
pub const DEFAULT_REMOTE: &str = "origin";

/// Looks up the address of a named remote inside a repository root.
///
/// Outcomes:
/// - `Ok(Some(address))` - the remote is configured
/// - `Ok(None)` - the repository has no such remote
/// - `Err(_)` - the query itself failed (git missing, unreadable config, ...)
pub trait RemoteReader {
    fn remote_address(&self, root: &Path, remote: &str) -> anyhow::Result<Option<String>>;
}

/// [`RemoteReader`] backed by `git remote get-url`.
#[derive(Debug, Clone, Default)]
pub struct GitRemoteReader;

impl RemoteReader for GitRemoteReader {
    fn remote_address(&self, root: &Path, remote: &str) -> anyhow::Result<Option<String>> {
        let mut cmd = Command::new("git");
        cmd.args(["remote", "get-url", remote]);
        cmd.current_dir(root);
        // Inherited GIT_DIR would point git at a different repository than `root`
        cmd.env_remove("GIT_DIR").env_remove("GIT_WORK_TREE");
        // stderr is matched against git's untranslated messages
        cmd.env("LC_ALL", "C");

        let context = root.display().to_string();
        let output = run(&mut cmd, Some(&context))
            .with_context(|| format!("Failed to execute: git remote get-url {remote}"))?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            for line in stderr.trim().lines() {
                log::debug!("  ! {}", line);
            }
            if is_missing_remote(&stderr) {
                return Ok(None);
            }
            anyhow::bail!("{}", stderr.trim());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let address = stdout.trim();
        log::debug!("  {}", address);
        Ok((!address.is_empty()).then(|| address.to_string()))
    }
}

/// Whether git's stderr reports that the requested remote does not exist.
fn is_missing_remote(stderr: &str) -> bool {
    stderr.contains("No such remote")
}
