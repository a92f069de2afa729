//! Opening a web URL with the platform's default handler.

use std::process::Command;

use anyhow::{Context, bail};
use shell_escape::escape;

use crate::git::WebUrl;
use crate::shell_exec::{ShellConfig, describe, run};

/// Program that opens URLs on this platform.
#[cfg(target_os = "macos")]
const PLATFORM_OPENER: &str = "open";

#[cfg(windows)]
const PLATFORM_OPENER: &str = "cmd";

#[cfg(all(unix, not(target_os = "macos")))]
const PLATFORM_OPENER: &str = "xdg-open";

/// Build the command that opens `url`.
///
/// With a configured `browser` command the URL is shell-escaped and appended to
/// it, and the result runs through the platform shell. Otherwise the platform
/// opener is invoked directly.
pub fn opener_command(url: &WebUrl, browser: Option<&str>) -> Command {
    match browser {
        Some(browser) => {
            let line = format!("{} {}", browser.trim(), escape(url.as_str().into()));
            ShellConfig::get().command(&line)
        }
        None => platform_command(url),
    }
}

#[cfg(windows)]
fn platform_command(url: &WebUrl) -> Command {
    let mut cmd = Command::new(PLATFORM_OPENER);
    // The empty string is the window title `start` expects before the target
    cmd.args(["/C", "start", ""]).arg(url.as_str());
    cmd
}

#[cfg(not(windows))]
fn platform_command(url: &WebUrl) -> Command {
    let mut cmd = Command::new(PLATFORM_OPENER);
    cmd.arg(url.as_str());
    cmd
}

/// Open `url` in a browser, waiting for the opener to exit.
pub fn open_url(url: &WebUrl, browser: Option<&str>) -> anyhow::Result<()> {
    if browser.is_none() && which::which(PLATFORM_OPENER).is_err() {
        bail!(
            "Cannot open {url}: `{PLATFORM_OPENER}` not found on PATH. Set `browser` in the config file"
        );
    }

    let mut cmd = opener_command(url, browser);
    let description = describe(&cmd);
    let output =
        run(&mut cmd, None).with_context(|| format!("Failed to execute: {description}"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "`{}` exited with {}: {}",
            description,
            output.status,
            stderr.trim()
        );
    }
    Ok(())
}
