//! Process execution
//!
//! Every external command (`git`, the browser opener) goes through [`run`] so
//! that invocations are logged uniformly with their timing and outcome.
//!
//! [`ShellConfig`] covers the one place where a user-supplied command string
//! has to be interpreted by a shell: the `browser` config setting.
//! - Unix: `/bin/sh -c`
//! - Windows: `cmd /C`

use std::path::PathBuf;
use std::process::Command;
use std::sync::OnceLock;
use std::time::Instant;

/// Cached shell configuration for the current platform
static SHELL_CONFIG: OnceLock<ShellConfig> = OnceLock::new();

/// Shell configuration for command execution
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Path to the shell executable
    pub executable: PathBuf,
    /// Arguments to pass before the command (e.g., ["-c"] for sh, ["/C"] for cmd)
    pub args: Vec<String>,
}

impl ShellConfig {
    /// Get the shell configuration for the current platform
    pub fn get() -> &'static ShellConfig {
        SHELL_CONFIG.get_or_init(detect_shell)
    }

    /// Create a Command configured for shell execution
    ///
    /// The command string will be passed to the shell for interpretation.
    pub fn command(&self, shell_command: &str) -> Command {
        let mut cmd = Command::new(&self.executable);
        cmd.args(&self.args);
        cmd.arg(shell_command);
        cmd
    }
}

fn detect_shell() -> ShellConfig {
    #[cfg(unix)]
    {
        ShellConfig {
            executable: PathBuf::from("sh"),
            args: vec!["-c".to_string()],
        }
    }

    #[cfg(windows)]
    {
        ShellConfig {
            executable: PathBuf::from("cmd.exe"),
            args: vec!["/C".to_string()],
        }
    }
}

/// Render a command as `program arg1 arg2` for logs and error messages.
pub fn describe(cmd: &Command) -> String {
    let program = cmd.get_program().to_string_lossy();
    let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy()).collect();
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

/// Execute a command with timing and debug logging.
///
/// This is the **only** way to run external commands in repolink.
///
/// ```text
/// $ git remote get-url origin [/home/me/notes]   # with context
/// $ xdg-open https://github.com/owner/repo       # without context
/// [repolink-trace] context=/home/me/notes cmd="..." dur=3.1ms ok=true
/// ```
///
/// The `context` parameter is typically the repository root for git commands, or
/// `None` for the browser opener.
pub fn run(cmd: &mut Command, context: Option<&str>) -> std::io::Result<std::process::Output> {
    let cmd_str = describe(cmd);

    match context {
        Some(ctx) => log::debug!("$ {} [{}]", cmd_str, ctx),
        None => log::debug!("$ {}", cmd_str),
    }

    let t0 = Instant::now();
    let result = cmd.output();
    let duration_ms = t0.elapsed().as_secs_f64() * 1000.0;

    let ctx = context.map(|c| format!("context={} ", c)).unwrap_or_default();
    match &result {
        Ok(output) => log::debug!(
            "[repolink-trace] {}cmd=\"{}\" dur={:.1}ms ok={}",
            ctx,
            cmd_str,
            duration_ms,
            output.status.success()
        ),
        Err(e) => log::debug!(
            "[repolink-trace] {}cmd=\"{}\" dur={:.1}ms err=\"{}\"",
            ctx,
            cmd_str,
            duration_ms,
            e
        ),
    }

    result
}
