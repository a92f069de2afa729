// Not every integration module uses every helper.
#![allow(dead_code)]

//! # Test Utilities for repolink
//!
//! `TestRepo` creates a real git repository in a temporary directory, with an
//! isolated environment so results don't depend on the developer's machine:
//!
//! - `GIT_CONFIG_GLOBAL` points at a per-test gitconfig; system config is off
//! - `HOME` and `XDG_CONFIG_HOME` point into the temp directory
//! - `REPOLINK_CONFIG_PATH` points at a per-test config file
//! - `LC_ALL=C` so git's messages are untranslated
//!
//! Paths are canonicalized (macOS `/var` -> `/private/var`) so they compare
//! equal to what git and repolink report.
//!
//! ```text
//! home_path()/
//! ├── repo/              # The git repository (root_path())
//! ├── outside/           # A directory that is not in any repository
//! ├── test-config.toml   # REPOLINK_CONFIG_PATH target
//! └── test-gitconfig     # GIT_CONFIG_GLOBAL target
//! ```

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

/// Basic TestRepo fixture - creates a fresh git repository.
#[rstest::fixture]
pub fn repo() -> TestRepo {
    TestRepo::new()
}

/// TestRepo with `origin` set to a GitHub SSH address.
#[rstest::fixture]
pub fn repo_with_origin(repo: TestRepo) -> TestRepo {
    repo.add_remote("origin", "git@github.com:owner/repo.git");
    repo
}

pub struct TestRepo {
    temp_dir: TempDir,
    root: PathBuf,
    git_config_path: PathBuf,
    test_config_path: PathBuf,
}

impl TestRepo {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let home = dunce::canonicalize(temp_dir.path()).unwrap();

        let git_config_path = home.join("test-gitconfig");
        std::fs::write(
            &git_config_path,
            "[user]\n\tname = Test User\n\temail = test@example.com\n\
             [init]\n\tdefaultBranch = main\n",
        )
        .unwrap();

        let root = home.join("repo");
        std::fs::create_dir(&root).unwrap();
        std::fs::create_dir(home.join("outside")).unwrap();

        let repo = Self {
            temp_dir,
            root,
            git_config_path,
            test_config_path: home.join("test-config.toml"),
        };
        repo.run_git(&["init", "-q"]);
        repo
    }

    /// The isolated HOME directory containing the repo.
    pub fn home_path(&self) -> PathBuf {
        dunce::canonicalize(self.temp_dir.path()).unwrap()
    }

    pub fn root_path(&self) -> &Path {
        &self.root
    }

    /// A directory next to the repository, outside of any repository.
    pub fn outside_path(&self) -> PathBuf {
        self.home_path().join("outside")
    }

    pub fn test_config_path(&self) -> &Path {
        &self.test_config_path
    }

    /// Write the user config file picked up via `REPOLINK_CONFIG_PATH`.
    pub fn write_test_config(&self, contents: &str) {
        std::fs::write(&self.test_config_path, contents).unwrap();
    }

    /// Apply the isolated environment to any command.
    pub fn configure_env(&self, cmd: &mut Command) {
        let home = self.home_path();
        cmd.env("GIT_CONFIG_GLOBAL", &self.git_config_path)
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env("HOME", &home)
            .env("USERPROFILE", &home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("REPOLINK_CONFIG_PATH", &self.test_config_path)
            .env("LC_ALL", "C")
            .env_remove("GIT_DIR")
            .env_remove("GIT_WORK_TREE")
            .env_remove("RUST_LOG")
            .env_remove("CLICOLOR_FORCE");
    }

    pub fn git_command(&self) -> Command {
        let mut cmd = Command::new("git");
        self.configure_env(&mut cmd);
        cmd.current_dir(&self.root);
        cmd
    }

    pub fn run_git(&self, args: &[&str]) {
        self.run_git_in(&self.root, args);
    }

    pub fn run_git_in(&self, dir: &Path, args: &[&str]) {
        let mut cmd = self.git_command();
        cmd.current_dir(dir).args(args);
        let output = cmd.output().unwrap();
        check_git_status(&output, &format!("git {}", args.join(" ")));
    }

    pub fn add_remote(&self, name: &str, url: &str) {
        self.run_git(&["remote", "add", name, url]);
    }

    pub fn commit(&self, message: &str) {
        self.run_git(&["commit", "-q", "--allow-empty", "-m", message]);
    }

    /// Create a linked worktree next to the repo; returns its path.
    pub fn add_worktree(&self, branch: &str) -> PathBuf {
        let path = self.home_path().join(branch);
        let path_str = path.to_string_lossy().into_owned();
        self.run_git(&["worktree", "add", "-q", "-b", branch, &path_str]);
        path
    }

    /// Create a nested directory (and optionally a file) inside the repo.
    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let path = self.root.join(relative);
        std::fs::create_dir_all(&path).unwrap();
        path
    }

    pub fn create_file(&self, relative: &str) -> PathBuf {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, "content\n").unwrap();
        path
    }

    /// A `repolink` invocation with the isolated environment, run from the repo root.
    pub fn repolink_command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin("repolink"));
        self.configure_env(&mut cmd);
        cmd.current_dir(&self.root);
        cmd
    }
}

pub fn check_git_status(output: &Output, cmd_desc: &str) {
    assert!(
        output.status.success(),
        "{cmd_desc} failed:\nstdout: {}\nstderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
