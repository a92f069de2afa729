//! Resolve the hosting-provider web URL of the git repository containing a path.
//!
//! ```no_run
//! use std::path::Path;
//! use repolink::config::UserConfig;
//! use repolink::resolve::Resolver;
//!
//! let resolver = Resolver::from_config(&UserConfig::load()?);
//! let url = resolver.resolve(Path::new("/home/me/notes/today.md"))?;
//! println!("{url}");
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! The two building blocks are usable on their own:
//! [`git::locate_repo_root`] and [`git::normalize_remote_url`].

pub mod browser;
pub mod config;
pub mod git;
pub mod path;
pub mod resolve;
pub mod shell_exec;
pub mod styling;

pub use git::{ResolveError, WebUrl, normalize_remote_url};
pub use resolve::{Resolver, resolve_repository_web_url};
