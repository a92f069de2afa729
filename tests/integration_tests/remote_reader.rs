//! `GitRemoteReader` and `Resolver` against real repositories.
//!
//! These run in-process and are NOT isolated: `GitRemoteReader` inherits the
//! developer's `HOME` and `GIT_CONFIG_*`, unlike the CLI tests that go through
//! `TestRepo::configure_env`. They only read repository-local remotes, which a
//! global gitconfig doesn't normally change.

use std::path::Path;

use repolink::config::UserConfig;
use repolink::git::{GitMarker, GitRemoteReader, RemoteReader, ResolveError, locate_repo_root};
use repolink::resolve::Resolver;
use rstest::rstest;

use crate::common::{TestRepo, repo, repo_with_origin};

#[rstest]
fn reads_configured_remote(repo_with_origin: TestRepo) {
    let address = GitRemoteReader
        .remote_address(repo_with_origin.root_path(), "origin")
        .unwrap();
    assert_eq!(address.as_deref(), Some("git@github.com:owner/repo.git"));
}

#[rstest]
fn missing_remote_is_none(repo: TestRepo) {
    let address = GitRemoteReader
        .remote_address(repo.root_path(), "origin")
        .unwrap();
    assert_eq!(address, None);
}

#[rstest]
fn non_repository_is_query_failure(repo: TestRepo) {
    let outside = repo.outside_path();
    // git exits non-zero with "not a git repository", which isn't a missing remote
    let result = GitRemoteReader.remote_address(&outside, "origin");
    assert!(result.is_err(), "{result:?}");
}

#[rstest]
fn locator_finds_repo_root_on_disk(repo: TestRepo) {
    let nested = repo.create_dir("a/b/c");
    assert_eq!(
        locate_repo_root(&nested, &GitMarker::default()).as_deref(),
        Some(repo.root_path())
    );
    assert_eq!(
        locate_repo_root(&repo.outside_path(), &GitMarker::default()),
        None
    );
}

#[rstest]
fn resolver_end_to_end(repo_with_origin: TestRepo) {
    let resolver = Resolver::from_config(&UserConfig::default());
    let file = repo_with_origin.create_file("src/lib.rs");

    let url = resolver.resolve(&file).unwrap();
    assert_eq!(url.as_str(), "https://github.com/owner/repo");
}

#[rstest]
fn resolver_reports_not_a_repo(repo: TestRepo) {
    let resolver = Resolver::from_config(&UserConfig::default());
    let outside = repo.outside_path();

    let err = resolver.resolve(&outside).unwrap_err();
    assert_eq!(err, ResolveError::NotARepo { path: outside });
}

#[rstest]
fn resolver_reports_missing_remote(repo: TestRepo) {
    let resolver = Resolver::from_config(&UserConfig::default()).remote("upstream");

    let err = resolver.resolve(repo.root_path()).unwrap_err();
    assert_eq!(
        err,
        ResolveError::NoRemote {
            root: repo.root_path().to_path_buf(),
            remote: "upstream".into(),
        }
    );
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn empty_path_is_not_a_repo() {
    let resolver = Resolver::from_config(&UserConfig::default());
    let err = resolver.resolve(Path::new("")).unwrap_err();
    assert_eq!(err.reason(), "not-a-repo");
}
