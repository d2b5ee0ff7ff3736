mod client;
mod pull_request;
mod repo_id;
mod user;

pub use client::Client;
pub use pull_request::{
    ApiError, PullRequestDetail, PullRequestResponse, PullRequestSummary, Ref, Repo,
};
pub use repo_id::RepoId;
pub use user::User;

use std::collections::HashMap;

use git2::Repository;

use crate::error::Error;

#[allow(async_fn_in_trait)]
pub trait PullRequestApi {
    async fn find_open_prs(&self, repo_id: &RepoId) -> Result<Vec<PullRequestSummary>, Error>;
    async fn pull_request(&self, repo_id: &RepoId, number: u32) -> Result<PullRequestDetail, Error>;
}

/// Derives the owner/repo pair from the configured remotes, preferring
/// `upstream` over `origin`.
pub fn guess_repo_id(repo: &Repository) -> Option<RepoId> {
    let remotes = repo.remotes().ok()?;

    let mut candidates = HashMap::new();
    for name in remotes.iter().flatten() {
        let Ok(remote) = repo.find_remote(name) else {
            continue;
        };

        if let Some(repo_id) = remote.url().and_then(|url| RepoId::from_remote_url(url).ok()) {
            candidates.insert(name.to_string(), repo_id);
        }
    }

    candidates
        .remove("upstream")
        .or_else(|| candidates.remove("origin"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_repo() -> (tempfile::TempDir, Repository) {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        (dir, repo)
    }

    #[test]
    fn prefers_upstream_over_origin() {
        let (_dir, repo) = empty_repo();
        repo.remote("origin", "https://github.com/fork/project.git")
            .unwrap();
        repo.remote("upstream", "git@github.com:canonical/project.git")
            .unwrap();

        let repo_id = guess_repo_id(&repo).unwrap();
        assert_eq!(repo_id.owner, "canonical");
        assert_eq!(repo_id.repo, "project");
    }

    #[test]
    fn falls_back_to_origin() {
        let (_dir, repo) = empty_repo();
        repo.remote("origin", "https://github.com/fork/project.git")
            .unwrap();

        let repo_id = guess_repo_id(&repo).unwrap();
        assert_eq!(repo_id.owner, "fork");
        assert_eq!(repo_id.repo, "project");
    }

    #[test]
    fn ignores_remotes_with_other_names() {
        let (_dir, repo) = empty_repo();
        repo.remote("fork", "https://github.com/somebody/project.git")
            .unwrap();

        assert!(guess_repo_id(&repo).is_none());
    }

    #[test]
    fn fails_without_remotes() {
        let (_dir, repo) = empty_repo();
        assert!(guess_repo_id(&repo).is_none());
    }
}
