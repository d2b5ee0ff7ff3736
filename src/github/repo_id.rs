use url::Url;

#[derive(Clone, Debug, PartialEq)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

#[derive(Debug, PartialEq)]
pub struct InvalidRemoteUrl;

impl RepoId {
    /// Parses the owner/repo pair out of a remote URL: the last two path
    /// segments, with an optional trailing `.git`.
    pub fn from_remote_url(remote_url: &str) -> Result<RepoId, InvalidRemoteUrl> {
        Self::from_url(remote_url)
            .or_else(|| Self::from_scp(remote_url))
            .ok_or(InvalidRemoteUrl)
    }

    fn from_url(url: &str) -> Option<RepoId> {
        let url = Url::parse(url).ok()?;

        let mut components = url.path_segments()?.rev().filter(|c| !c.is_empty());
        let repo = components.next()?;
        let owner = components.next()?;

        Self::new_checked(owner, repo)
    }

    fn from_scp(url: &str) -> Option<RepoId> {
        let (_, path) = url.split_once(':')?;

        let mut components = path.rsplit('/').filter(|c| !c.is_empty());
        let repo = components.next()?;
        let owner = components.next()?;

        Self::new_checked(owner, repo)
    }

    fn new_checked(owner: &str, repo: &str) -> Option<RepoId> {
        let repo = repo.trim_end_matches(".git");

        if owner.is_empty() || repo.is_empty() {
            return None;
        }

        Some(RepoId {
            owner: String::from(owner),
            repo: String::from(repo),
        })
    }
}
