use crate::error::Error;
use crate::github::{PullRequestApi, PullRequestSummary, RepoId};

pub struct Prs;

impl Prs {
    pub async fn handle<A>(api: &A, repo_id: &RepoId) -> Result<(), Error>
    where
        A: PullRequestApi,
    {
        let prs = api.find_open_prs(repo_id).await?;

        for pr in &prs {
            println!("{}", line_for_pr(pr));
        }

        Ok(())
    }
}

fn line_for_pr(pr: &PullRequestSummary) -> String {
    let assignee = pr
        .assignee
        .as_ref()
        .map(|user| user.login.as_str())
        .unwrap_or_default();

    format!("{:>4} ({:>12}) {}", pr.number, assignee, pr.title)
}
