use crate::error::Error;
use crate::git::{RebaseOutcome, Workspace};
use crate::github::{PullRequestApi, RepoId};

pub struct Prepare;

impl Prepare {
    /// Fetches pull request `number` into a local branch named
    /// `pull-request-<author>-<head branch>`, rebased onto the pull request's
    /// target branch. Returns the name of the branch the user is left on.
    ///
    /// The work tree guard runs before the API call, and the API call before
    /// any repository mutation. Later steps are not transactional: a failure
    /// mid-sequence leaves the repository as-is for manual recovery.
    pub async fn handle<A, W>(
        api: &A,
        workspace: &W,
        repo_id: &RepoId,
        number: u32,
        merge_to_master: bool,
        ignore_dirty: bool,
    ) -> Result<String, Error>
    where
        A: PullRequestApi,
        W: Workspace,
    {
        if !ignore_dirty && workspace.is_dirty()? {
            return Err(Error::DirtyWorkTree);
        }

        let pr = api.pull_request(repo_id, number).await?;

        let head_repo = pr.head.repo.as_ref().ok_or(Error::SourceRepoGone(number))?;
        let head_branch = &pr.head.reference;
        let base_branch = &pr.base.reference;

        println!("{} {}", head_repo.clone_url, head_branch);

        let remote_name = format!("pull-request-{}-{}", pr.user.login, head_branch);

        workspace.add_remote(&remote_name, head_repo.clone_url.as_str())?;
        workspace.fetch_remote(&remote_name)?;
        workspace.create_tracking_branch(&remote_name, &remote_name, head_branch)?;
        workspace.remove_remote(&remote_name)?;

        match workspace.rebase(base_branch)? {
            RebaseOutcome::Completed if merge_to_master => {
                workspace.switch_to_branch("master")?;
                workspace.merge_ff_only(&remote_name)?;
                workspace.delete_branch(&remote_name)?;

                Ok("master".to_string())
            }
            RebaseOutcome::Completed => Ok(remote_name),
            RebaseOutcome::Conflicted => {
                println!(
                    "Rebase failed. You can either resolve the conflicts and run \
                     `git rebase --continue` or ask the author to do the rebase."
                );

                Ok(remote_name)
            }
        }
    }
}
