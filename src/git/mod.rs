mod branch;
mod fetch;

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, ExitStatus};

use git2::{BranchType, Error as GitError, Repository, RepositoryOpenFlags, StatusOptions};

use crate::error::Error;

pub fn get_repo(path: &Path) -> Result<Repository, GitError> {
    Repository::open_ext(path, RepositoryOpenFlags::empty(), dirs::home_dir())
}

#[derive(Debug, PartialEq)]
pub enum RebaseOutcome {
    Completed,
    Conflicted,
}

/// The mutating operations the rebase preparation needs from a local
/// repository. Implemented by `GitWorkspace`; tests substitute a recording
/// fake.
pub trait Workspace {
    fn is_dirty(&self) -> Result<bool, Error>;

    fn add_remote(&self, name: &str, url: &str) -> Result<(), Error>;
    fn fetch_remote(&self, name: &str) -> Result<(), Error>;
    fn remove_remote(&self, name: &str) -> Result<(), Error>;

    fn create_tracking_branch(
        &self,
        branch_name: &str,
        remote_name: &str,
        remote_branch: &str,
    ) -> Result<(), Error>;
    fn switch_to_branch(&self, name: &str) -> Result<(), Error>;
    fn delete_branch(&self, name: &str) -> Result<(), Error>;

    fn rebase(&self, base_branch: &str) -> Result<RebaseOutcome, Error>;
    fn merge_ff_only(&self, branch: &str) -> Result<(), Error>;
}

pub struct GitWorkspace {
    repo: Repository,
}

impl GitWorkspace {
    pub fn new(repo: Repository) -> GitWorkspace {
        GitWorkspace { repo }
    }

    fn exec_git<A, I>(&self, args: I) -> Result<ExitStatus, Error>
    where
        A: AsRef<OsStr>,
        I: IntoIterator<Item = A>,
    {
        let mut git = Command::new("git");
        git.arg(format!("--git-dir={}", self.repo.path().to_string_lossy()));

        if let Some(workdir) = self.repo.workdir() {
            git.arg(format!("--work-tree={}", workdir.to_string_lossy()));
            git.current_dir(workdir);
        }

        git.args(args)
            .spawn()
            .map_err(Error::FailedToExecuteGit)?
            .wait()
            .map_err(Error::FailedToExecuteGit)
    }
}

impl Workspace for GitWorkspace {
    fn is_dirty(&self) -> Result<bool, Error> {
        let mut options = StatusOptions::new();
        options.include_untracked(true);

        let statuses = self.repo.statuses(Some(&mut options))?;
        Ok(!statuses.is_empty())
    }

    fn add_remote(&self, name: &str, url: &str) -> Result<(), Error> {
        self.repo.remote(name, url)?;
        Ok(())
    }

    fn fetch_remote(&self, name: &str) -> Result<(), Error> {
        fetch::fetch_remote(&self.repo, name)
    }

    fn remove_remote(&self, name: &str) -> Result<(), Error> {
        self.repo.remote_delete(name)?;
        Ok(())
    }

    fn create_tracking_branch(
        &self,
        branch_name: &str,
        remote_name: &str,
        remote_branch: &str,
    ) -> Result<(), Error> {
        branch::create_tracking_branch(&self.repo, branch_name, remote_name, remote_branch)
    }

    fn switch_to_branch(&self, name: &str) -> Result<(), Error> {
        branch::switch_to_local_branch(&self.repo, name)
    }

    fn delete_branch(&self, name: &str) -> Result<(), Error> {
        let mut branch = self.repo.find_branch(name, BranchType::Local)?;
        Ok(branch.delete()?)
    }

    fn rebase(&self, base_branch: &str) -> Result<RebaseOutcome, Error> {
        let status = self.exec_git(["rebase", base_branch])?;

        if status.success() {
            Ok(RebaseOutcome::Completed)
        } else {
            Ok(RebaseOutcome::Conflicted)
        }
    }

    fn merge_ff_only(&self, branch: &str) -> Result<(), Error> {
        let status = self.exec_git(["merge", "--ff-only", branch])?;

        if status.success() {
            Ok(())
        } else {
            Err(Error::NoFastForward(branch.to_string()))
        }
    }
}
