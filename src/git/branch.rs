use git2::{build::CheckoutBuilder, Branch, BranchType, Repository};

use crate::error::Error;

pub fn create_tracking_branch(
    repo: &Repository,
    branch_name: &str,
    remote_name: &str,
    remote_branch: &str,
) -> Result<(), Error> {
    let remote_ref = format!("{}/{}", remote_name, remote_branch);
    let remote_branch = repo.find_branch(&remote_ref, BranchType::Remote)?;

    let commit = remote_branch.get().peel_to_commit()?;

    let mut local_branch = repo.branch(branch_name, &commit, false)?;
    local_branch.set_upstream(Some(&remote_ref))?;

    checkout(repo, local_branch)
}

pub fn switch_to_local_branch(repo: &Repository, name: &str) -> Result<(), Error> {
    let branch = repo.find_branch(name, BranchType::Local)?;
    checkout(repo, branch)
}

fn checkout(repo: &Repository, branch: Branch) -> Result<(), Error> {
    let reference = branch.get();
    let commit = reference.peel_to_commit()?;

    let mut checkout_builder = CheckoutBuilder::new();
    checkout_builder.safe();

    repo.checkout_tree(commit.as_object(), Some(&mut checkout_builder))?;
    repo.set_head(reference.name().unwrap())?;

    Ok(())
}
