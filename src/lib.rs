mod commands {
    pub mod prepare;
    pub mod prs;
}

pub use commands::prepare::Prepare;
pub use commands::prs::Prs;

mod cli;
mod error;

pub mod git;
pub mod github;
pub mod token;

pub use error::Error;

use std::path::Path;

use git::GitWorkspace;
use github::Client;

pub async fn handle() -> Result<(), Error> {
    let matches = cli::cli().get_matches();

    let path = std::env::var("REPO_PATH").unwrap_or_else(|_| ".".to_string());
    let repo = git::get_repo(Path::new(&path)).map_err(|_| Error::NotInWorkTree)?;

    let repo_id = github::guess_repo_id(&repo).ok_or(Error::NoGitHubRemote)?;
    let client = Client::new(token::load_default());

    match matches.get_one::<u32>("pr-number").copied() {
        None => Prs::handle(&client, &repo_id).await,
        Some(number) => {
            let merge_to_master = matches.get_flag("master");
            let ignore_dirty = matches.get_flag("ignore-dirty");

            let workspace = GitWorkspace::new(repo);
            let branch = Prepare::handle(
                &client,
                &workspace,
                &repo_id,
                number,
                merge_to_master,
                ignore_dirty,
            )
            .await?;

            println!("\nIn branch '{}'.", branch);
            Ok(())
        }
    }
}
