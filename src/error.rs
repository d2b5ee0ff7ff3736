use git2::Error as GitError;
use reqwest::Error as HttpError;
use std::error::Error as StdError;
use std::io::Error as IoError;

#[derive(Debug)]
pub enum Error {
    NotInWorkTree,
    NoGitHubRemote,

    DirtyWorkTree,

    NoPrWithNumber(u32, String),
    SourceRepoGone(u32),

    Network(HttpError),
    Parse(HttpError),
    Git(GitError),

    FailedToExecuteGit(IoError),
    NoFastForward(String),
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::DirtyWorkTree => 1,
            Error::NoPrWithNumber(..) => 2,
            _ => 1,
        }
    }
}

impl From<GitError> for Error {
    fn from(err: GitError) -> Error {
        Error::Git(err)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        use Error::*;

        match self {
            Network(err) | Parse(err) => Some(err),
            Git(err) => Some(err),
            FailedToExecuteGit(err) => Some(err),
            _ => None,
        }
    }
}

use std::fmt;
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;

        match self {
            NotInWorkTree => write!(f, "not in a git repository"),
            NoGitHubRemote => write!(f, "can't find an upstream or origin remote to derive owner/repo from"),

            DirtyWorkTree => write!(
                f,
                "work tree is dirty (uncommitted changes or untracked files), use --ignore-dirty to fetch anyway"
            ),

            NoPrWithNumber(number, message) => write!(f, "can't find pr #{}: {}", number, message),
            SourceRepoGone(number) => write!(f, "source repository for pr #{} is gone", number),

            Network(err) => write!(f, "{}", err),
            Parse(err) => write!(f, "can't parse response: {}", err),
            Git(err) => write!(f, "{}", err),

            FailedToExecuteGit(err) => write!(f, "failed to execute git: {}", err),
            NoFastForward(branch) => write!(f, "can't fast-forward to {}", branch),
        }
    }
}
