use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub const TOKEN_FILE_NAME: &str = ".github-fetch-pullrequest-token";

/// An opaque GitHub access token. Empty means unauthenticated.
pub struct AccessToken(String);

impl AccessToken {
    pub fn empty() -> AccessToken {
        AccessToken(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// The token value must never end up in console output or logs.
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("AccessToken(empty)")
        } else {
            f.write_str("AccessToken(redacted)")
        }
    }
}

pub fn default_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(TOKEN_FILE_NAME))
}

pub fn load_default() -> AccessToken {
    match default_path() {
        Some(path) => load(&path),
        None => AccessToken::empty(),
    }
}

/// Reads the first line of the token file. Any failure yields an empty token.
pub fn load(path: &Path) -> AccessToken {
    let token = fs::read_to_string(path)
        .ok()
        .and_then(|contents| contents.lines().next().map(|line| line.trim().to_string()))
        .unwrap_or_default();

    AccessToken(token)
}
