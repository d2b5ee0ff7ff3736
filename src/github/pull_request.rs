use serde::Deserialize;
use url::Url;

use super::user::User;

#[derive(Clone, Debug, Deserialize)]
pub struct PullRequestSummary {
    pub number: u32,
    pub title: String,
    pub assignee: Option<User>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PullRequestDetail {
    pub number: u32,
    pub user: User,

    pub head: Ref,
    pub base: Ref,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Ref {
    #[serde(rename = "ref")]
    pub reference: String,

    // `head.repo` is null when the source fork has been deleted
    pub repo: Option<Repo>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Repo {
    pub clone_url: Url,
}

/// A pull request lookup either resolves, or GitHub answers with a body
/// carrying only a `message` field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PullRequestResponse {
    Found(Box<PullRequestDetail>),
    Error(ApiError),
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub message: String,
}
