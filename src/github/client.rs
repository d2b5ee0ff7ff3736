use reqwest::header::USER_AGENT;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::Error;
use crate::token::AccessToken;

use super::{PullRequestApi, PullRequestDetail, PullRequestResponse, PullRequestSummary, RepoId};

const API_URL: &str = "https://api.github.com";

pub struct Client {
    inner: reqwest::Client,
    base_url: Url,
    token: AccessToken,
}

impl Client {
    pub fn new(token: AccessToken) -> Client {
        Client {
            inner: reqwest::Client::new(),
            base_url: Url::parse(API_URL).unwrap(),
            token,
        }
    }

    async fn get<T>(&self, path: &[&str]) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let mut url = self.base_url.clone();
        url.path_segments_mut().unwrap().extend(path);

        let mut request = self
            .inner
            .get(url)
            .header(USER_AGENT, "github-fetch-pullrequest");

        if !self.token.is_empty() {
            request = request.query(&[("access_token", self.token.as_str())]);
        }

        let response = request.send().await.map_err(Error::Network)?;

        response.json().await.map_err(|err| {
            if err.is_decode() {
                Error::Parse(err)
            } else {
                Error::Network(err)
            }
        })
    }
}

impl PullRequestApi for Client {
    async fn find_open_prs(&self, repo_id: &RepoId) -> Result<Vec<PullRequestSummary>, Error> {
        self.get(&["repos", &repo_id.owner, &repo_id.repo, "pulls"])
            .await
    }

    async fn pull_request(&self, repo_id: &RepoId, number: u32) -> Result<PullRequestDetail, Error> {
        let response: PullRequestResponse = self
            .get(&[
                "repos",
                &repo_id.owner,
                &repo_id.repo,
                "pulls",
                &number.to_string(),
            ])
            .await?;

        match response {
            PullRequestResponse::Found(pr) => Ok(*pr),
            PullRequestResponse::Error(err) => Err(Error::NoPrWithNumber(number, err.message)),
        }
    }
}
