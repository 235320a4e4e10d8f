use super::response::CommitResponse;
use crate::{get, http::Error};
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct GithubClient {
    api_url: String,
    token: String,
}

impl GithubClient {
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        let api_url = api_url.into();

        GithubClient {
            api_url: api_url.trim_end_matches('/').to_owned(),
            token: token.into(),
        }
    }

    pub async fn get_commit(&self, owner: &str, repo: &str, sha: &str) -> Result<CommitResponse> {
        let uri = format!("{}/repos/{}/{}/commits/{}", self.api_url, owner, repo, sha);

        log::debug!("fetching commit {} of {}/{}", sha, owner, repo);
        let response = get!(&uri, &self.token)
            .with_context(|| format!("Failed to fetch commit {}", sha))?;

        let commit = serde_json::from_str::<CommitResponse>(&response)
            .map_err(|cause| Error::ParseResponseError { cause })?;

        Ok(commit)
    }
}
