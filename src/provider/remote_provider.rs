use super::{CommitInfo, CommitInfoProvider};
use crate::{
    error::Error,
    github::{GithubClient, PullRequest, Repo},
};

/// Looks the head commit up through the GitHub REST API
#[derive(Debug, Clone)]
pub struct RemoteProvider {
    client: GithubClient,
    repo: Repo,
}

impl RemoteProvider {
    pub fn new(client: GithubClient, repo: Repo) -> Self {
        RemoteProvider { client, repo }
    }
}

impl CommitInfoProvider for RemoteProvider {
    async fn commit_info(&self, pull_request: &PullRequest) -> Result<CommitInfo, Error> {
        let commit = self
            .client
            .get_commit(&self.repo.owner, &self.repo.repo, &pull_request.head.sha)
            .await
            .map_err(|err| Error::provider_failure(format!("{:#}", err)))?;

        Ok(CommitInfo {
            sha: commit.sha,
            message: commit.commit.message,
            author: commit.commit.author,
        })
    }
}
