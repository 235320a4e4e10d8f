use super::{CommitInfo, CommitInfoProvider};
use crate::{error::Error, github::PullRequest};

/// Stands the pull request's title and author in for the head commit's message and author
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextProvider;

impl CommitInfoProvider for ContextProvider {
    async fn commit_info(&self, pull_request: &PullRequest) -> Result<CommitInfo, Error> {
        Ok(CommitInfo {
            sha: pull_request.head.sha.to_owned(),
            message: pull_request.title.to_owned(),
            author: pull_request.user.to_owned(),
        })
    }
}
