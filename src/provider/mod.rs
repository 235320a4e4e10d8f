mod context_provider;
mod remote_provider;

pub use context_provider::ContextProvider;
pub use remote_provider::RemoteProvider;

use crate::{error::Error, github::PullRequest};
use serde_json::Value;

/// Commit data the deployment record is built from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommitInfo {
    pub sha: String,
    pub message: String,
    pub author: Option<Value>,
}

pub trait CommitInfoProvider {
    async fn commit_info(&self, pull_request: &PullRequest) -> Result<CommitInfo, Error>;
}

/// Provider picked from the `commit-source` input
pub enum CommitInfoSource {
    Context(ContextProvider),
    Remote(RemoteProvider),
}

impl CommitInfoProvider for CommitInfoSource {
    async fn commit_info(&self, pull_request: &PullRequest) -> Result<CommitInfo, Error> {
        match self {
            CommitInfoSource::Context(provider) => provider.commit_info(pull_request).await,
            CommitInfoSource::Remote(provider) => provider.commit_info(pull_request).await,
        }
    }
}
