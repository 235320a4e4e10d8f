use serde::Deserialize;
use serde_json::Value;

/// Subset of `GET /repos/{owner}/{repo}/commits/{ref}`
#[derive(Debug, Deserialize)]
pub struct CommitResponse {
    pub sha: String,
    pub commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
pub struct CommitDetail {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub author: Option<Value>,
}
