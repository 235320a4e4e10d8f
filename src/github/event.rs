use serde::Deserialize;
use serde_json::Value;

/// Webhook payload of the event that triggered the workflow run
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub pull_request: Option<PullRequest>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PullRequest {
    pub head: Head,
    #[serde(default)]
    pub title: String,
    /// Kept as received, it is passed through to consumers untouched
    #[serde(default)]
    pub user: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Head {
    #[serde(rename = "ref", default)]
    pub git_ref: String,
    #[serde(default)]
    pub sha: String,
}
