mod branch;
mod url;

pub use branch::sanitize_branch_name;
pub use url::build_deployment_url;

use crate::{
    error::Error,
    github::EventPayload,
    provider::{CommitInfo, CommitInfoProvider},
};
use serde::Serialize;
use serde_json::Value;

const CONSTRUCTED_STATE: &str = "constructed";
const SHORT_SHA_LEN: usize = 7;

const MISSING_PULL_REQUEST: &str =
    "No PR found in context. This action must be run in a pull_request event.";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentInfo {
    pub url: String,
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub state: String,
    pub commit_sha: String,
    pub commit_message: String,
    pub commit_author: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentResult {
    pub should_notify: bool,
    pub deployment_info: DeploymentInfo,
}

/// Builds the deployment record for the pull request that triggered the run.
///
/// Nothing is checked against Vercel: the URL follows the branch naming
/// convention and `state` is always `constructed`.
/// `commitMessage` is the first line of the message, without a trailing `\r`.
pub async fn assemble<P>(
    payload: &EventPayload,
    project_name: &str,
    team_slug: &str,
    provider: &P,
) -> Result<DeploymentResult, Error>
where
    P: CommitInfoProvider,
{
    let pull_request = payload
        .pull_request
        .as_ref()
        .ok_or_else(|| Error::missing_context(MISSING_PULL_REQUEST))?;

    let branch_name = &pull_request.head.git_ref;
    let url = build_deployment_url(project_name, branch_name, team_slug);

    let CommitInfo {
        sha,
        message,
        author,
    } = provider.commit_info(pull_request).await?;

    Ok(DeploymentResult {
        should_notify: true,
        deployment_info: DeploymentInfo {
            url,
            git_ref: branch_name.to_owned(),
            state: CONSTRUCTED_STATE.to_owned(),
            commit_sha: sha.chars().take(SHORT_SHA_LEN).collect(),
            commit_message: message.lines().next().unwrap_or_default().to_owned(),
            commit_author: author,
        },
    })
}
