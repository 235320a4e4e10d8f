mod config;
mod deployment;
mod error;
mod github;
mod http;
mod logger;
mod output;
mod provider;

use anyhow::{Context, Result};
use config::{CommitSource, Config};
use error::Error;
use github::{GithubClient, GithubContext};
use provider::{CommitInfoSource, ContextProvider, RemoteProvider};

#[tokio::main]
async fn main() {
    if let Err(err) = logger::init() {
        eprintln!("Cannot initialise logger: {:#}", err);
    }

    if let Err(err) = run().await {
        output::fail(&format!("{:#}", err));
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = Config::load()?;

    log::info!(
        "🚀 Constructing deployment URL for project: {}, team: {}",
        config.project_name,
        config.team_slug
    );

    let context = GithubContext::load(
        config.runner.event_path.as_deref(),
        config.runner.repository.as_deref(),
    )
    .await?;

    let provider = commit_info_source(&config, &context)?;

    let result = deployment::assemble(
        &context.payload,
        &config.project_name,
        &config.team_slug,
        &provider,
    )
    .await?;

    output::publish(config.runner.output_path.as_deref(), &result)
        .context("Cannot publish outputs")?;

    log::info!("✅ Deployment URL: {}", result.deployment_info.url);
    log::info!("Action completed successfully!");

    Ok(())
}

fn commit_info_source(config: &Config, context: &GithubContext) -> Result<CommitInfoSource, Error> {
    match config.commit_source {
        CommitSource::Context => {
            log::debug!("Using pull request context for commit info");
            Ok(CommitInfoSource::Context(ContextProvider))
        }
        CommitSource::Api => {
            log::debug!("Using GitHub API for commit info");

            let token = config.runner.token.as_deref().ok_or_else(|| {
                Error::invalid_input("GITHUB_TOKEN is required when commit-source is api")
            })?;

            let repo = context.repo.clone().ok_or_else(|| {
                Error::invalid_input("GITHUB_REPOSITORY is required when commit-source is api")
            })?;

            let client = GithubClient::new(&config.runner.api_url, token);

            Ok(CommitInfoSource::Remote(RemoteProvider::new(client, repo)))
        }
    }
}
