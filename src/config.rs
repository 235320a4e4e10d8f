use crate::error::Error;
use std::{env, path::PathBuf, str::FromStr};

const PROJECT_NAME_INPUT: &str = "project-name";
const TEAM_SLUG_INPUT: &str = "team-slug";
const COMMIT_SOURCE_INPUT: &str = "commit-source";

const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitSource {
    /// Commit data is taken from the pull request itself
    #[default]
    Context,
    /// Commit data is fetched from the GitHub REST API
    Api,
}

impl FromStr for CommitSource {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "context" => Ok(CommitSource::Context),
            "api" => Ok(CommitSource::Api),
            other => Err(Error::invalid_input(format!(
                "Unsupported {COMMIT_SOURCE_INPUT} '{other}', expected 'context' or 'api'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub project_name: String,
    pub team_slug: String,
    pub commit_source: CommitSource,
    pub runner: RunnerConfig,
}

/// Values the Actions runner exposes through the process environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub event_path: Option<PathBuf>,
    pub repository: Option<String>,
    pub api_url: String,
    pub token: Option<String>,
    pub output_path: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Config, Error> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let project_name = input(&lookup, PROJECT_NAME_INPUT);
        let team_slug = input(&lookup, TEAM_SLUG_INPUT);

        let (project_name, team_slug) = match (project_name, team_slug) {
            (Some(project_name), Some(team_slug)) => (project_name, team_slug),
            (project_name, team_slug) => {
                let missing = [
                    (PROJECT_NAME_INPUT, project_name.is_none()),
                    (TEAM_SLUG_INPUT, team_slug.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect::<Vec<_>>();

                return Err(Error::invalid_input(format!(
                    "Input required and not supplied: {}",
                    missing.join(", ")
                )));
            }
        };

        let commit_source = match input(&lookup, COMMIT_SOURCE_INPUT) {
            Some(value) => value.parse()?,
            None => CommitSource::default(),
        };

        let runner = RunnerConfig {
            event_path: non_empty(&lookup, "GITHUB_EVENT_PATH").map(PathBuf::from),
            repository: non_empty(&lookup, "GITHUB_REPOSITORY"),
            api_url: non_empty(&lookup, "GITHUB_API_URL")
                .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_owned()),
            token: non_empty(&lookup, "GITHUB_TOKEN"),
            output_path: non_empty(&lookup, "GITHUB_OUTPUT").map(PathBuf::from),
        };

        Ok(Config {
            project_name,
            team_slug,
            commit_source,
            runner,
        })
    }
}

/// Actions exposes `with:` inputs as `INPUT_<NAME>`, spaces turned into underscores
fn input_variable(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

fn input<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(&input_variable(name))
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|value| !value.is_empty())
}
