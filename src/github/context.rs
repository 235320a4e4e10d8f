use super::event::EventPayload;
use crate::error::Error;
use std::{io::ErrorKind, path::Path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repo {
    pub owner: String,
    pub repo: String,
}

impl Repo {
    /// Parses the `owner/repo` form used by `GITHUB_REPOSITORY`
    pub fn parse(value: &str) -> Option<Repo> {
        let (owner, repo) = value.split_once('/')?;

        if owner.is_empty() || repo.is_empty() {
            return None;
        }

        Some(Repo {
            owner: owner.to_owned(),
            repo: repo.to_owned(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GithubContext {
    pub payload: EventPayload,
    pub repo: Option<Repo>,
}

impl GithubContext {
    /// A missing event file leaves the payload empty, as with a manual run
    pub async fn load(event_path: Option<&Path>, repository: Option<&str>) -> Result<Self, Error> {
        let payload = match event_path {
            Some(path) => read_payload(path).await?,
            None => {
                log::debug!("GITHUB_EVENT_PATH is not set, using an empty payload");
                EventPayload::default()
            }
        };

        Ok(GithubContext {
            payload,
            repo: repository.and_then(Repo::parse),
        })
    }
}

async fn read_payload(path: &Path) -> Result<EventPayload, Error> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::debug!("event file {} does not exist", path.display());
            return Ok(EventPayload::default());
        }
        Err(err) => {
            return Err(Error::missing_context(format!(
                "Cannot read event payload at {}: {}",
                path.display(),
                err
            )))
        }
    };

    serde_json::from_str::<EventPayload>(&content).map_err(|err| {
        Error::missing_context(format!(
            "Cannot parse event payload at {}: {}",
            path.display(),
            err
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempdir::TempDir;

    #[test]
    fn should_parse_repository() {
        assert_eq!(
            Repo::parse("octo/site"),
            Some(Repo {
                owner: "octo".to_string(),
                repo: "site".to_string()
            })
        );
        assert_eq!(Repo::parse("octo"), None);
        assert_eq!(Repo::parse("/site"), None);
    }

    #[tokio::test]
    async fn should_load_payload_from_event_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("context")?;
        let path = dir.path().join("event.json");
        fs::write(
            &path,
            r#"{"pull_request":{"head":{"ref":"fix-bug","sha":"abc"},"title":"Fix","user":null}}"#,
        )?;

        let context = GithubContext::load(Some(path.as_path()), Some("octo/site")).await?;

        let pr = context.payload.pull_request.expect("pull request should be present");
        assert_eq!(pr.head.git_ref, "fix-bug");
        assert_eq!(context.repo.map(|repo| repo.repo), Some("site".to_string()));

        dir.close()?;
        Ok(())
    }

    #[tokio::test]
    async fn should_use_empty_payload_when_event_file_is_missing(
    ) -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("context")?;

        let context = GithubContext::load(Some(dir.path().join("missing.json").as_path()), None).await?;

        assert_eq!(context, GithubContext::default());

        dir.close()?;
        Ok(())
    }

    #[tokio::test]
    async fn should_fail_on_malformed_event_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("context")?;
        let path = dir.path().join("event.json");
        fs::write(&path, "not json")?;

        let result = GithubContext::load(Some(path.as_path()), None).await;

        assert!(matches!(result, Err(Error::MissingContext(_))));

        dir.close()?;
        Ok(())
    }
}
