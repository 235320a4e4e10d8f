use crate::deployment::DeploymentResult;
use anyhow::{bail, Context, Result};
use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::Path,
};

const SHOULD_NOTIFY: &str = "should-notify";
const DEPLOYMENT_INFO: &str = "deployment-info";
const MULTILINE_DELIMITER: &str = "ghadelimiter_vercel_preview_url";

/// Step outputs of a successful run, in publishing order
pub fn outputs(result: &DeploymentResult) -> Result<Vec<(&'static str, String)>> {
    let deployment_info = serde_json::to_string(&result.deployment_info)
        .context("Cannot serialize deployment info")?;

    Ok(vec![
        (SHOULD_NOTIFY, result.should_notify.to_string()),
        (DEPLOYMENT_INFO, deployment_info),
    ])
}

/// Renders outputs in the `GITHUB_OUTPUT` file format
pub fn format_outputs(outputs: &[(&str, String)]) -> Result<String> {
    let mut content = String::new();

    for (name, value) in outputs {
        if !value.contains('\n') {
            content.push_str(&format!("{name}={value}\n"));
            continue;
        }

        if value.contains(MULTILINE_DELIMITER) {
            bail!("Output {name} contains the reserved delimiter {MULTILINE_DELIMITER}");
        }

        content.push_str(&format!(
            "{name}<<{MULTILINE_DELIMITER}\n{value}\n{MULTILINE_DELIMITER}\n"
        ));
    }

    Ok(content)
}

/// Appends every output in a single write so a failed run leaves none behind
pub fn publish(output_path: Option<&Path>, result: &DeploymentResult) -> Result<()> {
    let content = format_outputs(&outputs(result)?)?;

    match output_path {
        Some(path) => {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Cannot open output file {}", path.display()))?;

            file.write_all(content.as_bytes())
                .with_context(|| format!("Cannot write output file {}", path.display()))?;
        }
        None => {
            log::debug!("GITHUB_OUTPUT is not set, writing outputs to stdout");
            io::stdout()
                .write_all(content.as_bytes())
                .context("Cannot write outputs to stdout")?;
        }
    }

    Ok(())
}

/// Marks the step as failed through the runner's workflow command channel
pub fn fail(message: &str) {
    log::error!("Action failed: {}", message);
    println!("::error::Action failed: {}", escape_data(message));
}

fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deployment::DeploymentInfo;
    use serde_json::json;
    use std::fs;
    use tempdir::TempDir;

    fn result() -> DeploymentResult {
        DeploymentResult {
            should_notify: true,
            deployment_info: DeploymentInfo {
                url: "https://site-git-fix-bug-acme.vercel.app".to_string(),
                git_ref: "fix-bug".to_string(),
                state: "constructed".to_string(),
                commit_sha: "abcdef1".to_string(),
                commit_message: "Fix the bug".to_string(),
                commit_author: Some(json!({ "login": "alice" })),
            },
        }
    }

    #[test]
    fn should_build_outputs() -> Result<()> {
        let outputs = outputs(&result())?;

        assert_eq!(outputs[0], ("should-notify", "true".to_string()));
        assert_eq!(outputs[1].0, "deployment-info");
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&outputs[1].1)?,
            json!({
                "url": "https://site-git-fix-bug-acme.vercel.app",
                "ref": "fix-bug",
                "state": "constructed",
                "commitSha": "abcdef1",
                "commitMessage": "Fix the bug",
                "commitAuthor": { "login": "alice" }
            })
        );

        Ok(())
    }

    #[test]
    fn should_format_single_line_outputs() -> Result<()> {
        let content = format_outputs(&[("should-notify", "true".to_string())])?;

        assert_eq!(content, "should-notify=true\n");

        Ok(())
    }

    #[test]
    fn should_format_multiline_outputs_with_delimiter() -> Result<()> {
        let content = format_outputs(&[("notes", "first\nsecond".to_string())])?;

        assert_eq!(
            content,
            "notes<<ghadelimiter_vercel_preview_url\nfirst\nsecond\nghadelimiter_vercel_preview_url\n"
        );

        Ok(())
    }

    #[test]
    fn should_reject_values_containing_the_delimiter() {
        let value = "a\nghadelimiter_vercel_preview_url\nb".to_string();

        assert!(format_outputs(&[("notes", value)]).is_err());
    }

    #[test]
    fn should_append_outputs_to_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("output")?;
        let path = dir.path().join("github_output");
        fs::write(&path, "previous=value\n")?;

        publish(Some(path.as_path()), &result())?;

        let content = fs::read_to_string(&path)?;
        let lines = content.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "previous=value");
        assert_eq!(lines[1], "should-notify=true");
        assert!(lines[2].starts_with(r#"deployment-info={"url":"https://site-git-fix-bug-acme.vercel.app""#));

        dir.close()?;
        Ok(())
    }

    #[test]
    fn should_escape_failure_messages() {
        assert_eq!(escape_data("50% done\r\nnext"), "50%25 done%0D%0Anext");
    }
}
