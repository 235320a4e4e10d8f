use super::sanitize_branch_name;

/// Preview URL Vercel assigns to the latest deployment of a branch.
/// Project and team are used verbatim.
pub fn build_deployment_url(project_name: &str, branch_name: &str, team_slug: &str) -> String {
    let branch = sanitize_branch_name(Some(branch_name));

    format!("https://{project_name}-git-{branch}-{team_slug}.vercel.app")
}
