use once_cell::sync::Lazy;
use regex::Regex;

const HEADS_PREFIX: &str = "refs/heads/";

static INVALID_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9-]").expect("valid regex"));
static HYPHEN_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").expect("valid regex"));
static EDGE_HYPHENS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-|-$").expect("valid regex"));

/// Normalizes a branch name into the token Vercel embeds in preview hostnames.
///
/// The result only holds `[a-z0-9-]`, has no hyphen runs and no leading or
/// trailing hyphen. Names without any usable character become empty.
pub fn sanitize_branch_name(branch_name: Option<&str>) -> String {
    let branch_name = match branch_name {
        Some(name) if !name.is_empty() => name,
        _ => return String::new(),
    };

    let branch = branch_name
        .strip_prefix(HEADS_PREFIX)
        .unwrap_or(branch_name)
        .to_lowercase();

    let branch = INVALID_CHARS.replace_all(&branch, "-");
    let branch = HYPHEN_RUNS.replace_all(&branch, "-");

    EDGE_HYPHENS.replace_all(&branch, "").into_owned()
}
