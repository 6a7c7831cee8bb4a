//! Repository locator interpretation and manifest URL candidates.
//!
//! Turns a GitHub repository locator plus a version string into the ordered
//! list of raw-content URLs where the manifest may live. Release tags are
//! named inconsistently across repositories (`1.2.3` vs `v1.2.3`), so two
//! candidates are produced in a fixed order: bare version first, `v`-prefixed
//! second. Callers must not reorder them.

use crate::error::ResolveError;

/// Host accepted in repository locators.
const SUPPORTED_HOST: &str = "github.com";

/// Host serving raw file contents for a tag.
const RAW_HOST: &str = "raw.githubusercontent.com";

/// Manifest filename looked up under each tag.
pub const MANIFEST_FILENAME: &str = "Cargo.toml";

/// Splits a locator into its owner and repository segments.
///
/// Accepts `github.com/owner/repo` with or without a scheme and with or
/// without a trailing slash or `.git` suffix. Deeper path segments are
/// ignored.
fn split_owner_repo(repo_locator: &str) -> Result<(String, String), ResolveError> {
    let with_scheme = if repo_locator.contains("://") {
        repo_locator.to_string()
    } else {
        format!("https://{}", repo_locator)
    };

    let parsed = url::Url::parse(&with_scheme)
        .map_err(|_| ResolveError::MalformedLocator(repo_locator.to_string()))?;

    let host = parsed
        .host_str()
        .ok_or_else(|| ResolveError::MalformedLocator(repo_locator.to_string()))?;
    if !host.eq_ignore_ascii_case(SUPPORTED_HOST) {
        return Err(ResolveError::UnsupportedHost(host.to_string()));
    }

    let mut segments = parsed.path().split('/').filter(|s| !s.is_empty());
    let owner = segments
        .next()
        .ok_or_else(|| ResolveError::MalformedLocator(repo_locator.to_string()))?;
    let repo = segments
        .next()
        .ok_or_else(|| ResolveError::MalformedLocator(repo_locator.to_string()))?;
    let repo = repo.strip_suffix(".git").unwrap_or(repo);
    if repo.is_empty() {
        return Err(ResolveError::MalformedLocator(repo_locator.to_string()));
    }

    Ok((owner.to_string(), repo.to_string()))
}

/// Returns the ordered manifest URL candidates for `(repo_locator, version)`.
///
/// Pure function: no I/O, deterministic for a given input.
pub fn candidates(repo_locator: &str, version: &str) -> Result<Vec<String>, ResolveError> {
    let (owner, repo) = split_owner_repo(repo_locator)?;
    Ok(vec![
        format!("https://{RAW_HOST}/{owner}/{repo}/{version}/{MANIFEST_FILENAME}"),
        format!("https://{RAW_HOST}/{owner}/{repo}/v{version}/{MANIFEST_FILENAME}"),
    ])
}
