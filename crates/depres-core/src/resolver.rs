//! End-to-end resolution pipeline: locate, fetch, extract, sort.

use crate::config::ResolvedConfig;
use crate::error::ResolveError;
use crate::manifest::{self, DependencyEntry};
use crate::transport::Transport;
use crate::{fetcher, locator};
use std::time::Duration;

/// Per-request timeout for manifest fetches. Pipeline policy, not exposed
/// through the user-facing configuration.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolves the direct dependency list for the configured package.
///
/// Strictly sequential: candidate URLs from the locator, first successful
/// manifest body from the fetcher, entries from the extractor, then a final
/// sort by `(name, version)` for reproducible presentation. Errors from each
/// stage propagate unchanged.
///
/// `config.max_depth` is reserved for transitive resolution and is not
/// consumed here; only direct dependencies are reported.
pub fn resolve<T: Transport + ?Sized>(
    config: &ResolvedConfig,
    transport: &T,
) -> Result<Vec<DependencyEntry>, ResolveError> {
    tracing::info!(
        package = %config.package_name,
        version = %config.version,
        "resolving dependencies"
    );

    let candidates = locator::candidates(&config.repo_url, &config.version)?;
    let body = fetcher::fetch(transport, &candidates, &config.version, FETCH_TIMEOUT)?;
    let mut entries = manifest::extract(&body);
    entries.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.version.cmp(&b.version)));

    tracing::info!("resolved {} direct dependencies", entries.len());
    Ok(entries)
}
