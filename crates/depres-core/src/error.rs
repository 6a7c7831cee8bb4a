//! Error taxonomy for a single resolution attempt.
//!
//! Every variant is terminal for one `resolve` call: the only built-in
//! fallback is the fixed tag-candidate order inside the fetcher, never an
//! automatic retry of a failed request.

use std::fmt;
use thiserror::Error;

/// Cause of a transport-level fetch failure: either libcurl reported an
/// error (timeout, DNS, connection refused) or the server answered with a
/// status the fetcher does not handle (anything other than 200/404).
#[derive(Debug)]
pub enum TransportCause {
    /// Curl reported an error (timeout, connection, TLS, ...).
    Curl(curl::Error),
    /// HTTP response had a status other than 200 or 404.
    Http(u32),
}

impl fmt::Display for TransportCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportCause::Curl(e) => write!(f, "{}", e),
            TransportCause::Http(code) => write!(f, "HTTP {}", code),
        }
    }
}

impl std::error::Error for TransportCause {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransportCause::Curl(e) => Some(e),
            TransportCause::Http(_) => None,
        }
    }
}

impl From<curl::Error> for TransportCause {
    fn from(e: curl::Error) -> Self {
        TransportCause::Curl(e)
    }
}

/// Errors produced by the manifest resolution pipeline.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The locator host is not github.com. Carries the offending host.
    #[error("unsupported repository host `{0}`: only github.com is supported")]
    UnsupportedHost(String),

    /// The owner/repo segment could not be extracted from the locator.
    #[error("cannot extract owner/repo from repository locator `{0}`")]
    MalformedLocator(String),

    /// A request failed in a way that rules out trying further candidates.
    #[error("transport failure fetching {url}: {cause}")]
    Transport {
        url: String,
        #[source]
        cause: TransportCause,
    },

    /// Every tag candidate answered 404.
    #[error("no manifest found for version {version} ({tried} tag candidates tried)")]
    ManifestNotFound { version: String, tried: usize },
}
