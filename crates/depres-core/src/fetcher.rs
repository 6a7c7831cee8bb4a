//! Manifest retrieval over the transport, with tag-candidate fallthrough.
//!
//! Candidates are tried strictly in order. A 200 wins immediately; a 404
//! means "this tag name does not exist, try the next guess"; any other
//! status or a transport-level failure is terminal for the whole attempt.

use crate::error::{ResolveError, TransportCause};
use crate::transport::Transport;
use std::time::Duration;

/// Fetches the first manifest body that answers 200 among `candidates`.
///
/// `version` is only used to name the sought version in
/// [`ResolveError::ManifestNotFound`] when every candidate answers 404.
pub fn fetch<T: Transport + ?Sized>(
    transport: &T,
    candidates: &[String],
    version: &str,
    timeout: Duration,
) -> Result<String, ResolveError> {
    for url in candidates {
        tracing::debug!("trying manifest candidate {url}");
        match transport.get(url, timeout) {
            Ok(resp) if resp.status == 200 => {
                tracing::info!("fetched manifest from {url} ({} bytes)", resp.body.len());
                return Ok(resp.body);
            }
            // Tag guess missed; fall through to the next candidate.
            Ok(resp) if resp.status == 404 => continue,
            Ok(resp) => {
                return Err(ResolveError::Transport {
                    url: url.clone(),
                    cause: TransportCause::Http(resp.status),
                })
            }
            Err(cause) => {
                return Err(ResolveError::Transport {
                    url: url.clone(),
                    cause,
                })
            }
        }
    }
    Err(ResolveError::ManifestNotFound {
        version: version.to_string(),
        tried: candidates.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::HttpResponse;
    use std::cell::RefCell;

    /// Scripted transport: answers requests from a fixed list and records
    /// every URL and timeout it was asked with.
    struct Scripted {
        responses: RefCell<Vec<Result<HttpResponse, TransportCause>>>,
        requested: RefCell<Vec<String>>,
        timeouts: RefCell<Vec<Duration>>,
    }

    impl Scripted {
        fn new(responses: Vec<Result<HttpResponse, TransportCause>>) -> Self {
            // Stored reversed so pop() yields them in script order.
            let mut responses = responses;
            responses.reverse();
            Self {
                responses: RefCell::new(responses),
                requested: RefCell::new(Vec::new()),
                timeouts: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.requested.borrow().len()
        }
    }

    impl Transport for Scripted {
        fn get(&self, url: &str, timeout: Duration) -> Result<HttpResponse, TransportCause> {
            self.requested.borrow_mut().push(url.to_string());
            self.timeouts.borrow_mut().push(timeout);
            self.responses
                .borrow_mut()
                .pop()
                .expect("more requests than scripted responses")
        }
    }

    fn ok(status: u32, body: &str) -> Result<HttpResponse, TransportCause> {
        Ok(HttpResponse {
            status,
            body: body.to_string(),
        })
    }

    fn urls() -> Vec<String> {
        vec![
            "https://raw.example/o/r/1.0.0/Cargo.toml".to_string(),
            "https://raw.example/o/r/v1.0.0/Cargo.toml".to_string(),
        ]
    }

    const TIMEOUT: Duration = Duration::from_secs(1);

    #[test]
    fn first_200_short_circuits() {
        let transport = Scripted::new(vec![ok(200, "[dependencies]")]);
        let body = fetch(&transport, &urls(), "1.0.0", TIMEOUT).unwrap();
        assert_eq!(body, "[dependencies]");
        assert_eq!(transport.calls(), 1, "second candidate must not be requested");
    }

    #[test]
    fn falls_through_404_to_second_candidate() {
        let transport = Scripted::new(vec![ok(404, ""), ok(200, "body2")]);
        let body = fetch(&transport, &urls(), "1.0.0", TIMEOUT).unwrap();
        assert_eq!(body, "body2");
        assert_eq!(transport.calls(), 2);
        assert_eq!(
            transport.requested.borrow()[1],
            "https://raw.example/o/r/v1.0.0/Cargo.toml"
        );
    }

    #[test]
    fn caller_timeout_reaches_every_request() {
        let transport = Scripted::new(vec![ok(404, ""), ok(200, "body")]);
        let timeout = Duration::from_millis(1234);
        fetch(&transport, &urls(), "1.0.0", timeout).unwrap();
        assert_eq!(
            transport.timeouts.borrow().as_slice(),
            [timeout, timeout],
            "each GET must carry the caller-supplied timeout"
        );
    }

    #[test]
    fn all_404_is_manifest_not_found() {
        let transport = Scripted::new(vec![ok(404, ""), ok(404, "")]);
        let err = fetch(&transport, &urls(), "1.0.0", TIMEOUT).unwrap_err();
        match err {
            ResolveError::ManifestNotFound { version, tried } => {
                assert_eq!(version, "1.0.0");
                assert_eq!(tried, 2);
            }
            other => panic!("expected ManifestNotFound, got {other:?}"),
        }
    }

    #[test]
    fn non_404_status_is_terminal() {
        let transport = Scripted::new(vec![ok(500, "boom")]);
        let err = fetch(&transport, &urls(), "1.0.0", TIMEOUT).unwrap_err();
        match err {
            ResolveError::Transport { url, cause } => {
                assert_eq!(url, "https://raw.example/o/r/1.0.0/Cargo.toml");
                assert!(matches!(cause, TransportCause::Http(500)));
            }
            other => panic!("expected Transport, got {other:?}"),
        }
        assert_eq!(transport.calls(), 1, "must not try further candidates");
    }

    #[test]
    fn transport_level_failure_is_terminal() {
        // 28 = CURLE_OPERATION_TIMEDOUT
        let curl_err = curl::Error::new(28);
        let transport = Scripted::new(vec![Err(TransportCause::Curl(curl_err))]);
        let err = fetch(&transport, &urls(), "1.0.0", TIMEOUT).unwrap_err();
        assert!(matches!(
            err,
            ResolveError::Transport {
                cause: TransportCause::Curl(_),
                ..
            }
        ));
        assert_eq!(transport.calls(), 1);
    }
}
