//! HTTP transport abstraction and libcurl-backed implementation.
//!
//! The fetcher depends only on the [`Transport`] trait so tests can script
//! status sequences without network access.

use crate::error::TransportCause;
use std::time::Duration;

/// Response to a single GET: status code plus body text.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u32,
    pub body: String,
}

/// Minimal GET capability with a per-request timeout.
pub trait Transport {
    fn get(&self, url: &str, timeout: Duration) -> Result<HttpResponse, TransportCause>;
}

/// Real transport using the curl crate (libcurl easy interface).
///
/// Follows redirects. Blocking; the pipeline is strictly sequential so no
/// async runtime is involved.
pub struct CurlTransport;

impl Transport for CurlTransport {
    fn get(&self, url: &str, timeout: Duration) -> Result<HttpResponse, TransportCause> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.connect_timeout(timeout)?;
        easy.timeout(timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        Ok(HttpResponse {
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        })
    }
}
