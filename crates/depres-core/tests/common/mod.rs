//! Shared test transport: answers GETs from a scripted URL -> response map
//! and records the request order.

use depres_core::error::TransportCause;
use depres_core::transport::{HttpResponse, Transport};
use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

pub struct MapTransport {
    responses: HashMap<String, (u32, String)>,
    pub requested: RefCell<Vec<String>>,
    pub timeouts: RefCell<Vec<Duration>>,
}

impl MapTransport {
    pub fn new(entries: &[(&str, u32, &str)]) -> Self {
        let responses = entries
            .iter()
            .map(|(url, status, body)| (url.to_string(), (*status, body.to_string())))
            .collect();
        Self {
            responses,
            requested: RefCell::new(Vec::new()),
            timeouts: RefCell::new(Vec::new()),
        }
    }
}

impl Transport for MapTransport {
    fn get(&self, url: &str, timeout: Duration) -> Result<HttpResponse, TransportCause> {
        self.requested.borrow_mut().push(url.to_string());
        self.timeouts.borrow_mut().push(timeout);
        match self.responses.get(url) {
            Some((status, body)) => Ok(HttpResponse {
                status: *status,
                body: body.clone(),
            }),
            // Unknown URL behaves like a missing tag.
            None => Ok(HttpResponse {
                status: 404,
                body: String::new(),
            }),
        }
    }
}
