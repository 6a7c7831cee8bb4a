pub mod config;
pub mod logging;

// Resolution pipeline, leaf modules first.
pub mod error;
pub mod fetcher;
pub mod locator;
pub mod manifest;
pub mod resolver;
pub mod transport;
