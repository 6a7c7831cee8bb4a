//! `depres resolve` – fetch the manifest and print declared dependencies.

use anyhow::Result;
use depres_core::config;
use depres_core::resolver;
use depres_core::transport::CurlTransport;
use std::path::Path;

pub fn run_resolve(config_path: &Path) -> Result<()> {
    let cfg = config::load(config_path)?;
    tracing::debug!("loaded config: {:?}", cfg);

    let entries = resolver::resolve(&cfg, &CurlTransport)?;

    if entries.is_empty() {
        println!(
            "{} {} declares no dependencies",
            cfg.package_name, cfg.version
        );
        return Ok(());
    }

    println!("Dependencies of {} {}:", cfg.package_name, cfg.version);
    for entry in &entries {
        println!("  {} {}", entry.name, entry.version);
    }
    println!("{} total", entries.len());
    Ok(())
}
