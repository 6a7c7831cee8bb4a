//! `depres config` – validate and display the configuration file.

use anyhow::Result;
use depres_core::config;
use std::path::Path;

/// Load, validate and print the configuration as a key-value block.
pub fn run_config(config_path: &Path) -> Result<()> {
    let cfg = config::load(config_path)?;

    println!("=== depres settings ===");
    println!("Package under analysis: {}", cfg.package_name);
    println!("Repository URL: {}", cfg.repo_url);
    println!("Test repository mode: {}", cfg.test_mode);
    println!("Package version: {}", cfg.version);
    println!("Maximum analysis depth: {}", cfg.max_depth);
    println!("=======================");
    Ok(())
}
