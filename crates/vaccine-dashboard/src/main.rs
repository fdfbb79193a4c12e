// File: crates/vaccine-dashboard/src/main.rs
// Summary: Renders the vaccine analysis dashboard PNG and opens it in a viewer window.

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use vaccine_dashboard::DashboardConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    vaccine_dashboard::run(&DashboardConfig::default())?;
    Ok(())
}
