use anyhow::Result;
use std::net::SocketAddr;
use tracing::info;

use crate::config::{ConfigManager, ResolveOptions, build_orchestrator, resolve_config};
use crate::server;

pub struct ServeOptions {
    pub bind: Option<SocketAddr>,
    pub timeout_secs: Option<u64>,
}

/// Runs the HTTP service until interrupted.
pub async fn run_serve(options: ServeOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default()?;
    let resolve_options = ResolveOptions {
        bind: options.bind,
        timeout_secs: options.timeout_secs,
        ..ResolveOptions::default()
    };
    let config = resolve_config(&resolve_options, &config_file)?;

    let orchestrator = build_orchestrator(&config)?;
    info!(
        chain = ?orchestrator.provider_names(),
        timeout = ?config.timeout,
        "Provider chain ready"
    );

    server::serve(orchestrator, config.bind, &config.cors_origins).await?;
    Ok(())
}
