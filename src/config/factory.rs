//! Builds the provider chain from resolved configuration.

use anyhow::{Context, Result};
use reqwest::Client;
use std::sync::Arc;

use super::manager::{ProviderKind, ResolvedConfig, ResolvedProvider};
use crate::translation::{LibreTranslate, MyMemory, Orchestrator, Provider, http_client};

/// Creates a provider client for one chain entry.
pub fn create_provider(provider: &ResolvedProvider, client: Client) -> Arc<dyn Provider> {
    match provider.kind {
        ProviderKind::LibreTranslate => Arc::new(LibreTranslate::new(
            provider.name.clone(),
            provider.endpoint.clone(),
            provider.api_key.clone(),
            provider.timeout,
            client,
        )),
        ProviderKind::MyMemory => Arc::new(MyMemory::new(
            provider.name.clone(),
            provider.endpoint.clone(),
            provider.email.clone(),
            provider.timeout,
            client,
        )),
    }
}

/// Builds an orchestrator whose providers share one connection pool.
pub fn build_orchestrator(config: &ResolvedConfig) -> Result<Orchestrator> {
    let client = http_client().context("Failed to build HTTP client")?;

    let providers = config
        .chain
        .iter()
        .map(|provider| create_provider(provider, client.clone()))
        .collect();

    Ok(Orchestrator::new(providers).with_timeout(config.timeout))
}
