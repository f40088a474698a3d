//! Provider listing command handler.

use anyhow::Result;

use crate::config::{
    ConfigFile, ConfigManager, DEFAULT_CHAIN, ProviderConfig, ResolveOptions, resolve_config,
};
use crate::ui::Style;

/// Prints the provider fallback chain to stdout.
///
/// If `specific_provider` is provided, shows detailed information for that
/// provider instead.
pub fn print_providers(specific_provider: Option<&str>) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_or_default()?;

    match specific_provider {
        Some(name) => print_provider_details(&config, name),
        None => print_chain(&config),
    }
}

fn print_chain(config: &ConfigFile) -> Result<()> {
    let resolved = resolve_config(&ResolveOptions::default(), config)?;

    println!("{}", Style::header("Fallback chain"));
    for (position, provider) in resolved.chain.iter().enumerate() {
        println!(
            "  {}. {} {}",
            position + 1,
            Style::value(&provider.name),
            Style::secondary(format!("({})", provider.kind.as_str()))
        );
        println!("     endpoint: {}", Style::secondary(&provider.endpoint));
        println!(
            "     timeout:  {}",
            Style::secondary(format!("{}s", provider.timeout.as_secs()))
        );
    }

    Ok(())
}

fn print_provider_details(config: &ConfigFile, name: &str) -> Result<()> {
    let providers = config.merged_providers();
    let Some(provider) = providers.get(name) else {
        let mut available: Vec<_> = providers.keys().map(String::as_str).collect();
        available.sort_unstable();
        anyhow::bail!(
            "Provider '{name}' not found\n\n\
             Available providers: {}",
            available.join(", ")
        );
    };

    let position = config.relay.chain.as_ref().map_or_else(
        || DEFAULT_CHAIN.iter().position(|entry| *entry == name),
        |chain| chain.iter().position(|entry| entry == name),
    );

    println!(
        "Provider: {}{}",
        Style::value(name),
        position.map_or_else(
            || Style::warning(" (not in chain)"),
            |i| Style::secondary(format!(" (position {} in chain)", i + 1))
        )
    );
    print_details(provider);

    Ok(())
}

fn print_details(provider: &ProviderConfig) {
    println!("  kind     = {}", provider.kind.as_str());
    println!("  endpoint = {}", provider.endpoint());
    if provider.requires_api_key() {
        let has_key = provider.get_api_key().is_some();
        println!(
            "  api_key  = {}",
            if has_key { "(set)" } else { "(not set)" }
        );
    }
    if let Some(email) = &provider.email {
        println!("  email    = {email}");
    }
    if let Some(secs) = provider.timeout_secs {
        println!("  timeout  = {secs}s");
    }
}
