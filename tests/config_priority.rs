#![allow(clippy::unwrap_used)]
//! Config priority contract tests.
//!
//! These tests verify that CLI options take priority over config file settings.
//! Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. Config file settings
//! 3. Built-in defaults

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;
use tl_relay::config::{
    ConfigFile, DEFAULT_BIND, DEFAULT_FROM, DEFAULT_TO, ProviderConfig, ProviderKind, RelayConfig,
    ResolveOptions, ServerConfig, resolve_config,
};

fn make_config_with_defaults() -> ConfigFile {
    let mut providers = HashMap::new();
    providers.insert(
        "self_hosted".to_string(),
        ProviderConfig {
            endpoint: Some("http://translate.local/translate".to_string()),
            api_key: Some("test_key".to_string()),
            timeout_secs: Some(3),
            ..ProviderConfig::new(ProviderKind::LibreTranslate)
        },
    );

    ConfigFile {
        relay: RelayConfig {
            chain: Some(vec!["self_hosted".to_string(), "mymemory".to_string()]),
            timeout_secs: Some(7),
            from: Some("ja".to_string()),
            to: Some("de".to_string()),
        },
        server: ServerConfig {
            bind: Some("0.0.0.0:8080".to_string()),
            cors_origins: vec!["http://localhost:5173".to_string()],
        },
        providers,
    }
}

#[test]
fn test_builtin_defaults_without_config() {
    let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

    assert_eq!(resolved.from, DEFAULT_FROM);
    assert_eq!(resolved.to, DEFAULT_TO);
    assert_eq!(resolved.bind, DEFAULT_BIND.parse::<SocketAddr>().unwrap());
    assert_eq!(resolved.timeout, Duration::from_secs(10));
    let names: Vec<_> = resolved.chain.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["libretranslate", "mymemory"]);
    assert!(resolved.cors_origins.is_empty());
}

#[test]
fn test_config_used_when_cli_not_specified() {
    let config = make_config_with_defaults();

    let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();

    assert_eq!(resolved.from, "ja");
    assert_eq!(resolved.to, "de");
    assert_eq!(resolved.bind, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
    assert_eq!(resolved.timeout, Duration::from_secs(7));
    assert_eq!(resolved.cors_origins, vec!["http://localhost:5173"]);
}

#[test]
fn test_cli_languages_override_config() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        from: Some("en".to_string()),
        to: Some("zh".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.from, "en");
    assert_eq!(resolved.to, "zh");
}

#[test]
fn test_cli_bind_overrides_config_bind() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        bind: Some("127.0.0.1:9999".parse::<SocketAddr>().unwrap()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.bind, "127.0.0.1:9999".parse::<SocketAddr>().unwrap());
}

#[test]
fn test_cli_timeout_overrides_default_but_not_provider_timeout() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        timeout_secs: Some(20),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.timeout, Duration::from_secs(20));
    assert_eq!(resolved.chain[0].timeout, Duration::from_secs(3));
    assert_eq!(resolved.chain[1].timeout, Duration::from_secs(20));
}

#[test]
fn test_chain_order_follows_config() {
    let config = make_config_with_defaults();

    let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();

    assert_eq!(resolved.chain[0].name, "self_hosted");
    assert_eq!(resolved.chain[0].endpoint, "http://translate.local/translate");
    assert_eq!(resolved.chain[0].api_key.as_deref(), Some("test_key"));
    assert_eq!(resolved.chain[1].name, "mymemory");
    assert_eq!(resolved.chain[1].kind, ProviderKind::MyMemory);
}

#[test]
fn test_unknown_chain_entry_returns_error() {
    let mut config = make_config_with_defaults();
    config.relay.chain = Some(vec!["nonexistent".to_string()]);

    let err = resolve_config(&ResolveOptions::default(), &config).unwrap_err();
    assert!(err.to_string().contains("Provider 'nonexistent' not found"));
}

#[test]
fn test_empty_chain_returns_error() {
    let mut config = make_config_with_defaults();
    config.relay.chain = Some(Vec::new());

    let err = resolve_config(&ResolveOptions::default(), &config).unwrap_err();
    assert!(err.to_string().contains("'chain' is empty"));
}

#[test]
fn test_all_cli_options_override_config() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        from: Some("fr".to_string()),
        to: Some("it".to_string()),
        bind: Some("[::1]:4000".parse::<SocketAddr>().unwrap()),
        timeout_secs: Some(2),
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.from, "fr");
    assert_eq!(resolved.to, "it");
    assert_eq!(resolved.bind, "[::1]:4000".parse::<SocketAddr>().unwrap());
    assert_eq!(resolved.timeout, Duration::from_secs(2));
}
