use anyhow::{Context, Result, bail};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::paths;
use crate::translation::{
    DEFAULT_TIMEOUT, LIBRETRANSLATE_ENDPOINT, MYMEMORY_ENDPOINT, validate_language,
};

pub const DEFAULT_FROM: &str = "en";
pub const DEFAULT_TO: &str = "es";
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_CHAIN: &[&str] = &["libretranslate", "mymemory"];

/// Settings in the `[relay]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Provider names in fallback order.
    pub chain: Option<Vec<String>>,
    /// Default per-provider timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Default source language for the CLI and chat mode.
    pub from: Option<String>,
    /// Default target language for the CLI and chat mode.
    pub to: Option<String>,
}

/// Settings in the `[server]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address the HTTP server binds to.
    pub bind: Option<String>,
    /// Browser origins allowed by CORS. Empty means any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

/// Which wire protocol a provider speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    LibreTranslate,
    MyMemory,
}

impl ProviderKind {
    pub const fn default_endpoint(self) -> &'static str {
        match self {
            Self::LibreTranslate => LIBRETRANSLATE_ENDPOINT,
            Self::MyMemory => MYMEMORY_ENDPOINT,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LibreTranslate => "libretranslate",
            Self::MyMemory => "mymemory",
        }
    }
}

/// Configuration for one translation provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    /// Service URL. Defaults to the public endpoint for `kind`.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// Contact e-mail sent to services that grant a larger quota for it.
    #[serde(default)]
    pub email: Option<String>,
    /// Overrides `relay.timeout_secs` for this provider.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ProviderConfig {
    pub const fn new(kind: ProviderKind) -> Self {
        Self {
            kind,
            endpoint: None,
            api_key: None,
            api_key_env: None,
            email: None,
            timeout_secs: None,
        }
    }

    /// Gets the API key, preferring environment variable over config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }

    /// Returns `true` if this provider requires an API key.
    pub const fn requires_api_key(&self) -> bool {
        self.api_key.is_some() || self.api_key_env.is_some()
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .unwrap_or_else(|| self.kind.default_endpoint())
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/tl-relay/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub relay: RelayConfig,
    #[serde(default)]
    pub server: ServerConfig,
    /// Provider configurations keyed by name.
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
}

impl ConfigFile {
    /// A config file spelling out the built-in defaults.
    pub fn starter() -> Self {
        Self {
            relay: RelayConfig {
                chain: Some(DEFAULT_CHAIN.iter().map(ToString::to_string).collect()),
                timeout_secs: Some(DEFAULT_TIMEOUT.as_secs()),
                from: Some(DEFAULT_FROM.to_string()),
                to: Some(DEFAULT_TO.to_string()),
            },
            server: ServerConfig {
                bind: Some(DEFAULT_BIND.to_string()),
                cors_origins: Vec::new(),
            },
            providers: builtin_providers(),
        }
    }

    /// Provider table with the built-in entries filled in under any the
    /// file does not define itself.
    pub fn merged_providers(&self) -> HashMap<String, ProviderConfig> {
        let mut providers = builtin_providers();
        providers.extend(self.providers.clone());
        providers
    }
}

fn builtin_providers() -> HashMap<String, ProviderConfig> {
    HashMap::from([
        (
            "libretranslate".to_string(),
            ProviderConfig::new(ProviderKind::LibreTranslate),
        ),
        (
            "mymemory".to_string(),
            ProviderConfig::new(ProviderKind::MyMemory),
        ),
    ])
}

/// A provider ready to be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProvider {
    pub name: String,
    pub kind: ProviderKind,
    pub endpoint: String,
    pub api_key: Option<String>,
    pub email: Option<String>,
    pub timeout: Duration,
}

/// Resolved configuration after merging CLI arguments, the config file and
/// built-in defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Providers in fallback order.
    pub chain: Vec<ResolvedProvider>,
    /// Default per-provider timeout.
    pub timeout: Duration,
    pub from: String,
    pub to: String,
    pub bind: SocketAddr,
    pub cors_origins: Vec<String>,
}

impl ResolvedConfig {
    /// Checks `from` and `to` against the known language table.
    ///
    /// Only the terminal commands need this; the HTTP service accepts any
    /// non-empty code.
    pub fn validate_languages(&self) -> Result<()> {
        validate_language(&self.from)?;
        validate_language(&self.to)
    }
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Source language code override.
    pub from: Option<String>,
    /// Target language code override.
    pub to: Option<String>,
    /// Bind address override.
    pub bind: Option<SocketAddr>,
    /// Default timeout override, in seconds.
    pub timeout_secs: Option<u64>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values, which take
/// precedence over built-in defaults.
///
/// # Errors
///
/// Returns an error if the fallback chain is empty or names an unknown
/// provider, if a provider needs an API key that is not set, or if an
/// address or endpoint does not parse.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let timeout_secs = options
        .timeout_secs
        .or(config_file.relay.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT.as_secs());
    if timeout_secs == 0 {
        bail!(
            "Invalid configuration: 'timeout_secs' must be at least 1\n\n\
             Fix it in ~/.config/tl-relay/config.toml"
        );
    }
    let timeout = Duration::from_secs(timeout_secs);

    let chain_names: Vec<String> = config_file.relay.chain.clone().unwrap_or_else(|| {
        DEFAULT_CHAIN.iter().map(ToString::to_string).collect()
    });
    if chain_names.is_empty() {
        bail!(
            "Invalid configuration: 'chain' is empty\n\n\
             List at least one provider, e.g.:\n  \
             [relay]\n  \
             chain = [\"libretranslate\", \"mymemory\"]"
        );
    }

    let providers = config_file.merged_providers();
    let chain = chain_names
        .iter()
        .map(|name| resolve_provider(name, &providers, timeout))
        .collect::<Result<Vec<_>>>()?;

    let bind = match options.bind {
        Some(addr) => addr,
        None => {
            let raw = config_file.server.bind.as_deref().unwrap_or(DEFAULT_BIND);
            raw.parse().with_context(|| {
                format!("Invalid configuration: 'bind' is not a socket address: '{raw}'")
            })?
        }
    };

    let from = options
        .from
        .as_ref()
        .or(config_file.relay.from.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_FROM.to_string());

    let to = options
        .to
        .as_ref()
        .or(config_file.relay.to.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_TO.to_string());

    Ok(ResolvedConfig {
        chain,
        timeout,
        from,
        to,
        bind,
        cors_origins: config_file.server.cors_origins.clone(),
    })
}

fn resolve_provider(
    name: &str,
    providers: &HashMap<String, ProviderConfig>,
    default_timeout: Duration,
) -> Result<ResolvedProvider> {
    let provider = providers.get(name).ok_or_else(|| {
        let mut available: Vec<_> = providers.keys().map(String::as_str).collect();
        available.sort_unstable();
        anyhow::anyhow!(
            "Provider '{name}' not found\n\n\
             Available providers:\n  \
             - {}\n\n\
             Add providers to ~/.config/tl-relay/config.toml",
            available.join("\n  - ")
        )
    })?;

    let endpoint = provider.endpoint();
    Url::parse(endpoint)
        .with_context(|| format!("Provider '{name}' has an invalid endpoint: '{endpoint}'"))?;

    let api_key = provider.get_api_key();
    if provider.requires_api_key() && api_key.is_none() {
        let env_var = provider.api_key_env.as_deref().unwrap_or("API_KEY");
        bail!(
            "Provider '{name}' requires an API key\n\n\
             Set the {env_var} environment variable:\n  \
             export {env_var}=\"your-api-key\"\n\n\
             Or set api_key in ~/.config/tl-relay/config.toml"
        );
    }

    let timeout = match provider.timeout_secs {
        Some(0) => bail!("Provider '{name}': 'timeout_secs' must be at least 1"),
        Some(secs) => Duration::from_secs(secs),
        None => default_timeout,
    };

    Ok(ResolvedProvider {
        name: name.to_string(),
        kind: provider.kind,
        endpoint: endpoint.to_string(),
        api_key,
        email: provider.email.clone(),
        timeout,
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/tl-relay/config.toml`
    /// or `~/.config/tl-relay/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn exists(&self) -> bool {
        self.config_path.exists()
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    /// Loads the config file, or the defaults if there is none.
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}
