mod factory;
mod manager;

pub use factory::{build_orchestrator, create_provider};
pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_BIND, DEFAULT_CHAIN, DEFAULT_FROM, DEFAULT_TO,
    ProviderConfig, ProviderKind, RelayConfig, ResolveOptions, ResolvedConfig, ResolvedProvider,
    ServerConfig, resolve_config,
};
