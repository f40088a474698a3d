use anyhow::Result;

use crate::chat::{ChatSession, SessionConfig};
use crate::config::{ConfigManager, ResolveOptions, build_orchestrator, resolve_config};

pub struct ChatOptions {
    pub from: Option<String>,
    pub to: Option<String>,
    pub timeout_secs: Option<u64>,
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default()?;
    let resolve_options = ResolveOptions {
        from: options.from,
        to: options.to,
        timeout_secs: options.timeout_secs,
        ..ResolveOptions::default()
    };
    let config = resolve_config(&resolve_options, &config_file)?;
    config.validate_languages()?;

    let orchestrator = build_orchestrator(&config)?;
    let session_config = SessionConfig {
        from: config.from,
        to: config.to,
        providers: config.chain.iter().map(|p| p.name.clone()).collect(),
        timeout: config.timeout,
    };

    let mut session = ChatSession::new(session_config, orchestrator);
    session.run().await
}
