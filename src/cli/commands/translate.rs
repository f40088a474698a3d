use anyhow::{Result, bail};
use tracing::debug;

use crate::config::{ConfigManager, ResolveOptions, build_orchestrator, resolve_config};
use crate::input::InputReader;
use crate::translation::TranslationRequest;
use crate::ui::Spinner;

pub struct TranslateOptions {
    pub file: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Translates a file or stdin once and prints the result to stdout.
pub async fn run_translate(options: TranslateOptions) -> Result<()> {
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

    let source_text = InputReader::read(options.file.as_deref())?;
    if source_text.is_empty() {
        bail!("Input is empty");
    }

    let orchestrator = build_orchestrator(&config)?;
    debug!(
        from = %config.from,
        to = %config.to,
        chain = ?orchestrator.provider_names(),
        "Translating input"
    );

    let request = TranslationRequest::new(source_text, config.from, config.to);
    let result = {
        let _spinner = Spinner::new("Translating...");
        orchestrator.translate(&request).await
    }?;

    println!("{}", result.translated_text());
    Ok(())
}
