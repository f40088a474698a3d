//! Configure command handler.

use anyhow::{Result, bail};

use crate::config::{ConfigFile, ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::ui::Style;

pub struct ConfigureOptions {
    pub show: bool,
    pub force: bool,
}

/// Writes a starter config file, or prints the resolved configuration.
pub fn run_configure(options: &ConfigureOptions) -> Result<()> {
    let manager = ConfigManager::new()?;

    if options.show {
        let config = resolve_config(&ResolveOptions::default(), &manager.load_or_default()?)?;
        print_resolved(&manager, &config);
        return Ok(());
    }

    if manager.exists() && !options.force {
        bail!(
            "Config file already exists: {}\n\n\
             Run 'tl-relay configure --force' to overwrite it",
            manager.config_path().display()
        );
    }

    manager.save(&ConfigFile::starter())?;

    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn print_resolved(manager: &ConfigManager, config: &ResolvedConfig) {
    println!("{}", Style::header("Resolved configuration"));
    println!(
        "  {}     {}",
        Style::label("file"),
        if manager.exists() {
            Style::secondary(manager.config_path().display().to_string())
        } else {
            Style::secondary("(none, using defaults)")
        }
    );
    println!("  {}     {}", Style::label("from"), Style::value(&config.from));
    println!("  {}       {}", Style::label("to"), Style::value(&config.to));
    println!(
        "  {}    {}",
        Style::label("chain"),
        Style::value(
            config
                .chain
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(" → ")
        )
    );
    println!(
        "  {}  {}",
        Style::label("timeout"),
        Style::value(format!("{}s", config.timeout.as_secs()))
    );
    println!("  {}     {}", Style::label("bind"), Style::value(config.bind));
    println!(
        "  {}     {}",
        Style::label("cors"),
        if config.cors_origins.is_empty() {
            Style::secondary("(any origin)")
        } else {
            Style::value(config.cors_origins.join(", "))
        }
    );
}
