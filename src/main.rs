use anyhow::Result;
use clap::Parser;

use tl_relay::cli::commands::{chat, configure, providers, serve, translate};
use tl_relay::cli::{Args, Command};
use tl_relay::output::{self, OutputConfig};
use tl_relay::translation::print_languages;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let defaults = OutputConfig::default();
    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || defaults.no_color,
        default_level: if matches!(args.command, Some(Command::Serve { .. })) {
            "info"
        } else {
            defaults.default_level
        },
    });

    match args.command {
        Some(Command::Serve { bind }) => {
            serve::run_serve(serve::ServeOptions {
                bind,
                timeout_secs: args.timeout,
            })
            .await?;
        }
        Some(Command::Chat { from, to }) => {
            chat::run_chat(chat::ChatOptions {
                from,
                to,
                timeout_secs: args.timeout,
            })
            .await?;
        }
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Providers { provider }) => {
            providers::print_providers(provider.as_deref())?;
        }
        Some(Command::Configure { show, force }) => {
            configure::run_configure(&configure::ConfigureOptions { show, force })?;
        }
        None => {
            let options = translate::TranslateOptions {
                file: args.file,
                from: args.from,
                to: args.to,
                timeout_secs: args.timeout,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
