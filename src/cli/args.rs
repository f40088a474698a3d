use clap::{Parser, Subcommand};
use std::net::SocketAddr;

#[derive(Parser, Debug)]
#[command(name = "tl-relay")]
#[command(about = "Translation relay with provider fallback")]
#[command(version)]
pub struct Args {
    /// File to translate (reads from stdin if not provided)
    pub file: Option<String>,

    /// Source language code (ISO 639-1, e.g., en, ja, zh)
    #[arg(short = 'f', long = "from")]
    pub from: Option<String>,

    /// Target language code (ISO 639-1, e.g., es, fr, de)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Default per-provider timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Only log errors and hide the spinner
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP translation service
    Serve {
        /// Address to listen on (e.g., 127.0.0.1:3000)
        #[arg(short = 'b', long)]
        bind: Option<SocketAddr>,
    },
    /// Interactive chat mode for translation
    Chat {
        /// Source language code (ISO 639-1, e.g., en, ja, zh)
        #[arg(short = 'f', long = "from")]
        from: Option<String>,

        /// Target language code (ISO 639-1, e.g., es, fr, de)
        #[arg(short = 't', long = "to")]
        to: Option<String>,
    },
    /// List supported language codes
    Languages,
    /// Show the provider fallback chain
    Providers {
        /// Show details for a specific provider
        provider: Option<String>,
    },
    /// Write a starter config file or show the resolved configuration
    Configure {
        /// Show the resolved configuration instead of writing a file
        #[arg(long)]
        show: bool,

        /// Overwrite an existing config file
        #[arg(long, conflicts_with = "show")]
        force: bool,
    },
}
