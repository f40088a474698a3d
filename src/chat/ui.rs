//! Chat mode UI components.

use super::session::SessionConfig;
use super::state::TranslatorState;
use crate::translation::language_name;
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(state: &TranslatorState) {
    println!(
        "{} {} - Interactive Translation Mode",
        Style::header("tl-relay"),
        Style::version(format!("v{VERSION}"))
    );
    print_direction(state);
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

fn describe(code: &str) -> String {
    language_name(code).map_or_else(
        || Style::code(code),
        |name| format!("{} {}", Style::code(code), Style::secondary(format!("({name})"))),
    )
}

pub fn print_direction(state: &TranslatorState) {
    println!(
        "{} → {}",
        describe(state.source_language()),
        describe(state.target_language())
    );
    println!();
}

pub fn print_translation(text: &str) {
    println!("{text}");
    println!();
}

pub fn print_config(config: &SessionConfig, state: &TranslatorState) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}       {}",
        Style::label("from"),
        Style::value(state.source_language())
    );
    println!(
        "  {}         {}",
        Style::label("to"),
        Style::value(state.target_language())
    );
    println!(
        "  {}      {}",
        Style::label("chain"),
        Style::value(config.providers.join(" → "))
    );
    println!(
        "  {}    {}",
        Style::label("timeout"),
        Style::secondary(format!("{}s", config.timeout.as_secs()))
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    let rows = [
        ("/swap", "Swap languages and texts"),
        ("/from <code>", "Set the source language"),
        ("/to <code>", "Set the target language"),
        ("/config", "Show current configuration"),
        ("/help", "Show this help"),
        ("/quit", "Exit chat mode"),
    ];
    for (cmd, desc) in rows {
        println!("  {:14} {}", Style::command(cmd), Style::secondary(desc));
    }
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
