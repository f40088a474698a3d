use inquire::autocompletion::{Autocomplete, Replacement};

use crate::translation::SUPPORTED_LANGUAGES;

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/config", "Show current languages and providers"),
    ("/from", "Set the source language"),
    ("/help", "Show available commands"),
    ("/quit", "Exit chat mode"),
    ("/swap", "Swap languages and texts"),
    ("/to", "Set the target language"),
];

// Suggestions render as "<completion>  <description>".
const SUGGESTION_SEPARATOR: &str = "  ";

/// Completes slash commands, and language codes after `/from` and `/to`.
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl SlashCommandCompleter {
    fn command_suggestions(input: &str) -> Vec<String> {
        SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}{SUGGESTION_SEPARATOR}{desc}"))
            .collect()
    }

    fn language_suggestions(cmd: &str, partial: &str) -> Vec<String> {
        let partial = partial.trim();
        SUPPORTED_LANGUAGES
            .iter()
            .filter(|(code, _)| code.starts_with(partial))
            .map(|(code, name)| format!("{cmd} {code}{SUGGESTION_SEPARATOR}{name}"))
            .collect()
    }
}

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let suggestions = match input.split_once(' ') {
            Some((cmd @ ("/from" | "/to"), partial)) => Self::language_suggestions(cmd, partial),
            Some(_) => vec![],
            None => Self::command_suggestions(input),
        };

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement = highlighted_suggestion.map(|s| {
            s.split(SUGGESTION_SEPARATOR)
                .next()
                .unwrap_or_default()
                .to_string()
        });
        Ok(replacement)
    }
}

/// Slash command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Config,
    From(Option<String>),
    Help,
    Quit,
    Swap,
    To(Option<String>),
    Unknown(String),
}

/// Input types
#[derive(Debug)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    input
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let parts: Vec<&str> = cmd.split_whitespace().collect();
    let arg = parts.get(1).map(|s| (*s).to_string());

    match parts.first().copied() {
        Some("config") => Input::Command(SlashCommand::Config),
        Some("from") => Input::Command(SlashCommand::From(arg)),
        Some("help") => Input::Command(SlashCommand::Help),
        Some("quit" | "exit" | "q") => Input::Command(SlashCommand::Quit),
        Some("swap") => Input::Command(SlashCommand::Swap),
        Some("to") => Input::Command(SlashCommand::To(arg)),
        _ => Input::Command(SlashCommand::Unknown(parts.join(" "))),
    }
}
