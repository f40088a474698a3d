use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use std::time::Duration;
use tracing::debug;

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::state::TranslatorState;
use super::ui;
use crate::translation::{Orchestrator, validate_language};
use crate::ui::{Spinner, Style};

/// Configuration for a chat session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Initial source language code.
    pub from: String,
    /// Initial target language code.
    pub to: String,
    /// Provider names in fallback order (for display).
    pub providers: Vec<String>,
    /// Per-attempt timeout (for display).
    pub timeout: Duration,
}

/// An interactive chat session for translation.
///
/// Every line of text becomes the new source text and is translated with
/// the current language pair.
pub struct ChatSession {
    config: SessionConfig,
    state: TranslatorState,
    orchestrator: Orchestrator,
}

impl ChatSession {
    pub fn new(config: SessionConfig, orchestrator: Orchestrator) -> Self {
        let state = TranslatorState::new(config.from.clone(), config.to.clone());
        Self {
            config,
            state,
            orchestrator,
        }
    }

    pub const fn state(&self) -> &TranslatorState {
        &self.state
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(&self.state);

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Type text to translate, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd).await {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        self.state.set_source_text(text);
                        self.translate_current().await;
                    }
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!();
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Handles a slash command. Returns `false` when the session should end.
    async fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => ui::print_config(&self.config, &self.state),
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Quit => return false,
            SlashCommand::Swap => {
                self.state.swap();
                ui::print_direction(&self.state);
                self.retranslate().await;
            }
            SlashCommand::From(lang) => {
                if self.set_language(lang.as_deref(), "/from", true) {
                    self.retranslate().await;
                }
            }
            SlashCommand::To(lang) => {
                if self.set_language(lang.as_deref(), "/to", false) {
                    self.retranslate().await;
                }
            }
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
            }
        }
        true
    }

    fn set_language(&mut self, value: Option<&str>, usage: &str, source: bool) -> bool {
        let Some(lang) = value else {
            ui::print_error(&format!("Usage: {usage} <language>"));
            return false;
        };

        if let Err(e) = validate_language(lang) {
            ui::print_error(&e.to_string());
            return false;
        }

        if source {
            self.state.set_source_language(lang);
        } else {
            self.state.set_target_language(lang);
        }
        println!(
            "{} {} language set to {}",
            Style::success("✓"),
            if source { "Source" } else { "Target" },
            Style::value(lang)
        );
        true
    }

    /// Re-runs the translation after the language pair changed.
    async fn retranslate(&mut self) {
        if self.state.has_source_text() {
            self.translate_current().await;
        } else {
            self.state.set_translated_text("");
            println!();
        }
    }

    async fn translate_current(&mut self) {
        if !self.state.has_source_text() {
            self.state.set_translated_text("");
            return;
        }

        self.state.set_translating(true);
        let request = self.state.request();
        let result = {
            let _spinner = Spinner::new("Translating...");
            self.orchestrator.translate(&request).await
        };
        self.state.set_translating(false);

        match result {
            Ok(result) => {
                self.state.set_translated_text(result.into_text());
                ui::print_translation(self.state.translated_text());
            }
            Err(e) => {
                debug!(error = ?e, "Chat translation failed");
                self.state.set_translated_text("");
                ui::print_error(&e.to_string());
            }
        }
    }
}
