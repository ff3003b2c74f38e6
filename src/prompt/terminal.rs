//! Interactive prompts on a terminal, rendered with dialoguer
//!
//! Typed answers go through the same parsers as every other prompter, so an
//! out-of-range choice is reported rather than re-asked.

use super::{parse_choice, parse_int, parse_string, PromptError, Prompter};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    fn read_text(
        &self,
        prompt: &str,
        label: String,
        default: &str,
    ) -> Result<String, PromptError> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .allow_empty(true);
        if !default.is_empty() {
            input = input.default(default.to_string());
        }

        input
            .interact_text()
            .map_err(|source| terminal_error(prompt, source))
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

fn terminal_error(prompt: &str, source: dialoguer::Error) -> PromptError {
    PromptError::Terminal {
        prompt: prompt.to_string(),
        source,
    }
}

/// `Cloud provider (aws/gcp/azure)`
fn choice_label(prompt: &str, options: &[&str]) -> String {
    format!("{} ({})", prompt, options.join("/"))
}

impl Prompter for TerminalPrompter {
    fn ask_string(&mut self, prompt: &str, default: &str) -> Result<String, PromptError> {
        let answer = self.read_text(prompt, prompt.to_string(), default)?;
        Ok(parse_string(&answer, default))
    }

    fn ask_choice(
        &mut self,
        prompt: &str,
        options: &[&str],
        default: &str,
    ) -> Result<String, PromptError> {
        let answer = self.read_text(prompt, choice_label(prompt, options), default)?;
        parse_choice(prompt, &answer, options, default)
    }

    fn ask_int(&mut self, prompt: &str, default: i64) -> Result<i64, PromptError> {
        let answer = self.read_text(prompt, prompt.to_string(), &default.to_string())?;
        parse_int(prompt, &answer, default)
    }

    fn ask_confirm(&mut self, prompt: &str, default: bool) -> Result<bool, PromptError> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|source| terminal_error(prompt, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_label_lists_options() {
        assert_eq!(
            choice_label("Project type", &["monolith", "microservice"]),
            "Project type (monolith/microservice)"
        );
    }

    #[test]
    fn test_terminal_error_is_fatal() {
        let err = terminal_error(
            "Project name",
            dialoguer::Error::from(std::io::Error::from(std::io::ErrorKind::Interrupted)),
        );
        assert!(!err.is_input_error());
        assert!(err.to_string().contains("Project name"));
    }
}
