//! Question-and-answer capability used by the initializer
//!
//! Every question carries a default; an empty answer selects it. Answers are
//! parsed the same way regardless of where they come from, so a scripted
//! answer fails exactly like a typed one.

mod defaults;
mod line;
mod scripted;
mod terminal;

pub use defaults::DefaultsPrompter;
pub use line::LinePrompter;
pub use scripted::ScriptedPrompter;
pub use terminal::TerminalPrompter;

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Invalid selection '{answer}' for {prompt}: expected one of {options}")]
    InvalidChoice {
        prompt: String,
        answer: String,
        options: String,
    },

    #[error("Invalid number '{answer}' for {prompt}")]
    InvalidNumber { prompt: String, answer: String },

    #[error("Invalid answer '{answer}' for {prompt}: expected y/yes/n/no")]
    InvalidConfirm { prompt: String, answer: String },

    #[error("Input closed before answering {prompt}")]
    Closed { prompt: String },

    #[error("Failed to read answer for {prompt}: {source}")]
    Io {
        prompt: String,
        #[source]
        source: io::Error,
    },

    #[error("Terminal prompt failed for {prompt}: {source}")]
    Terminal {
        prompt: String,
        #[source]
        source: dialoguer::Error,
    },
}

impl PromptError {
    /// True for a bad answer; false when the input itself is gone
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PromptError::InvalidChoice { .. }
                | PromptError::InvalidNumber { .. }
                | PromptError::InvalidConfirm { .. }
        )
    }
}

pub trait Prompter {
    fn ask_string(&mut self, prompt: &str, default: &str) -> Result<String, PromptError>;

    /// `default` must be one of `options`
    fn ask_choice(
        &mut self,
        prompt: &str,
        options: &[&str],
        default: &str,
    ) -> Result<String, PromptError>;

    fn ask_int(&mut self, prompt: &str, default: i64) -> Result<i64, PromptError>;

    fn ask_confirm(&mut self, prompt: &str, default: bool) -> Result<bool, PromptError>;
}

/// Which prompter `init` talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptMode {
    /// Every question takes its default
    Defaults,
    /// Interactive dialoguer prompts
    Terminal,
    /// One answer per line from piped stdin
    Lines,
}

impl PromptMode {
    pub fn select(non_interactive: bool, stdin_is_terminal: bool) -> Self {
        if non_interactive {
            PromptMode::Defaults
        } else if stdin_is_terminal {
            PromptMode::Terminal
        } else {
            PromptMode::Lines
        }
    }

    pub fn prompter(self) -> Box<dyn Prompter> {
        match self {
            PromptMode::Defaults => Box::new(DefaultsPrompter::new()),
            PromptMode::Terminal => Box::new(TerminalPrompter::new()),
            PromptMode::Lines => Box::new(LinePrompter::stdio()),
        }
    }
}

/// Matches by 1-based index first, then by case-insensitive option text
pub(crate) fn parse_choice(
    prompt: &str,
    answer: &str,
    options: &[&str],
    default: &str,
) -> Result<String, PromptError> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(default.to_string());
    }

    let picked = match answer.parse::<usize>() {
        Ok(index) => index.checked_sub(1).and_then(|i| options.get(i)),
        Err(_) => options.iter().find(|o| o.eq_ignore_ascii_case(answer)),
    };

    picked
        .map(|o| o.to_string())
        .ok_or_else(|| PromptError::InvalidChoice {
            prompt: prompt.to_string(),
            answer: answer.to_string(),
            options: options.join(", "),
        })
}

pub(crate) fn parse_int(prompt: &str, answer: &str, default: i64) -> Result<i64, PromptError> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(default);
    }
    answer.parse().map_err(|_| PromptError::InvalidNumber {
        prompt: prompt.to_string(),
        answer: answer.to_string(),
    })
}

pub(crate) fn parse_confirm(
    prompt: &str,
    answer: &str,
    default: bool,
) -> Result<bool, PromptError> {
    match answer.trim().to_lowercase().as_str() {
        "" => Ok(default),
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        other => Err(PromptError::InvalidConfirm {
            prompt: prompt.to_string(),
            answer: other.to_string(),
        }),
    }
}

pub(crate) fn parse_string(answer: &str, default: &str) -> String {
    let answer = answer.trim();
    if answer.is_empty() {
        default.to_string()
    } else {
        answer.to_string()
    }
}
