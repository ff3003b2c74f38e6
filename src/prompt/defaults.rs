use super::{PromptError, Prompter};
use tracing::debug;

/// Answers every question with its default; used for `--non-interactive`
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultsPrompter;

impl DefaultsPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DefaultsPrompter {
    fn ask_string(&mut self, prompt: &str, default: &str) -> Result<String, PromptError> {
        debug!(prompt, default, "Using default answer");
        Ok(default.to_string())
    }

    fn ask_choice(
        &mut self,
        prompt: &str,
        _options: &[&str],
        default: &str,
    ) -> Result<String, PromptError> {
        debug!(prompt, default, "Using default answer");
        Ok(default.to_string())
    }

    fn ask_int(&mut self, prompt: &str, default: i64) -> Result<i64, PromptError> {
        debug!(prompt, default, "Using default answer");
        Ok(default)
    }

    fn ask_confirm(&mut self, prompt: &str, default: bool) -> Result<bool, PromptError> {
        debug!(prompt, default, "Using default answer");
        Ok(default)
    }
}
