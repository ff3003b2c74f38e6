use super::{parse_choice, parse_confirm, parse_int, parse_string, PromptError, Prompter};
use std::collections::{HashMap, VecDeque};

/// Prompter fed from a script of answers keyed by question text.
///
/// A question asked several times (one port per service, for example)
/// consumes its queued answers in order; once a queue runs dry the default is
/// used. Every question asked is recorded in [`ScriptedPrompter::asked`].
#[derive(Debug, Default, Clone)]
pub struct ScriptedPrompter {
    answers: HashMap<String, VecDeque<String>>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answer(mut self, prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        self.push_answer(prompt, answer);
        self
    }

    pub fn push_answer(&mut self, prompt: impl Into<String>, answer: impl Into<String>) {
        self.answers
            .entry(prompt.into())
            .or_default()
            .push_back(answer.into());
    }

    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    fn next_answer(&mut self, prompt: &str) -> String {
        self.asked.push(prompt.to_string());
        self.answers
            .get_mut(prompt)
            .and_then(VecDeque::pop_front)
            .unwrap_or_default()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask_string(&mut self, prompt: &str, default: &str) -> Result<String, PromptError> {
        let answer = self.next_answer(prompt);
        Ok(parse_string(&answer, default))
    }

    fn ask_choice(
        &mut self,
        prompt: &str,
        options: &[&str],
        default: &str,
    ) -> Result<String, PromptError> {
        let answer = self.next_answer(prompt);
        parse_choice(prompt, &answer, options, default)
    }

    fn ask_int(&mut self, prompt: &str, default: i64) -> Result<i64, PromptError> {
        let answer = self.next_answer(prompt);
        parse_int(prompt, &answer, default)
    }

    fn ask_confirm(&mut self, prompt: &str, default: bool) -> Result<bool, PromptError> {
        let answer = self.next_answer(prompt);
        parse_confirm(prompt, &answer, default)
    }
}
