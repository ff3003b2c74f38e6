//! Line-at-a-time answers for piped, non-terminal stdin

use super::{parse_choice, parse_confirm, parse_int, parse_string, PromptError, Prompter};
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Reads one line per question from `reader`, echoing questions to `writer`
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl LinePrompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_answer(&mut self, prompt: &str) -> Result<String, PromptError> {
        let io_err = |source| PromptError::Io {
            prompt: prompt.to_string(),
            source,
        };
        self.writer.flush().map_err(io_err)?;

        let mut line = String::new();
        let read = self.reader.read_line(&mut line).map_err(io_err)?;
        if read == 0 {
            return Err(PromptError::Closed {
                prompt: prompt.to_string(),
            });
        }
        Ok(line)
    }

    fn write_line(&mut self, prompt: &str, text: std::fmt::Arguments<'_>) -> Result<(), PromptError> {
        self.writer
            .write_fmt(text)
            .map_err(|source| PromptError::Io {
                prompt: prompt.to_string(),
                source,
            })
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask_string(&mut self, prompt: &str, default: &str) -> Result<String, PromptError> {
        if default.is_empty() {
            self.write_line(prompt, format_args!("? {}: ", prompt))?;
        } else {
            self.write_line(prompt, format_args!("? {} [{}]: ", prompt, default))?;
        }
        let answer = self.read_answer(prompt)?;
        Ok(parse_string(&answer, default))
    }

    fn ask_choice(
        &mut self,
        prompt: &str,
        options: &[&str],
        default: &str,
    ) -> Result<String, PromptError> {
        self.write_line(prompt, format_args!("? {}\n", prompt))?;
        for (i, option) in options.iter().enumerate() {
            let marker = if *option == default { '>' } else { ' ' };
            self.write_line(prompt, format_args!("  {} {}) {}\n", marker, i + 1, option))?;
        }
        self.write_line(
            prompt,
            format_args!("Select [1-{}] (default: {}): ", options.len(), default),
        )?;
        let answer = self.read_answer(prompt)?;
        parse_choice(prompt, &answer, options, default)
    }

    fn ask_int(&mut self, prompt: &str, default: i64) -> Result<i64, PromptError> {
        self.write_line(prompt, format_args!("? {} [{}]: ", prompt, default))?;
        let answer = self.read_answer(prompt)?;
        parse_int(prompt, &answer, default)
    }

    fn ask_confirm(&mut self, prompt: &str, default: bool) -> Result<bool, PromptError> {
        let hint = if default { "Y/n" } else { "y/N" };
        self.write_line(prompt, format_args!("? {} [{}]: ", prompt, hint))?;
        let answer = self.read_answer(prompt)?;
        parse_confirm(prompt, &answer, default)
    }
}
