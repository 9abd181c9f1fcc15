//! # Prompt Primitives
//!
//! Every interactive question rit asks goes through the [`Prompter`] trait.
//! Command handlers and the credential workflow only depend on the
//! input/output contract of each primitive, so the terminal widgets can be
//! swapped for a scripted implementation when no user is present.
//!
//! - [`TerminalPrompter`] renders the questions with `dialoguer`.
//! - [`ScriptedPrompter`] replays a queue of prepared answers and records the
//!   questions it was asked.

use std::collections::VecDeque;

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password, Select};

use crate::error::{Error, Result};

/// The prompt primitives used by rit commands.
///
/// Each method blocks until a value is available and returns
/// [`Error::Input`] when the user cancels or input cannot be read.
pub trait Prompter {
    /// Single-line text. When `required` is set, blank answers are refused.
    fn text(&mut self, prompt: &str, required: bool) -> Result<String>;

    /// An http(s) URL, pre-filled with `default` when it is not empty.
    fn url(&mut self, prompt: &str, default: &str) -> Result<String>;

    /// A whole number.
    fn int(&mut self, prompt: &str) -> Result<i64>;

    /// Single selection from `items`, returning the chosen index.
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize>;

    /// A yes/no question.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;

    /// Masked input. The value is never echoed.
    fn password(&mut self, prompt: &str) -> Result<String>;
}

/// Check that `input` is an absolute http or https URL.
pub fn validate_url(input: &str) -> std::result::Result<(), String> {
    let parsed = url::Url::parse(input.trim()).map_err(|e| format!("invalid URL: {}", e))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("unsupported scheme '{}', use http or https", other)),
    }
}

/// [`Prompter`] backed by `dialoguer` terminal widgets.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn text(&mut self, prompt: &str, required: bool) -> Result<String> {
        let value: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(!required)
            .validate_with(move |input: &String| -> std::result::Result<(), &'static str> {
                if required && input.trim().is_empty() {
                    Err("a value is required")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;
        Ok(value.trim().to_string())
    }

    fn url(&mut self, prompt: &str, default: &str) -> Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme).with_prompt(prompt);
        if !default.is_empty() {
            input = input.default(default.to_string());
        }
        let value = input
            .validate_with(|input: &String| validate_url(input))
            .interact_text()?;
        Ok(value.trim().to_string())
    }

    fn int(&mut self, prompt: &str) -> Result<i64> {
        let value: i64 = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact_text()?;
        Ok(value)
    }

    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize> {
        let index = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?;
        Ok(index)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(answer)
    }

    fn password(&mut self, prompt: &str) -> Result<String> {
        let value = Password::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact()?;
        Ok(value)
    }
}

/// A prepared answer for [`ScriptedPrompter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Answers `text`, `url` and `password`.
    Text(String),
    /// Answers `int`.
    Int(i64),
    /// Answers `select` with an index.
    Select(usize),
    /// Answers `select` with the label of an item.
    Choose(String),
    /// Answers `confirm`.
    Confirm(bool),
    /// Makes the next prompt fail, as if the user cancelled.
    Fail(String),
}

impl Answer {
    pub fn text(value: impl Into<String>) -> Self {
        Answer::Text(value.into())
    }

    pub fn choose(label: impl Into<String>) -> Self {
        Answer::Choose(label.into())
    }
}

/// [`Prompter`] that replays queued answers in order.
///
/// Running out of answers behaves like end of input. Every prompt text that
/// was asked is recorded in [`ScriptedPrompter::asked`].
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// The prompts asked so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Number of answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, prompt: &str) -> Result<Answer> {
        self.asked.push(prompt.to_string());
        match self.answers.pop_front() {
            Some(Answer::Fail(message)) => Err(Error::Input { message }),
            Some(answer) => Ok(answer),
            None => Err(Error::Input {
                message: format!("no answer available for '{}'", prompt),
            }),
        }
    }

    fn next_text(&mut self, prompt: &str) -> Result<String> {
        match self.next(prompt)? {
            Answer::Text(value) => Ok(value),
            other => Err(unexpected(prompt, &other)),
        }
    }
}

fn unexpected(prompt: &str, answer: &Answer) -> Error {
    Error::Input {
        message: format!("unexpected answer {:?} for '{}'", answer, prompt),
    }
}

impl Prompter for ScriptedPrompter {
    fn text(&mut self, prompt: &str, required: bool) -> Result<String> {
        let value = self.next_text(prompt)?;
        if required && value.trim().is_empty() {
            return Err(Error::Input {
                message: format!("a value is required for '{}'", prompt),
            });
        }
        Ok(value.trim().to_string())
    }

    fn url(&mut self, prompt: &str, default: &str) -> Result<String> {
        let value = self.next_text(prompt)?;
        let value = if value.is_empty() { default.to_string() } else { value };
        validate_url(&value).map_err(|message| Error::Input { message })?;
        Ok(value)
    }

    fn int(&mut self, prompt: &str) -> Result<i64> {
        match self.next(prompt)? {
            Answer::Int(value) => Ok(value),
            other => Err(unexpected(prompt, &other)),
        }
    }

    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize> {
        match self.next(prompt)? {
            Answer::Select(index) if index < items.len() => Ok(index),
            Answer::Choose(label) => items
                .iter()
                .position(|item| *item == label)
                .ok_or_else(|| Error::Input {
                    message: format!("'{}' is not one of {:?}", label, items),
                }),
            other => Err(unexpected(prompt, &other)),
        }
    }

    fn confirm(&mut self, prompt: &str, _default: bool) -> Result<bool> {
        match self.next(prompt)? {
            Answer::Confirm(value) => Ok(value),
            other => Err(unexpected(prompt, &other)),
        }
    }

    fn password(&mut self, prompt: &str) -> Result<String> {
        self.next_text(prompt)
    }
}
