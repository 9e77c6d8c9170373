//! Line-oriented user prompts
//!
//! All interactive input goes through the [`Prompter`] trait so that the
//! setup wizard and `add-repo` can be driven by a terminal, by piped stdin,
//! or by a scripted answer list in tests.

use anyhow::{Result, anyhow};
use dialoguer::Input;
use std::collections::VecDeque;
use std::io::{BufRead, IsTerminal, Write};

/// Source of answers to free-text questions
pub trait Prompter {
    /// Ask a question and return the answer with surrounding whitespace removed
    fn ask(&mut self, question: &str) -> Result<String>;
}

/// Create the prompter for the current process
///
/// Uses dialoguer when stdin is a terminal and falls back to reading plain
/// lines otherwise, so answers can be piped in.
pub fn create_prompter() -> Box<dyn Prompter> {
    if std::io::stdin().is_terminal() && console::user_attended() {
        Box::new(TerminalPrompter)
    } else {
        Box::new(LinePrompter::new(
            std::io::BufReader::new(std::io::stdin()),
            std::io::stdout(),
        ))
    }
}

/// Interactive prompter backed by dialoguer
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, question: &str) -> Result<String> {
        let answer: String = Input::new()
            .with_prompt(question.trim_end())
            .allow_empty(true)
            .interact_text()?;
        Ok(answer.trim().to_string())
    }
}

/// Prompter that writes the question and reads one line of input
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            writeln!(self.output)?;
        }
        Ok(line.trim().to_string())
    }
}

/// Prompter that replays pre-recorded answers
///
/// Every question asked is recorded so tests can assert on the conversation.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    questions: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            questions: Vec::new(),
        }
    }

    /// Questions asked so far
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// Answers not yet consumed
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &str) -> Result<String> {
        self.questions.push(question.to_string());
        self.answers
            .pop_front()
            .map(|answer| answer.trim().to_string())
            .ok_or_else(|| anyhow!("No scripted answer for question: {question}"))
    }
}
