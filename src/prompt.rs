// src/prompt.rs
// =============================================================================
// Yes/no questions for the user.
//
// Two places ask for confirmation before carrying on:
// - the Bookmarks file has a version we weren't built for
// - link checking has to fall back to the slow one-at-a-time path
//
// The Confirm trait lets tests answer these questions without a terminal.
// =============================================================================

use anyhow::{Context, Result};
use std::io::{BufRead, BufReader, Stdin, Stdout, Write};

pub trait Confirm {
    /// Asks a yes/no question; true means "go ahead"
    fn confirm(&mut self, question: &str) -> Result<bool>;
}

/// Asks on an output stream and reads the answer from an input stream
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Terminal::new(BufReader::new(std::io::stdin()), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Terminal { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for Terminal<R, W> {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut answer = String::new();
        // 0 bytes read = end of input, which counts as "no"
        self.input
            .read_line(&mut answer)
            .context("failed to read answer")?;

        Ok(is_yes(&answer))
    }
}

/// Answers yes to everything (the --yes flag)
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        println!("{}y", question);
        Ok(true)
    }
}

// Only an explicit "y" or "yes" counts, an empty answer is a "no"
fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

// Canned answers for tests, handed out in order
#[cfg(test)]
pub struct Scripted {
    answers: std::collections::VecDeque<bool>,
    pub asked: Vec<String>,
}

#[cfg(test)]
impl Scripted {
    pub fn new(answers: &[bool]) -> Self {
        Scripted {
            answers: answers.iter().copied().collect(),
            asked: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Confirm for Scripted {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        self.asked.push(question.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("unexpected question: {}", question))
    }
}
