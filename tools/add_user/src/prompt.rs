//! Terminal prompting

use std::io;

use dialoguer::{Input, Password};

/// Source of operator answers
pub trait Prompter {
    /// Ask for a line of visible text
    fn input(&mut self, prompt: &str) -> io::Result<String>;

    /// Ask for a secret without echoing it
    fn password(&mut self, prompt: &str) -> io::Result<String>;
}

/// Prompter backed by the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn input(&mut self, prompt: &str) -> io::Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(io::Error::other)
    }

    fn password(&mut self, prompt: &str) -> io::Result<String> {
        Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .map_err(io::Error::other)
    }
}
