use std::collections::VecDeque;

use crate::ui::{Prompt, UiInputError};

#[derive(Default)]
pub struct MockUi {
    pub messages: Vec<String>,
    pub errors: Vec<String>,
    pub prompts: Vec<String>,
    pub inputs: VecDeque<Result<Option<String>, UiInputError>>,
}

impl MockUi {
    /// Each string is one submitted line. Once the queue runs dry the mock
    /// reports a disconnect, so a prompt loop can never spin forever in a test.
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: lines.into_iter().map(|line| Ok(Some(line.into()))).collect(),
            ..Default::default()
        }
    }
}

impl Prompt for MockUi {
    fn show_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn show_prompt(&mut self, prompt: &str) {
        self.prompts.push(prompt.to_string());
    }

    fn poll_input(&mut self, limit: usize) -> Result<Option<String>, UiInputError> {
        self.inputs
            .pop_front()
            .unwrap_or(Err(UiInputError::Disconnected))
            .map(|line| line.map(|s| s.chars().take(limit).collect()))
    }
}
