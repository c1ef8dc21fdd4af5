use thiserror::Error;

/// Longest line the dimension prompts accept.
pub const MAX_INPUT_LENGTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a whole number.")]
    Empty,
    #[error("'{0}' is not a whole number.")]
    NotANumber(String),
}

/// Parses a signed integer. Values below 1 are let through so the maze
/// builder can reject them with its own error.
pub fn parse_dimension(input: &str) -> Result<i64, InputError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))
}
