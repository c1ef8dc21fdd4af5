use log::{debug, warn};

use crate::{
    input::{self, MAX_INPUT_LENGTH},
    ui::{Prompt, UiInputError},
};
use common::{config::Settings, maze::Maze};

pub const WIDTH_PROMPT: &str = "maze - width:";
pub const HEIGHT_PROMPT: &str = "maze - height:";

/// Prompts until the line parses as an integer.
pub fn read_dimension(ui: &mut dyn Prompt, prompt: &str) -> Result<i64, UiInputError> {
    loop {
        ui.show_prompt(prompt);

        let line = loop {
            if let Some(line) = ui.poll_input(MAX_INPUT_LENGTH)? {
                break line;
            }
        };

        match input::parse_dimension(&line) {
            Ok(value) => return Ok(value),
            Err(e) => {
                warn!("rejected dimension input {:?}: {}", line, e);
                ui.show_error(&e.to_string());
            }
        }
    }
}

/// Generates the maze from the preset dimensions alone, without a terminal.
/// Returns `None` when a preset is missing or the pair is rejected, in which
/// case the caller falls back to [`build_maze`].
pub fn preset_maze(settings: &Settings) -> Option<Maze> {
    let (width, height) = (settings.width?, settings.height?);
    let maze = Maze::generate(width, height, settings.seed).ok()?;
    debug!("using preset {}x{} dimensions", width, height);
    Some(maze)
}

/// Uses the preset dimensions from `settings` on the first attempt and asks
/// for the rest. If the maze builder rejects the pair, both are asked for
/// again.
pub fn build_maze(ui: &mut dyn Prompt, settings: &Settings) -> Result<Maze, UiInputError> {
    let mut preset_width = settings.width;
    let mut preset_height = settings.height;

    loop {
        let width = match preset_width.take() {
            Some(width) => width,
            None => read_dimension(ui, WIDTH_PROMPT)?,
        };
        let height = match preset_height.take() {
            Some(height) => height,
            None => read_dimension(ui, HEIGHT_PROMPT)?,
        };

        match Maze::generate(width, height, settings.seed) {
            Ok(maze) => {
                debug!("accepted {}x{} dimensions", width, height);
                return Ok(maze);
            }
            Err(e) => {
                warn!("rejected dimensions: {}", e);
                ui.show_error(&format!("Invalid dimensions: {}.", e));
            }
        }
    }
}
