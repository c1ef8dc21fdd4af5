use std::process;

use log::{debug, error, info};

use common::config::Settings;
use viewer::{
    dimensions,
    render::Renderer,
    ui::{Prompt, TerminalUi},
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            error!("invalid configuration: {}", e);
            process::exit(1);
        }
    };

    // The terminal is only needed when something has to be asked for.
    let maze = match dimensions::preset_maze(&settings) {
        Some(maze) => maze,
        None => {
            let mut ui = match TerminalUi::new() {
                Ok(ui) => ui,
                Err(e) => {
                    error!("failed to initialize terminal: {}", e);
                    process::exit(1);
                }
            };

            match dimensions::build_maze(&mut ui, &settings) {
                Ok(maze) => maze,
                Err(e) => {
                    ui.show_message(&format!("Maze generation cancelled: {}.", e));
                    return;
                }
            }
        }
    };

    info!(
        "generated {}x{} maze with {} passage cells (seed: {:?})",
        maze.width(),
        maze.height(),
        maze.passages.len(),
        settings.seed
    );
    debug!("\n{}", maze);

    Renderer::new(maze, settings.cell_size, settings.title).show();
}
