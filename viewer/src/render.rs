use log::info;
use macroquad::prelude::*;

use common::maze::{Maze, Tile};

pub const PASSAGE_COLOR: Color = BLACK;
pub const WALL_COLOR: Color = WHITE;

pub fn tile_color(tile: Tile) -> Color {
    match tile {
        Tile::Passage => PASSAGE_COLOR,
        Tile::Wall => WALL_COLOR,
    }
}

/// Window size in pixels, clamped to what the windowing layer accepts.
pub fn window_size(width: usize, height: usize, cell_size: u32) -> (i32, i32) {
    let scale = |cells: usize| {
        let pixels = cells.saturating_mul(cell_size as usize);
        i32::try_from(pixels).unwrap_or(i32::MAX)
    };
    (scale(width), scale(height))
}

pub struct Renderer {
    maze: Maze,
    cell_size: u32,
    title: String,
}

impl Renderer {
    pub fn new(maze: Maze, cell_size: u32, title: impl Into<String>) -> Self {
        Self {
            maze,
            cell_size,
            title: title.into(),
        }
    }

    pub fn window_conf(&self) -> Conf {
        let (window_width, window_height) =
            window_size(self.maze.width(), self.maze.height(), self.cell_size);

        Conf {
            window_title: self.title.clone(),
            window_width,
            window_height,
            window_resizable: false,
            ..Default::default()
        }
    }

    /// Opens the window and blocks until it is closed or Escape is pressed.
    pub fn show(self) {
        let conf = self.window_conf();
        info!(
            "opening {}x{} window '{}'",
            conf.window_width, conf.window_height, conf.window_title
        );
        macroquad::Window::from_config(conf, self.run());
    }

    async fn run(self) {
        // Handle the close button ourselves so the loop can return normally.
        prevent_quit();

        loop {
            if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
                break;
            }

            clear_background(PASSAGE_COLOR);
            self.draw();

            next_frame().await;
        }

        info!("window closed");
    }

    fn draw(&self) {
        let size = self.cell_size as f32;

        for (y, row) in self.maze.grid.iter().enumerate() {
            for (x, &tile) in row.iter().enumerate() {
                draw_rectangle(x as f32 * size, y as f32 * size, size, size, tile_color(tile));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passages_are_black_and_walls_white() {
        assert_eq!(tile_color(Tile::Passage), BLACK);
        assert_eq!(tile_color(Tile::Wall), WHITE);
    }

    #[test]
    fn window_is_grid_times_cell_size() {
        assert_eq!(window_size(31, 21, 20), (620, 420));
        assert_eq!(window_size(1, 1, 20), (20, 20));
    }

    #[test]
    fn oversized_window_is_clamped() {
        assert_eq!(window_size(usize::MAX, 3, 20), (i32::MAX, 60));
    }

    #[test]
    fn window_conf_uses_title_and_maze_size() {
        let maze = Maze::generate(5, 3, Some(0)).unwrap();
        let renderer = Renderer::new(maze, 12, "Test maze");
        let conf = renderer.window_conf();

        assert_eq!(conf.window_title, "Test maze");
        assert_eq!(conf.window_width, 60);
        assert_eq!(conf.window_height, 36);
        assert!(!conf.window_resizable);
    }
}
