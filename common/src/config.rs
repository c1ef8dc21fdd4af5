use std::{env, str::FromStr};

use thiserror::Error;

pub const DEFAULT_CELL_SIZE: u32 = 20;
pub const DEFAULT_TITLE: &str = "Maze";

pub const WIDTH_VAR: &str = "MAZE_WIDTH";
pub const HEIGHT_VAR: &str = "MAZE_HEIGHT";
pub const SEED_VAR: &str = "MAZE_SEED";
pub const CELL_SIZE_VAR: &str = "MAZE_CELL_SIZE";
pub const TITLE_VAR: &str = "MAZE_TITLE";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{name} must be {expected}, got '{value}'")]
pub struct ConfigError {
    pub name: &'static str,
    pub value: String,
    pub expected: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Preset dimensions skip the matching prompt. They are not range-checked
    /// here; the maze builder rejects values below 1.
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub seed: Option<u64>,
    pub cell_size: u32,
    pub title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            seed: None,
            cell_size: DEFAULT_CELL_SIZE,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl Settings {
    /// Reads an optional `.env` from the working directory, then the process
    /// environment. Variables already set in the environment win.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let width = parse_var(&lookup, WIDTH_VAR, "a whole number")?;
        let height = parse_var(&lookup, HEIGHT_VAR, "a whole number")?;
        let seed = parse_var(&lookup, SEED_VAR, "an unsigned 64-bit integer")?;

        let cell_size = match parse_var::<u32, _>(&lookup, CELL_SIZE_VAR, "a positive integer")? {
            Some(0) => {
                return Err(ConfigError {
                    name: CELL_SIZE_VAR,
                    value: "0".to_string(),
                    expected: "a positive integer",
                });
            }
            Some(size) => size,
            None => defaults.cell_size,
        };

        let title = lookup(TITLE_VAR)
            .map(|title| title.trim().to_string())
            .filter(|title| !title.is_empty())
            .unwrap_or(defaults.title);

        Ok(Self {
            width,
            height,
            seed,
            cell_size,
            title,
        })
    }
}

// Unset and blank variables both count as absent.
fn parse_var<T, F>(
    lookup: &F,
    name: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name) else {
        return Ok(None);
    };

    let value = raw.trim().trim_matches('"').trim_matches('\'');
    if value.is_empty() {
        return Ok(None);
    }

    value.parse().map(Some).map_err(|_| ConfigError {
        name,
        value: value.to_string(),
        expected,
    })
}
