//! Simulation configuration loaded from the process environment.

use std::env;
use std::path::PathBuf;

use warehouse_core::{GridDimensions, Position};

/// Parameters for one simulation run, read once at startup.
#[derive(Clone, Debug)]
pub struct SimConfig {
    pub grid: GridDimensions,
    pub start: Position,
    pub input_file: PathBuf,
}

impl SimConfig {
    pub const DEFAULT_GRID_WIDTH: u32 = 10;
    pub const DEFAULT_GRID_HEIGHT: u32 = 10;
    pub const DEFAULT_INPUT_FILE: &'static str = "input-directions.txt";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GRID_WIDTH` / `GRID_HEIGHT` - Grid dimensions (default: 10x10)
    /// - `START_X` / `START_Y` - Starting position (default: origin)
    /// - `INPUT_FILE` - Default command file path (default: input-directions.txt)
    ///
    /// Unset or malformed values fall back to the defaults.
    pub fn from_env() -> Self {
        let width = read_env::<u32>("GRID_WIDTH").unwrap_or(Self::DEFAULT_GRID_WIDTH);
        let height = read_env::<u32>("GRID_HEIGHT").unwrap_or(Self::DEFAULT_GRID_HEIGHT);
        let x = read_env::<i32>("START_X").unwrap_or(0);
        let y = read_env::<i32>("START_Y").unwrap_or(0);
        let input_file = env::var("INPUT_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(Self::DEFAULT_INPUT_FILE));

        Self {
            grid: GridDimensions::new(width.max(1), height.max(1)),
            start: Position::new(x, y),
            input_file,
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid: GridDimensions::new(Self::DEFAULT_GRID_WIDTH, Self::DEFAULT_GRID_HEIGHT),
            start: Position::ORIGIN,
            input_file: PathBuf::from(Self::DEFAULT_INPUT_FILE),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
