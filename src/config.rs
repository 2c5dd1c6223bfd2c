//! The only knobs the sandbox has: how big the window is and how big a cell is.

use std::fmt;

use bevy::ecs::system::Resource;

use crate::physics::fallingsand::util::vectors::RowColVector;

/// Window and cell dimensions, in logical pixels
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SandboxConfig {
    window_width: u32,
    window_height: u32,
    cell_size: u32,
    /// Fixed seed for the simulation, only used by tests
    seed: Option<u64>,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            cell_size: 10,
            seed: None,
        }
    }
}

impl SandboxConfig {
    pub fn get_window_width(&self) -> u32 {
        self.window_width
    }
    pub fn get_window_height(&self) -> u32 {
        self.window_height
    }
    pub fn get_cell_size(&self) -> u32 {
        self.cell_size
    }
    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }
    /// Number of rows in the grid
    pub fn rows(&self) -> usize {
        (self.window_height / self.cell_size) as usize
    }
    /// Number of columns in the grid
    pub fn cols(&self) -> usize {
        (self.window_width / self.cell_size) as usize
    }

    /// Converts a cursor position, origin at the top left of the window, into a cell
    /// Returns None if the cursor is outside the grid
    pub fn cursor_to_cell(&self, x: f32, y: f32) -> Option<RowColVector> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let cell = RowColVector {
            row: (y / self.cell_size as f32) as usize,
            col: (x / self.cell_size as f32) as usize,
        };
        if cell.row >= self.rows() || cell.col >= self.cols() {
            return None;
        }
        Some(cell)
    }
}

/// Why a config could not be built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SandboxConfigError {
    ZeroCellSize,
    WindowSmallerThanCell { window: (u32, u32), cell_size: u32 },
    WindowNotMultipleOfCell { window: (u32, u32), cell_size: u32 },
}

impl fmt::Display for SandboxConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SandboxConfigError::ZeroCellSize => write!(f, "cell size must be at least 1 pixel"),
            SandboxConfigError::WindowSmallerThanCell { window, cell_size } => write!(
                f,
                "window {}x{} cannot fit a single {}px cell",
                window.0, window.1, cell_size
            ),
            SandboxConfigError::WindowNotMultipleOfCell { window, cell_size } => write!(
                f,
                "window {}x{} is not a multiple of the {}px cell size",
                window.0, window.1, cell_size
            ),
        }
    }
}

impl std::error::Error for SandboxConfigError {}

pub struct SandboxConfigBuilder {
    window_width: u32,
    window_height: u32,
    cell_size: u32,
    seed: Option<u64>,
}

impl Default for SandboxConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SandboxConfigBuilder {
    pub fn new() -> Self {
        let defaults = SandboxConfig::default();
        Self {
            window_width: defaults.window_width,
            window_height: defaults.window_height,
            cell_size: defaults.cell_size,
            seed: defaults.seed,
        }
    }

    pub fn window_size(mut self, width: u32, height: u32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    pub fn cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(&self) -> Result<SandboxConfig, SandboxConfigError> {
        let window = (self.window_width, self.window_height);
        if self.cell_size == 0 {
            return Err(SandboxConfigError::ZeroCellSize);
        }
        if self.window_width < self.cell_size || self.window_height < self.cell_size {
            return Err(SandboxConfigError::WindowSmallerThanCell {
                window,
                cell_size: self.cell_size,
            });
        }
        if self.window_width % self.cell_size != 0 || self.window_height % self.cell_size != 0 {
            return Err(SandboxConfigError::WindowNotMultipleOfCell {
                window,
                cell_size: self.cell_size,
            });
        }
        Ok(SandboxConfig {
            window_width: self.window_width,
            window_height: self.window_height,
            cell_size: self.cell_size,
            seed: self.seed,
        })
    }
}
