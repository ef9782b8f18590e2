//! Configuration types for the simulation core and its host.

use serde::{Deserialize, Serialize};

/// Default grid side length in cells.
pub const DEFAULT_GRID_SIZE: usize = 15;

/// Largest accepted grid side length in cells.
pub const MAX_GRID_SIZE: usize = 4096;

/// Default delay between timer-driven steps.
pub const DEFAULT_STEP_INTERVAL_MS: u64 = 50;

/// Core simulation parameters.
///
/// This is the only configuration the simulation itself consumes. The step
/// interval is carried for the host's scheduler; the core has no timing logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Grid side length in cells (the grid is `grid_size x grid_size`).
    pub grid_size: usize,
    /// Milliseconds between steps when the host animates the simulation.
    pub step_interval_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            step_interval_ms: DEFAULT_STEP_INTERVAL_MS,
        }
    }
}

impl SimulationConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::InvalidGridSize);
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridSizeTooLarge {
                size: self.grid_size,
                max: MAX_GRID_SIZE,
            });
        }
        if self.step_interval_ms == 0 {
            return Err(ConfigError::InvalidStepInterval);
        }
        Ok(())
    }
}

/// RGBA color as four 8-bit channels.
pub type Rgba = [u8; 4];

/// Rendering preferences.
///
/// Passed through untouched by the core; only a renderer reads these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Color of living cells.
    pub living_color: Rgba,
    /// Color of dead cells.
    pub dead_color: Rgba,
    /// Show the heads-up display (generation, ant position, living count).
    pub show_hud: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            living_color: [128, 128, 128, 255],
            dead_color: [255, 255, 255, 255],
            show_hud: false,
        }
    }
}

/// Everything the host persists between sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Parameters handed to the simulation core.
    pub simulation: SimulationConfig,
    /// Parameters only the renderer cares about.
    pub render: RenderSettings,
}

impl AppSettings {
    /// Restore every setting to its default value.
    pub fn reset_to_defaults(&mut self) {
        *self = Self::default();
    }

    /// Validate the settings that reach the core.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.simulation.validate()
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid size must be non-zero")]
    InvalidGridSize,
    #[error("Grid size {size} exceeds the maximum of {max}")]
    GridSizeTooLarge { size: usize, max: usize },
    #[error("Step interval must be positive")]
    InvalidStepInterval,
}
