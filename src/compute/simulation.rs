//! Simulation driver - composes the grid and the ant.

use std::fmt;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::{AntError, Result};
use crate::schema::{PatternGrid, SimulationConfig};
use crate::universe;

use super::{Ant, Grid, Heading};

/// Langton's Ant simulation.
///
/// Owns exactly one grid and one ant. Every operation runs to completion and
/// leaves neighbor counts consistent with cell state; failed operations leave
/// the simulation untouched.
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    ant: Ant,
    /// Steps since the last clear, resize or load.
    generation: u64,
}

/// Where an imported pattern landed on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternPlacement {
    /// Top row of the footprint.
    pub row: usize,
    /// Left column of the footprint.
    pub col: usize,
    /// Footprint height.
    pub rows: usize,
    /// Footprint width.
    pub cols: usize,
}

impl Simulation {
    /// Empty `grid_size x grid_size` simulation with a centered ant.
    pub fn new(grid_size: usize) -> Result<Self> {
        let grid = Grid::new(grid_size)?;
        Ok(Self {
            ant: Ant::centered(grid_size),
            grid,
            generation: 0,
        })
    }

    /// Create a simulation from validated configuration.
    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.grid_size)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn ant(&self) -> &Ant {
        &self.ant
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance one step: exactly one cell flips.
    pub fn step(&mut self) {
        self.ant.step(&mut self.grid);
        self.grid.recompute_neighbor_counts();
        self.generation += 1;
    }

    /// Advance `steps` steps.
    pub fn run(&mut self, steps: u64) {
        for _ in 0..steps {
            self.step();
        }
    }

    /// Kill every cell and put a fresh ant in the middle.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.reset_ant();
        log::debug!("Cleared {0}x{0} grid", self.grid.size());
    }

    /// Change the grid size. All cells are lost.
    pub fn resize(&mut self, grid_size: usize) -> Result<()> {
        self.grid.resize(grid_size)?;
        self.reset_ant();
        log::debug!("Resized grid to {0}x{0}", grid_size);
        Ok(())
    }

    /// Apply new configuration, resizing the grid.
    pub fn reconfigure(&mut self, config: &SimulationConfig) -> Result<()> {
        config.validate()?;
        self.resize(config.grid_size)
    }

    /// Flip one cell by hand.
    pub fn toggle_cell_at(&mut self, row: usize, col: usize) -> Result<()> {
        self.grid.toggle_cell(row, col)
    }

    /// Parse pattern text and overlay it centered on the grid.
    ///
    /// The grid is never resized and the ant is not touched.
    pub fn import_pattern(&mut self, text: &str) -> Result<PatternPlacement> {
        let pattern = PatternGrid::parse(text)?;
        self.place_pattern(&pattern)
    }

    /// Read a pattern file and overlay it centered on the grid.
    pub fn import_pattern_file<P: AsRef<Path>>(&mut self, path: P) -> Result<PatternPlacement> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let placement = self.import_pattern(&text)?;
        log::info!(
            "Imported {}x{} pattern from {}",
            placement.rows,
            placement.cols,
            path.display()
        );
        Ok(placement)
    }

    /// Overlay a parsed pattern centered on the grid.
    pub fn place_pattern(&mut self, pattern: &PatternGrid) -> Result<PatternPlacement> {
        let size = self.grid.size();
        let (rows, cols) = (pattern.rows(), pattern.cols());
        if rows > size || cols > size {
            return Err(AntError::PatternOutOfBounds { rows, cols, size });
        }

        let placement = PatternPlacement {
            row: (size - rows) / 2,
            col: (size - cols) / 2,
            rows,
            cols,
        };

        for r in 0..rows {
            for c in 0..cols {
                self.grid
                    .set_raw(placement.row + r, placement.col + c, pattern.is_alive(r, c));
            }
        }
        self.grid.recompute_neighbor_counts();
        Ok(placement)
    }

    /// Write the grid in the universe format.
    pub fn save_universe<W: Write>(&self, w: &mut W) -> Result<()> {
        universe::write_universe(&self.grid, w)
    }

    /// Replace the grid with a universe read from `r`.
    ///
    /// The ant is re-centered and the generation reset.
    pub fn load_universe<R: Read>(&mut self, r: &mut R) -> Result<()> {
        let grid = universe::read_universe(r)?;
        self.replace_grid(grid);
        Ok(())
    }

    /// Save the grid to a universe file.
    pub fn save_universe_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        universe::save_universe(path, &self.grid)
    }

    /// Load the grid from a universe file.
    pub fn load_universe_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let grid = universe::load_universe(path)?;
        self.replace_grid(grid);
        Ok(())
    }

    /// Snapshot for HUD or debug display.
    pub fn stats(&self) -> SimulationStats {
        SimulationStats::from_simulation(self)
    }

    fn replace_grid(&mut self, grid: Grid) {
        self.grid = grid;
        self.reset_ant();
        log::debug!("Replaced grid with {0}x{0} universe", self.grid.size());
    }

    fn reset_ant(&mut self) {
        self.ant = Ant::centered(self.grid.size());
        self.generation = 0;
    }
}

/// Read-only summary of a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimulationStats {
    pub generation: u64,
    pub grid_size: usize,
    pub living_cells: usize,
    pub ant_row: usize,
    pub ant_col: usize,
    pub heading: Heading,
}

impl SimulationStats {
    pub fn from_simulation(sim: &Simulation) -> Self {
        let (ant_row, ant_col) = sim.ant.position();
        Self {
            generation: sim.generation,
            grid_size: sim.grid.size(),
            living_cells: sim.grid.living_cells(),
            ant_row,
            ant_col,
            heading: sim.ant.heading(),
        }
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generation: {}, living: {}/{}, ant: ({}, {}) facing {:?}",
            self.generation,
            self.living_cells,
            self.grid_size * self.grid_size,
            self.ant_row,
            self.ant_col,
            self.heading
        )
    }
}
