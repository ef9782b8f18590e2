//! Langton's Ant - a single ant walking a toroidal grid of binary cells.
//!
//! On a dead cell the ant turns right, brings the cell to life and steps
//! forward; on a living cell it turns left, kills the cell and steps forward.
//! Movement wraps around the grid edges. Each cell also carries a derived
//! count of its living Moore neighbors, kept in sync after every change.
//!
//! # Architecture
//!
//! - `schema`: Configuration and text pattern types
//! - `compute`: Grid, ant and the simulation driver
//! - `universe`: Binary save/load of complete grids
//!
//! Timing, rendering and settings persistence belong to the host; the core
//! is synchronous and never blocks.
//!
//! # Example
//!
//! ```rust
//! use langtons_ant::{Simulation, SimulationConfig};
//!
//! let mut sim = Simulation::from_config(&SimulationConfig::default()).unwrap();
//! sim.import_pattern("X.X\n.X.\nX.X").unwrap();
//! sim.run(100);
//!
//! println!("{}", sim.stats());
//! print!("{}", sim.grid());
//! ```

pub mod compute;
pub mod error;
pub mod schema;
pub mod universe;

// Re-export commonly used types
pub use compute::{Ant, Grid, Heading, PatternPlacement, Simulation, SimulationStats};
pub use error::{AntError, Result};
pub use schema::{AppSettings, PatternGrid, RenderSettings, SimulationConfig};
