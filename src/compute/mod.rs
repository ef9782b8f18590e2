//! Compute module - Grid state and the ant's transition rule.

mod ant;
mod grid;
mod simulation;

pub use ant::*;
pub use grid::*;
pub use simulation::*;
