//! Schema module - Configuration and pattern types for Langton's Ant simulations.

mod config;
mod pattern;

pub use config::*;
pub use pattern::*;
