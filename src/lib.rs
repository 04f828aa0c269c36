//! Evolve integer-coefficient polynomials to fit sample data with a
//! generational genetic algorithm.

pub mod config;
pub mod engines;
pub mod error;
pub mod render;
pub mod types;

pub use error::{PolyevoError, Result};
