pub mod cost;
pub mod samples;

pub use cost::{CostFn, CostFunction};
pub use samples::SampleSet;
