pub mod traits;
pub mod evolution;
pub mod samples;
pub mod render;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use evolution::{PopulationConfig, RunConfig, MIN_POPULATION_SIZE};
pub use samples::SampleConfig;
pub use render::RenderConfig;
pub use traits::ConfigSection;
