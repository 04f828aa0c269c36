pub mod chromosome;
pub mod operators;
pub mod score_cache;
pub mod population;
pub mod evolution_engine;
pub mod progress;

pub use chromosome::{Chromosome, ChromosomeSpec};
pub use operators::{crossover_at, MutationBound};
pub use score_cache::ScoreCache;
pub use population::{Population, ELITE_COUNT};
pub use evolution_engine::{EvolutionEngine, ProgressCallback};
pub use progress::{ConsoleProgressCallback, ScoreHistory};
