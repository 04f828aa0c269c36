use super::traits::ConfigSection;
use crate::engines::evaluation::CostFunction;
use crate::error::PolyevoError;
use serde::{Deserialize, Serialize};

/// Two elites plus the two slots their offspring overwrite.
pub const MIN_POPULATION_SIZE: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    pub population_size: usize,
    pub max_degree: usize,
    pub cost_function: CostFunction,
    pub mutation_probability: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            max_degree: 3,
            cost_function: CostFunction::SquaredError,
            mutation_probability: 0.10,
            seed: None,
        }
    }
}

impl ConfigSection for PopulationConfig {
    fn section_name() -> &'static str {
        "population"
    }

    fn validate(&self) -> Result<(), PolyevoError> {
        if self.population_size < MIN_POPULATION_SIZE {
            return Err(PolyevoError::Configuration(format!(
                "Population size must be at least {}",
                MIN_POPULATION_SIZE
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(PolyevoError::Configuration(
                "Mutation probability must be between 0 and 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Defaults to the squared sample count when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generations: Option<usize>,
}

impl RunConfig {
    pub fn generations_for(&self, sample_count: usize) -> usize {
        self.generations.unwrap_or(sample_count * sample_count)
    }
}

impl ConfigSection for RunConfig {
    fn section_name() -> &'static str {
        "run"
    }

    fn validate(&self) -> Result<(), PolyevoError> {
        Ok(())
    }
}
