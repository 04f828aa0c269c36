use crate::engines::generation::{chromosome::Chromosome, population::Population};
use crate::error::Result;
use crate::render::Recorder;
use crate::types::RunSummary;
use rand::rngs::StdRng;
use rand::Rng;

pub trait ProgressCallback {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, generation: usize, best_score: f64, best_fit: &Chromosome);
}

/// Drives a population through a fixed number of generations, optionally
/// plotting each one and assembling the frames into a movie at the end.
pub struct EvolutionEngine<R: Rng = StdRng> {
    population: Population<R>,
    generations: usize,
    recorder: Option<Recorder>,
}

impl<R: Rng> EvolutionEngine<R> {
    pub fn new(population: Population<R>, generations: usize) -> Self {
        Self {
            population,
            generations,
            recorder: None,
        }
    }

    pub fn with_recorder(mut self, recorder: Recorder) -> Self {
        self.recorder = Some(recorder);
        self
    }

    pub fn population(&self) -> &Population<R> {
        &self.population
    }

    pub fn into_population(self) -> Population<R> {
        self.population
    }

    /// Run the evolution loop
    pub fn run<C: ProgressCallback>(&mut self, mut callback: C) -> Result<RunSummary> {
        log::info!(
            "Evolving population {} ({} chromosomes) for {} generations",
            self.population.id(),
            self.population.len(),
            self.generations
        );

        for _ in 0..self.generations {
            let generation = self.population.generation_index();
            callback.on_generation_start(generation);

            if let Some(recorder) = self.recorder.as_mut() {
                recorder.record(&self.population)?;
            }

            let best_score = self.population.best_score();
            let best_fit = self.population.best_fit().clone();
            callback.on_generation_complete(generation, best_score, &best_fit);

            self.population.advance_generation();
        }

        let movie = match self.recorder.as_mut() {
            Some(recorder) => recorder.finish(self.population.id()),
            None => None,
        };

        let best_score = self.population.best_score();
        let best = self.population.best_fit().clone();
        log::info!("Calculated best fit expression: {}", best);

        Ok(RunSummary {
            population_id: self.population.id(),
            generations: self.population.generation_index(),
            best_fit: best.to_string(),
            best_terms: best.terms().to_vec(),
            best_score,
            movie: movie.map(|path| path.display().to_string()),
        })
    }
}
