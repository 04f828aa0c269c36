use super::chromosome::Chromosome;
use super::evolution_engine::ProgressCallback;

/// Reports progress through the `log` facade
#[derive(Debug, Default)]
pub struct ConsoleProgressCallback;

impl ProgressCallback for ConsoleProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        log::debug!("Generation {} starting...", generation + 1);
    }

    fn on_generation_complete(&mut self, generation: usize, best_score: f64, best_fit: &Chromosome) {
        log::info!(
            "Generation {} complete. Best score: {:.4}, best fit: {}",
            generation + 1,
            best_score,
            best_fit
        );
    }
}

/// Keeps the best score of every completed generation
#[derive(Debug, Default, Clone)]
pub struct ScoreHistory {
    pub best_scores: Vec<f64>,
}

impl ProgressCallback for ScoreHistory {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(&mut self, _generation: usize, best_score: f64, _best_fit: &Chromosome) {
        self.best_scores.push(best_score);
    }
}

impl<C: ProgressCallback + ?Sized> ProgressCallback for &mut C {
    fn on_generation_start(&mut self, generation: usize) {
        (**self).on_generation_start(generation);
    }

    fn on_generation_complete(&mut self, generation: usize, best_score: f64, best_fit: &Chromosome) {
        (**self).on_generation_complete(generation, best_score, best_fit);
    }
}
