/// Memoised fitness scores, aligned 1:1 with a population's chromosomes.
///
/// `Stale` until computed, `Fresh` until the next invalidation.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ScoreCache {
    #[default]
    Stale,
    Fresh(Vec<f64>),
}

impl ScoreCache {
    pub fn is_fresh(&self) -> bool {
        matches!(self, ScoreCache::Fresh(_))
    }

    pub fn invalidate(&mut self) {
        *self = ScoreCache::Stale;
    }

    /// Cached scores, computing them with `compute` when stale
    pub fn get_or_compute<F>(&mut self, compute: F) -> &[f64]
    where
        F: FnOnce() -> Vec<f64>,
    {
        if let ScoreCache::Stale = self {
            *self = ScoreCache::Fresh(compute());
        }
        match self {
            ScoreCache::Fresh(scores) => scores.as_slice(),
            ScoreCache::Stale => &[],
        }
    }
}
