use crate::config::{ConfigSection, PopulationConfig};
use crate::engines::evaluation::{CostFn, SampleSet};
use crate::engines::generation::{
    chromosome::{Chromosome, ChromosomeSpec},
    operators::MutationBound,
    score_cache::ScoreCache,
};
use crate::error::{PolyevoError, Result};
use crate::types::Coefficient;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;
use std::fmt;

/// Number of top-ranked chromosomes carried unchanged into the next generation.
/// Their two offspring overwrite the same number of worst-ranked slots.
pub const ELITE_COUNT: usize = 2;

/// A generation of candidate polynomials scored against fixed sample data.
pub struct Population<R: Rng = StdRng> {
    id: u64,
    chromosomes: Vec<Chromosome>,
    samples: SampleSet,
    cost_fn: CostFn,
    mutation_probability: f64,
    max_degree: usize,
    coefficient_bound: Coefficient,
    generation_index: usize,
    scores: ScoreCache,
    rng: R,
}

impl Population<StdRng> {
    /// Random population seeded from `config.seed`, or from entropy when unset
    pub fn new(inputs: Vec<f64>, outputs: Vec<f64>, config: &PopulationConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(inputs, outputs, config, rng)
    }
}

impl<R: Rng> Population<R> {
    pub fn with_rng(
        inputs: Vec<f64>,
        outputs: Vec<f64>,
        config: &PopulationConfig,
        mut rng: R,
    ) -> Result<Self> {
        config.validate()?;
        let samples = SampleSet::new(inputs, outputs)?;
        let coefficient_bound = coefficient_bound(&samples)?;

        let chromosomes = (0..config.population_size)
            .map(|_| Chromosome::random(config.max_degree, coefficient_bound, &mut rng))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::assemble(chromosomes, samples, config, coefficient_bound, rng))
    }

    /// Population made of the given chromosomes; `config.population_size` is ignored.
    pub fn from_chromosomes(
        chromosomes: Vec<Chromosome>,
        inputs: Vec<f64>,
        outputs: Vec<f64>,
        config: &PopulationConfig,
        rng: R,
    ) -> Result<Self> {
        PopulationConfig {
            population_size: chromosomes.len(),
            ..config.clone()
        }
        .validate()?;
        let samples = SampleSet::new(inputs, outputs)?;
        let coefficient_bound = coefficient_bound(&samples)?;

        Ok(Self::assemble(chromosomes, samples, config, coefficient_bound, rng))
    }

    fn assemble(
        chromosomes: Vec<Chromosome>,
        samples: SampleSet,
        config: &PopulationConfig,
        coefficient_bound: Coefficient,
        rng: R,
    ) -> Self {
        let id = rand::random::<u64>();
        log::debug!(
            "Population {} created with {} chromosomes, coefficient bound {}",
            id,
            chromosomes.len(),
            coefficient_bound
        );

        Self {
            id,
            chromosomes,
            samples,
            cost_fn: config.cost_function.into_fn(),
            mutation_probability: config.mutation_probability,
            max_degree: config.max_degree,
            coefficient_bound,
            generation_index: 0,
            scores: ScoreCache::Stale,
            rng,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn chromosomes(&self) -> &[Chromosome] {
        &self.chromosomes
    }

    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    pub fn inputs(&self) -> &[f64] {
        self.samples.inputs()
    }

    pub fn outputs(&self) -> &[f64] {
        self.samples.outputs()
    }

    pub fn generation_index(&self) -> usize {
        self.generation_index
    }

    pub fn coefficient_bound(&self) -> Coefficient {
        self.coefficient_bound
    }

    pub fn mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    /// Horizontal plot bound: `max(inputs) + 1`
    pub fn bound_x(&self) -> f64 {
        self.samples.max_input().unwrap_or(0.0) + 1.0
    }

    /// Vertical plot bound: `max(outputs) + 1`
    pub fn bound_y(&self) -> f64 {
        self.samples.max_output().unwrap_or(0.0) + 1.0
    }

    /// Whether the score cache currently holds valid scores
    pub fn is_scored(&self) -> bool {
        self.scores.is_fresh()
    }

    pub fn set_mutation_probability(&mut self, mutation_probability: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&mutation_probability) {
            return Err(PolyevoError::InvalidArguments(format!(
                "mutation probability must be in [0, 1], got {}",
                mutation_probability
            )));
        }
        self.mutation_probability = mutation_probability;
        Ok(())
    }

    pub fn set_cost_fn(&mut self, cost_fn: CostFn) {
        self.cost_fn = cost_fn;
        self.scores.invalidate();
    }

    pub fn set_inputs(&mut self, inputs: Vec<f64>) -> Result<()> {
        self.samples.set_inputs(inputs)?;
        self.scores.invalidate();
        Ok(())
    }

    pub fn set_outputs(&mut self, outputs: Vec<f64>) -> Result<()> {
        self.samples.set_outputs(outputs)?;
        self.scores.invalidate();
        Ok(())
    }

    /// Replace both sample sequences at once
    pub fn set_samples(&mut self, inputs: Vec<f64>, outputs: Vec<f64>) -> Result<()> {
        self.samples = SampleSet::new(inputs, outputs)?;
        self.scores.invalidate();
        Ok(())
    }

    pub fn append_sample(&mut self, input: f64, output: f64) {
        self.samples.push(input, output);
        self.scores.invalidate();
    }

    pub fn append_chromosome(&mut self, chromosome: Chromosome) {
        self.chromosomes.push(chromosome);
        self.scores.invalidate();
    }

    /// Build a chromosome from `spec` and append it. A missing degree or
    /// coefficient bound falls back to the population's own.
    pub fn append_random_chromosome(&mut self, spec: ChromosomeSpec) -> Result<()> {
        let spec = ChromosomeSpec {
            terms: spec.terms,
            degree: spec.degree.or(Some(self.max_degree)),
            coeff_max: spec.coeff_max.or(Some(self.coefficient_bound)),
        };
        let chromosome = Chromosome::from_spec(spec, &mut self.rng)?;
        self.append_chromosome(chromosome);
        Ok(())
    }

    /// Total cost of `chromosome` over every sample. Lower is better.
    pub fn score(&self, chromosome: &Chromosome) -> f64 {
        score_against(chromosome, &self.samples, &self.cost_fn)
    }

    /// One score per chromosome, in chromosome order
    pub fn scores(&mut self) -> &[f64] {
        let chromosomes = &self.chromosomes;
        let samples = &self.samples;
        let cost_fn = &self.cost_fn;
        self.scores.get_or_compute(|| {
            log::trace!("Scoring {} chromosomes", chromosomes.len());
            chromosomes
                .iter()
                .map(|c| score_against(c, samples, cost_fn))
                .collect()
        })
    }

    /// Chromosome indices ordered best (lowest score) first; ties keep index order
    pub fn ranking(&mut self) -> Vec<usize> {
        let scores = self.scores();
        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by(|&a, &b| score_order(scores[a], scores[b]));
        order
    }

    pub fn best_fit(&mut self) -> &Chromosome {
        let best = self.best_index();
        &self.chromosomes[best]
    }

    pub fn best_score(&mut self) -> f64 {
        let best = self.best_index();
        self.scores()[best]
    }

    fn best_index(&mut self) -> usize {
        let scores = self.scores();
        (0..scores.len())
            .min_by(|&a, &b| score_order(scores[a], scores[b]))
            .unwrap_or(0)
    }

    /// Replace the chromosomes with the next generation.
    ///
    /// After ranking by score the layout is `[elites | middle | worst]`:
    /// - the two elites survive unchanged at positions 0 and 1;
    /// - the middle is mated in random disjoint pairs, offspring written back
    ///   into the middle slots, an odd one out copied through;
    /// - the two worst slots are overwritten by the elites' offspring.
    pub fn advance_generation(&mut self) {
        let order = self.ranking();
        let ranked: Vec<Chromosome> = order.iter().map(|&i| self.chromosomes[i].clone()).collect();
        let len = ranked.len();
        debug_assert!(len >= 2 * ELITE_COUNT);

        let mut next = ranked.clone();

        // Remaining candidates are tracked by rank position, never by value
        let mut pool: Vec<usize> = (ELITE_COUNT..len - ELITE_COUNT).collect();
        let mut slot = ELITE_COUNT;
        while !pool.is_empty() {
            if pool.len() >= 2 {
                let picks = rand::seq::index::sample(&mut self.rng, pool.len(), 2);
                let (i, j) = (picks.index(0), picks.index(1));
                let (a, b) = ranked[pool[i]].mate_with(
                    &ranked[pool[j]],
                    self.mutation_probability,
                    MutationBound::Derived,
                    &mut self.rng,
                );
                next[slot] = a;
                next[slot + 1] = b;
                slot += 2;

                pool.swap_remove(i.max(j));
                pool.swap_remove(i.min(j));
            } else {
                let last = pool[0];
                next[slot] = ranked[last].clone();
                slot += 1;
                pool.clear();
            }
        }

        // Elite offspring replace the two worst
        let (a, b) = ranked[0].mate_with(
            &ranked[1],
            self.mutation_probability,
            MutationBound::Derived,
            &mut self.rng,
        );
        next[len - 1] = a;
        next[len - 2] = b;

        self.chromosomes = next;
        self.generation_index += 1;
        self.scores.invalidate();

        log::debug!(
            "Population {} advanced to generation {}",
            self.id,
            self.generation_index
        );
    }
}

impl<R: Rng> fmt::Display for Population<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "inputs:  {:?}", self.inputs())?;
        writeln!(f, "outputs: {:?}", self.outputs())?;
        writeln!(f, "exprs:")?;
        for chromosome in &self.chromosomes {
            writeln!(f, "{}", chromosome)?;
        }
        Ok(())
    }
}

fn score_against(chromosome: &Chromosome, samples: &SampleSet, cost_fn: &CostFn) -> f64 {
    samples
        .iter()
        .map(|(input, output)| cost_fn(output, chromosome.evaluate(input)))
        .sum()
}

/// Ascending scores with every NaN after every number
fn score_order(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.total_cmp(&b),
        (a_nan, b_nan) => a_nan.cmp(&b_nan),
    }
}

/// `ceil(max(max(inputs), max(outputs)) + 1)`.
///
/// When that leaves no room for a nonzero coefficient (all samples below 1),
/// the largest sample magnitude plus one is used instead.
fn coefficient_bound(samples: &SampleSet) -> Result<Coefficient> {
    let (Some(x), Some(y), Some(magnitude)) = (
        samples.max_input(),
        samples.max_output(),
        samples.max_magnitude(),
    ) else {
        return Err(PolyevoError::InvalidArguments(
            "a population needs at least one sample".to_string(),
        ));
    };

    let bound = (x.max(y) + 1.0).ceil() as Coefficient;
    if bound >= 2 {
        Ok(bound)
    } else {
        Ok(((magnitude + 1.0).ceil() as Coefficient).max(1))
    }
}
