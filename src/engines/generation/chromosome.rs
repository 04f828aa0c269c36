use crate::engines::generation::operators::{self, MutationBound};
use crate::error::{PolyevoError, Result};
use crate::types::Coefficient;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A candidate polynomial.
///
/// Coefficients are stored by ascending power of x, so `[1, -2, 3]` is
/// `1 - 2x + 3x^2`. A chromosome is never empty and never changes after
/// construction; every genetic operation returns fresh chromosomes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Chromosome {
    terms: Vec<Coefficient>,
}

/// Construction request: either explicit coefficients, or a degree plus a
/// coefficient bound for random generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChromosomeSpec {
    pub terms: Option<Vec<Coefficient>>,
    pub degree: Option<usize>,
    pub coeff_max: Option<Coefficient>,
}

impl ChromosomeSpec {
    pub fn explicit(terms: Vec<Coefficient>) -> Self {
        Self {
            terms: Some(terms),
            ..Default::default()
        }
    }

    pub fn random(degree: usize, coeff_max: Coefficient) -> Self {
        Self {
            terms: None,
            degree: Some(degree),
            coeff_max: Some(coeff_max),
        }
    }
}

impl Chromosome {
    pub fn new(terms: Vec<Coefficient>) -> Result<Self> {
        if terms.is_empty() {
            return Err(PolyevoError::InvalidArguments(
                "a chromosome needs at least one coefficient".to_string(),
            ));
        }
        Ok(Self { terms })
    }

    /// `degree + 1` coefficients, each with magnitude in `[0, coeff_max)` and a random sign
    pub fn random<R: Rng>(degree: usize, coeff_max: Coefficient, rng: &mut R) -> Result<Self> {
        if coeff_max <= 0 {
            return Err(PolyevoError::InvalidArguments(format!(
                "coeff_max must be positive, got {}",
                coeff_max
            )));
        }
        Ok(Self {
            terms: operators::random_terms(degree + 1, coeff_max, rng),
        })
    }

    pub fn from_spec<R: Rng>(spec: ChromosomeSpec, rng: &mut R) -> Result<Self> {
        match spec {
            ChromosomeSpec {
                terms: Some(terms), ..
            } => Self::new(terms),
            ChromosomeSpec {
                degree: Some(degree),
                coeff_max: Some(coeff_max),
                ..
            } => Self::random(degree, coeff_max, rng),
            _ => Err(PolyevoError::InvalidArguments(
                "expected explicit coefficients or both degree and coeff_max".to_string(),
            )),
        }
    }

    pub fn terms(&self) -> &[Coefficient] {
        &self.terms
    }

    pub fn degree(&self) -> usize {
        self.terms.len() - 1
    }

    /// Value of the polynomial at `x`
    pub fn evaluate(&self, x: f64) -> f64 {
        self.terms
            .iter()
            .enumerate()
            .map(|(power, &coeff)| coeff as f64 * x.powi(power as i32))
            .sum()
    }

    /// Sexual reproduction: crossover at a random point, then mutation.
    pub fn mate_with<R: Rng>(
        &self,
        other: &Chromosome,
        mutation_probability: f64,
        mutation_bound: MutationBound,
        rng: &mut R,
    ) -> (Chromosome, Chromosome) {
        let n = self.terms.len().max(other.terms.len());
        let point = rng.gen_range(0..n);
        self.mate_at(other, point, mutation_probability, mutation_bound, rng)
    }

    /// Same as [`Chromosome::mate_with`] with a caller-chosen crossover point.
    pub fn mate_at<R: Rng>(
        &self,
        other: &Chromosome,
        crossover_point: usize,
        mutation_probability: f64,
        mutation_bound: MutationBound,
        rng: &mut R,
    ) -> (Chromosome, Chromosome) {
        let (mut a, mut b) = operators::crossover_at(&self.terms, &other.terms, crossover_point);
        let bound = mutation_bound.resolve(&a, &b);

        if mutation_probability > 0.0 {
            operators::mutate(&mut a, mutation_probability, bound, rng);
            operators::mutate(&mut b, mutation_probability, bound, rng);
        }

        log::trace!(
            "crossover at {}: {:?} x {:?} -> {:?}, {:?}",
            crossover_point,
            self.terms,
            other.terms,
            a,
            b
        );

        // Both children keep at least one coefficient from a non-empty parent
        (Chromosome { terms: a }, Chromosome { terms: b })
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (power, coeff) in self.terms.iter().enumerate() {
            if power > 0 {
                write!(f, "+")?;
            }
            write!(f, "{}*x**{}", coeff, power)?;
        }
        Ok(())
    }
}
