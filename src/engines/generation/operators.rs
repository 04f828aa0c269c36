use crate::types::Coefficient;
use rand::Rng;

/// Upper bound on the magnitude of a freshly drawn coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationBound {
    /// Use this bound as is.
    Fixed(Coefficient),
    /// Largest absolute coefficient across both children minus one,
    /// measured after crossover and before mutation.
    Derived,
}

impl MutationBound {
    pub fn resolve(self, a: &[Coefficient], b: &[Coefficient]) -> Coefficient {
        match self {
            MutationBound::Fixed(bound) => bound,
            MutationBound::Derived => {
                a.iter()
                    .chain(b.iter())
                    .map(|c| c.abs())
                    .max()
                    .unwrap_or(0)
                    - 1
            }
        }
    }
}

/// Signed random coefficient: magnitude uniform in `[0, bound)`, sign uniform in {+1, -1}.
///
/// An empty range (`bound <= 0`) always yields zero magnitude.
pub fn random_coefficient<R: Rng>(bound: Coefficient, rng: &mut R) -> Coefficient {
    let magnitude = if bound > 0 { rng.gen_range(0..bound) } else { 0 };
    magnitude * random_sign(rng)
}

fn random_sign<R: Rng>(rng: &mut R) -> Coefficient {
    if rng.gen_bool(0.5) {
        1
    } else {
        -1
    }
}

/// Generate `len` independent random coefficients
pub fn random_terms<R: Rng>(len: usize, coeff_max: Coefficient, rng: &mut R) -> Vec<Coefficient> {
    (0..len).map(|_| random_coefficient(coeff_max, rng)).collect()
}

/// Single-point splice at `point`.
///
/// `a[..point] ++ b[point..n]` and `b[..point] ++ a[point..n]` with
/// `n = max(len a, len b)`. Slices past a parent's end are empty, so a child
/// can be shorter than `n` when the parents differ in length.
pub fn crossover_at(
    a: &[Coefficient],
    b: &[Coefficient],
    point: usize,
) -> (Vec<Coefficient>, Vec<Coefficient>) {
    let child_a = head(a, point).iter().chain(tail(b, point)).copied().collect();
    let child_b = head(b, point).iter().chain(tail(a, point)).copied().collect();
    (child_a, child_b)
}

fn head(terms: &[Coefficient], point: usize) -> &[Coefficient] {
    &terms[..point.min(terms.len())]
}

fn tail(terms: &[Coefficient], point: usize) -> &[Coefficient] {
    &terms[point.min(terms.len())..]
}

/// Mutation: independently replace each coefficient with probability `mutation_probability`
pub fn mutate<R: Rng>(
    terms: &mut [Coefficient],
    mutation_probability: f64,
    bound: Coefficient,
    rng: &mut R,
) {
    for term in terms.iter_mut() {
        if rng.gen::<f64>() < mutation_probability {
            *term = random_coefficient(bound, rng);
        }
    }
}
