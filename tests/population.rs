use polyevo::config::PopulationConfig;
use polyevo::engines::generation::{crossover_at, Chromosome, Population};
use polyevo::PolyevoError;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn quadratic_samples() -> (Vec<f64>, Vec<f64>) {
    let inputs: Vec<f64> = (0..6).map(f64::from).collect();
    let outputs = inputs.iter().map(|x| 2.0 * x * x - x + 1.0).collect();
    (inputs, outputs)
}

fn seeded(population_size: usize, mutation_probability: f64, seed: u64) -> Population {
    let (inputs, outputs) = quadratic_samples();
    let config = PopulationConfig {
        population_size,
        mutation_probability,
        seed: Some(seed),
        ..Default::default()
    };
    Population::new(inputs, outputs, &config).unwrap()
}

#[test]
fn test_score_examples() {
    let config = PopulationConfig::default();
    let members = vec![Chromosome::new(vec![0]).unwrap(); 4];

    let population = Population::from_chromosomes(
        members.clone(),
        vec![0.0, 1.0, 2.0, 3.0],
        vec![0.0, 1.0, 4.0, 9.0],
        &config,
        StdRng::seed_from_u64(0),
    )
    .unwrap();
    assert_eq!(population.score(&Chromosome::new(vec![0, 0, 1]).unwrap()), 0.0);

    let population = Population::from_chromosomes(
        members,
        vec![0.0, 1.0, 2.0],
        vec![0.0, 1.0, 4.0],
        &config,
        StdRng::seed_from_u64(0),
    )
    .unwrap();
    assert_eq!(population.score(&Chromosome::new(vec![1, 1]).unwrap()), 3.0);
}

#[test]
fn test_size_invariance() {
    for size in [4, 5, 6, 7, 10, 31] {
        let mut population = seeded(size, 0.1, size as u64);
        for _ in 0..5 {
            population.advance_generation();
            assert_eq!(population.len(), size);
        }
    }
}

#[test]
fn test_elites_survive_in_rank_order() {
    let mut population = seeded(15, 0.2, 8);

    for _ in 0..20 {
        let order = population.ranking();
        let best = population.chromosomes()[order[0]].clone();
        let second = population.chromosomes()[order[1]].clone();

        population.advance_generation();

        assert_eq!(population.chromosomes()[0], best);
        assert_eq!(population.chromosomes()[1], second);
    }
}

#[test]
fn test_best_score_never_worsens() {
    let mut population = seeded(12, 0.1, 3);
    let mut previous = population.best_score();

    for _ in 0..30 {
        population.advance_generation();
        let current = population.best_score();
        assert!(current <= previous);
        previous = current;
    }
}

#[test]
fn test_scores_recomputed_after_advance() {
    let mut population = seeded(8, 0.0, 5);
    population.scores();
    assert!(population.is_scored());

    population.advance_generation();
    assert!(!population.is_scored());

    let expected: Vec<f64> = population
        .chromosomes()
        .iter()
        .map(|c| population.score(c))
        .collect();
    assert_eq!(population.scores(), expected.as_slice());
}

#[test]
fn test_seeded_runs_match() {
    let mut a = seeded(10, 0.3, 77);
    let mut b = seeded(10, 0.3, 77);
    for _ in 0..10 {
        a.advance_generation();
        b.advance_generation();
    }
    assert_eq!(a.chromosomes(), b.chromosomes());
    assert_ne!(a.id(), 0);
}

#[test]
fn test_length_mismatch_leaves_samples() {
    let mut population = seeded(4, 0.0, 1);
    let before = population.inputs().to_vec();

    let err = population.set_inputs(vec![1.0, 2.0]).unwrap_err();
    assert!(matches!(err, PolyevoError::LengthMismatch { inputs: 2, outputs: 6 }));
    assert_eq!(population.inputs(), before.as_slice());
}

/// Index of the ordered parent pair and crossover point that produce `children`
fn find_parents(parents: &[Chromosome], children: (&Chromosome, &Chromosome)) -> Option<(usize, usize)> {
    for (i, a) in parents.iter().enumerate() {
        for (j, b) in parents.iter().enumerate() {
            if i == j {
                continue;
            }
            let n = a.terms().len().max(b.terms().len());
            let matched = (0..n).any(|point| {
                let (x, y) = crossover_at(a.terms(), b.terms(), point);
                x == children.0.terms() && y == children.1.terms()
            });
            if matched {
                return Some((i, j));
            }
        }
    }
    None
}

#[test]
fn test_advance_mates_middle_and_elites() {
    // Nine three-term members with all coefficients distinct; with a single
    // sample at x = 1 the score is the squared coefficient sum, so the
    // ranking is the reverse of insertion order.
    let members: Vec<Chromosome> = (0..9)
        .rev()
        .map(|k| Chromosome::new(vec![10 * k + 1, 10 * k + 2, 10 * k + 3]).unwrap())
        .collect();
    let config = PopulationConfig {
        mutation_probability: 0.0,
        ..Default::default()
    };

    for seed in 0..20 {
        let mut population = Population::from_chromosomes(
            members.clone(),
            vec![1.0],
            vec![0.0],
            &config,
            StdRng::seed_from_u64(seed),
        )
        .unwrap();

        let ranked: Vec<Chromosome> = population
            .ranking()
            .iter()
            .map(|&i| population.chromosomes()[i].clone())
            .collect();
        assert_eq!(ranked[0].terms(), &[1, 2, 3]);

        population.advance_generation();
        let next = population.chromosomes();
        assert_eq!(next.len(), 9);

        // Elites untouched
        assert_eq!(&next[..2], &ranked[..2]);

        // Middle ranks 2..7 (five members): two mated pairs and one copied through
        let middle = &ranked[2..7];
        let mut used = vec![false; middle.len()];
        for slot in [2, 4] {
            let (i, j) = find_parents(middle, (&next[slot], &next[slot + 1]))
                .unwrap_or_else(|| panic!("seed {}: slots {} and {} are not a splice", seed, slot, slot + 1));
            assert!(!used[i] && !used[j], "seed {}: parent reused", seed);
            used[i] = true;
            used[j] = true;
        }
        let leftover = used.iter().position(|&u| !u).unwrap();
        assert_eq!(used.iter().filter(|&&u| !u).count(), 1);
        assert_eq!(next[6], middle[leftover]);

        // Worst two replaced by children of the elites, first child last
        let elites = &ranked[..2];
        assert!(
            find_parents(elites, (&next[8], &next[7])).is_some(),
            "seed {}: back slots are not elite offspring",
            seed
        );
        assert!(!next[7..].contains(&ranked[7]) && !next[7..].contains(&ranked[8]));
    }
}
