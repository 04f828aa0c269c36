use polyevo::engines::generation::{crossover_at, Chromosome, ChromosomeSpec, MutationBound};
use polyevo::PolyevoError;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn chromosome(terms: &[i64]) -> Chromosome {
    Chromosome::new(terms.to_vec()).unwrap()
}

#[test]
fn test_crossover_contract() {
    let a = chromosome(&[1, 2, 3]);
    let b = chromosome(&[4, 5, 6]);
    let mut rng = StdRng::seed_from_u64(1);

    let (x, y) = a.mate_at(&b, 1, 0.0, MutationBound::Derived, &mut rng);

    assert_eq!(x.terms(), &[1, 5, 6]);
    assert_eq!(y.terms(), &[4, 2, 3]);
}

#[test]
fn test_unequal_parent_splice_lengths() {
    let short = [1, 2];
    let long = [10, 20, 30, 40, 50];

    for point in 0..long.len() {
        let (a, b) = crossover_at(&short, &long, point);
        let head = point.min(short.len());
        // short[..point] ++ long[point..], long[..point] ++ short[point..]
        assert_eq!(a.len(), head + (long.len() - point));
        assert_eq!(b.len(), point + (short.len() - head));
        assert_eq!(&a[..head], &short[..head]);
        assert_eq!(&a[head..], &long[point..]);
        assert_eq!(&b[..point], &long[..point]);
    }

    // Crossing beyond the short parent shrinks one child below both parents' max
    let (a, b) = crossover_at(&short, &long, 3);
    assert_eq!(a, vec![1, 2, 40, 50]);
    assert_eq!(b, vec![10, 20, 30]);
}

#[test]
fn test_no_mutation_is_deterministic_given_rng() {
    let a = chromosome(&[3, -1, 4, 1]);
    let b = chromosome(&[-5, 9, 2, 6]);

    let first = a.mate_with(&b, 0.0, MutationBound::Derived, &mut StdRng::seed_from_u64(21));
    let second = a.mate_with(&b, 0.0, MutationBound::Derived, &mut StdRng::seed_from_u64(21));
    assert_eq!(first, second);

    // Without mutation every child is a splice of the parents
    let (x, y) = first;
    let splices: Vec<_> = (0..4).map(|p| crossover_at(a.terms(), b.terms(), p)).collect();
    assert!(splices.contains(&(x.terms().to_vec(), y.terms().to_vec())));
}

#[test]
fn test_fixed_mutation_bound() {
    let a = chromosome(&[100, 100, 100]);
    let b = chromosome(&[100, 100, 100]);
    let mut rng = StdRng::seed_from_u64(4);

    let (x, y) = a.mate_with(&b, 1.0, MutationBound::Fixed(2), &mut rng);
    assert!(x.terms().iter().chain(y.terms()).all(|c| c.abs() < 2));
}

#[test]
fn test_invalid_spec() {
    let mut rng = StdRng::seed_from_u64(0);
    let spec = ChromosomeSpec {
        coeff_max: Some(3),
        ..Default::default()
    };
    assert!(matches!(
        Chromosome::from_spec(spec, &mut rng),
        Err(PolyevoError::InvalidArguments(_))
    ));
}
