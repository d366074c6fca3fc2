use log::info;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Runs the given test `iterations` times with a random number generator that
/// is seeded from system entropy. The seed is printed so that a failing run can
/// be reproduced with [random_test_seeded].
pub fn random_test<F>(iterations: usize, test: F)
where
    F: FnMut(&mut StdRng),
{
    let seed: u64 = rand::rng().random();
    println!("random_test seed: {seed}");
    random_test_seeded(seed, iterations, test);
}

/// Runs the given test `iterations` times with a generator seeded by `seed`.
pub fn random_test_seeded<F>(seed: u64, iterations: usize, mut test: F)
where
    F: FnMut(&mut StdRng),
{
    info!("Running {iterations} random iterations with seed {seed}");

    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..iterations {
        test(&mut rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_seeded_is_reproducible() {
        let mut first = Vec::new();
        random_test_seeded(42, 5, |rng| first.push(rng.random::<u32>()));

        let mut second = Vec::new();
        random_test_seeded(42, 5, |rng| second.push(rng.random::<u32>()));

        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }
}
