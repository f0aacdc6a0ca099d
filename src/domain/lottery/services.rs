use rand::Rng;

use super::value_objects::{LottoNumber, MAX_NUMBER, MIN_NUMBER, NumberSet, SET_SIZE};

/// Domain service producing fresh number sets
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSetGenerator;

impl RandomSetGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Draw uniformly from `1..=45` until six distinct values are collected.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> NumberSet {
        let mut picked = [LottoNumber::LOWEST; SET_SIZE];
        let mut filled = 0;
        while filled < SET_SIZE {
            let value = rng.random_range(MIN_NUMBER..=MAX_NUMBER);
            let Ok(number) = LottoNumber::new(value) else {
                continue;
            };
            if !picked[..filled].contains(&number) {
                picked[filled] = number;
                filled += 1;
            }
        }
        NumberSet::from_distinct(picked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn same_seed_same_set() {
        let generator = RandomSetGenerator::new();
        let a = generator.generate(&mut SmallRng::seed_from_u64(42));
        let b = generator.generate(&mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn consecutive_sets_are_valid() {
        let generator = RandomSetGenerator::new();
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..1000 {
            let set = generator.generate(&mut rng);
            let values = set.values();
            assert_eq!(values.len(), 6);
            assert!(values.windows(2).all(|w| w[0] < w[1]));
            assert!(values.iter().all(|v| (1..=45).contains(v)));
        }
    }

    #[test]
    fn repeated_draws_are_skipped() {
        let generator = RandomSetGenerator::new();
        for seed in 0..200 {
            let values = generator.generate(&mut SmallRng::seed_from_u64(seed)).values();
            let mut deduped = values.clone();
            deduped.dedup();
            assert_eq!(deduped, values, "seed {seed}");
        }
    }
}
