//! Input arrays for the timing harness.
//!
//! All arrays are prefixes of one base array drawn once at construction, so the series for
//! different lengths share their elements. The random source is owned by the generator and can
//! be seeded for repeatable runs.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("invalid array size {size}, expected 1..={max_size}")]
    InvalidSize { size: usize, max_size: usize },
    #[error("invalid value range, min {min_value} is larger than max {max_value}")]
    InvalidValueRange { min_value: i32, max_value: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub max_size: usize,
    pub min_value: i32,
    pub max_value: i32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_size: 10_000,
            min_value: 0,
            max_value: 6_000,
        }
    }
}

pub const DEFAULT_SWAP_COUNT: usize = 10;

pub struct ArrayGenerator {
    config: GeneratorConfig,
    base: Vec<i32>,
    rng: StdRng,
}

impl ArrayGenerator {
    pub fn new(config: GeneratorConfig, mut rng: StdRng) -> Result<Self, GeneratorError> {
        if config.min_value > config.max_value {
            return Err(GeneratorError::InvalidValueRange {
                min_value: config.min_value,
                max_value: config.max_value,
            });
        }

        let dist = Uniform::new_inclusive(config.min_value, config.max_value);
        let base = (0..config.max_size)
            .map(|_| dist.sample(&mut rng))
            .collect::<Vec<_>>();

        debug!(
            max_size = config.max_size,
            min_value = config.min_value,
            max_value = config.max_value,
            "generated base array"
        );

        Ok(Self { config, base, rng })
    }

    pub fn with_seed(config: GeneratorConfig, seed: u64) -> Result<Self, GeneratorError> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The first `size` values of the base array, uniformly distributed.
    pub fn random(&self, size: usize) -> Result<Vec<i32>, GeneratorError> {
        Ok(self.prefix(size)?.to_vec())
    }

    /// The first `size` values of the base array, sorted in non-increasing order.
    pub fn reversed(&self, size: usize) -> Result<Vec<i32>, GeneratorError> {
        let mut v = self.prefix(size)?.to_vec();
        v.sort_unstable_by(|a, b| b.cmp(a));

        Ok(v)
    }

    /// The first `size` values of the base array sorted, then disturbed by `swap_count` swaps of
    /// two randomly chosen positions. A swap may pick the same position twice.
    pub fn almost_sorted(
        &mut self,
        size: usize,
        swap_count: usize,
    ) -> Result<Vec<i32>, GeneratorError> {
        let mut v = self.prefix(size)?.to_vec();
        v.sort_unstable();

        for _ in 0..swap_count {
            let a = self.rng.gen_range(0..size);
            let b = self.rng.gen_range(0..size);
            v.swap(a, b);
        }

        Ok(v)
    }

    fn prefix(&self, size: usize) -> Result<&[i32], GeneratorError> {
        if size == 0 || size > self.config.max_size {
            return Err(GeneratorError::InvalidSize {
                size,
                max_size: self.config.max_size,
            });
        }

        Ok(&self.base[..size])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> GeneratorConfig {
        GeneratorConfig {
            max_size: 500,
            ..GeneratorConfig::default()
        }
    }

    fn sorted_copy(mut v: Vec<i32>) -> Vec<i32> {
        v.sort_unstable();
        v
    }

    #[test]
    fn values_within_bounds() {
        let gen = ArrayGenerator::with_seed(GeneratorConfig::default(), 7).unwrap();
        let v = gen.random(10_000).unwrap();

        assert_eq!(v.len(), 10_000);
        assert!(v.iter().all(|x| (0..=6_000).contains(x)));
    }

    #[test]
    fn same_seed_same_arrays() {
        let mut a = ArrayGenerator::with_seed(small_config(), 42).unwrap();
        let mut b = ArrayGenerator::with_seed(small_config(), 42).unwrap();

        assert_eq!(a.random(500).unwrap(), b.random(500).unwrap());
        assert_eq!(
            a.almost_sorted(500, 5).unwrap(),
            b.almost_sorted(500, 5).unwrap()
        );
    }

    #[test]
    fn prefixes_share_elements() {
        let gen = ArrayGenerator::with_seed(small_config(), 3).unwrap();
        let long = gen.random(300).unwrap();
        let short = gen.random(100).unwrap();

        assert_eq!(&long[..100], &short[..]);
    }

    #[test]
    fn reversed_is_non_increasing_permutation() {
        let gen = ArrayGenerator::with_seed(small_config(), 11).unwrap();
        let reversed = gen.reversed(400).unwrap();

        assert!(reversed.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(sorted_copy(reversed), sorted_copy(gen.random(400).unwrap()));
    }

    #[test]
    fn almost_sorted_is_close_to_sorted() {
        let mut gen = ArrayGenerator::with_seed(small_config(), 5).unwrap();
        let v = gen.almost_sorted(500, 5).unwrap();

        let out_of_place = v.windows(2).filter(|w| w[0] > w[1]).count();
        // Each swap breaks at most two neighbor relations on each of its two positions.
        assert!(out_of_place <= 5 * 4);
        assert_eq!(sorted_copy(v), sorted_copy(gen.random(500).unwrap()));

        let sorted = gen.almost_sorted(500, 0).unwrap();
        assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn rejects_invalid_sizes() {
        let mut gen = ArrayGenerator::with_seed(small_config(), 1).unwrap();

        assert_eq!(
            gen.random(0),
            Err(GeneratorError::InvalidSize {
                size: 0,
                max_size: 500
            })
        );
        assert!(gen.reversed(501).is_err());
        assert!(gen.almost_sorted(501, 3).is_err());
    }

    #[test]
    fn rejects_inverted_value_range() {
        let config = GeneratorConfig {
            min_value: 10,
            max_value: 0,
            ..GeneratorConfig::default()
        };

        assert!(matches!(
            ArrayGenerator::with_seed(config, 0),
            Err(GeneratorError::InvalidValueRange { .. })
        ));
    }
}
