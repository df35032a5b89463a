//! Unique client code sampling
//!
//! Client codes are drawn uniformly from the eight-digit space
//! [`CODE_MIN`, `CODE_MAX`] by rejection sampling: duplicates are discarded
//! and redrawn until the requested number of distinct codes is collected.
//! Draw order is preserved in the returned vector so that seeded runs are
//! fully reproducible.

use crate::types::{ClientCode, GeneratorError};
use rand::Rng;
use std::collections::HashSet;

/// Smallest valid client code
pub const CODE_MIN: ClientCode = 10_000_000;

/// Largest valid client code
pub const CODE_MAX: ClientCode = 99_999_999;

/// Total number of distinct client codes available
pub const CODE_SPACE: usize = (CODE_MAX - CODE_MIN + 1) as usize;

/// Sample `count` distinct client codes
///
/// Codes are drawn uniformly from [`CODE_MIN`, `CODE_MAX`]; rejection
/// sampling retries until `count` distinct values are collected. The result
/// preserves draw order, so the same seed always yields the same sequence.
///
/// # Arguments
///
/// * `count` - Number of distinct codes to sample
/// * `rng` - Random number source to draw from
///
/// # Errors
///
/// Returns [`GeneratorError::IdSpaceExhausted`] when `count` exceeds
/// [`CODE_SPACE`]: rejection sampling over an exhausted space would never
/// terminate, so the request is rejected before drawing.
///
/// # Examples
///
/// ```
/// use benefit_datagen::core::sampler::{sample_client_codes, CODE_MAX, CODE_MIN};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let codes = sample_client_codes(5, &mut rng).unwrap();
/// assert_eq!(codes.len(), 5);
/// assert!(codes.iter().all(|&c| (CODE_MIN..=CODE_MAX).contains(&c)));
/// ```
pub fn sample_client_codes<R: Rng>(
    count: usize,
    rng: &mut R,
) -> Result<Vec<ClientCode>, GeneratorError> {
    if count > CODE_SPACE {
        return Err(GeneratorError::id_space_exhausted(count, CODE_SPACE));
    }

    let mut seen = HashSet::with_capacity(count);
    let mut codes = Vec::with_capacity(count);

    while codes.len() < count {
        let code = rng.gen_range(CODE_MIN..=CODE_MAX);
        if seen.insert(code) {
            codes.push(code);
        }
    }

    Ok(codes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use rstest::rstest;

    #[rstest]
    #[case::one(1)]
    #[case::five(5)]
    #[case::many(500)]
    fn test_sample_count_distinct_and_in_range(#[case] count: usize) {
        let mut rng = StdRng::seed_from_u64(42);
        let codes = sample_client_codes(count, &mut rng).unwrap();

        assert_eq!(codes.len(), count);

        let distinct: HashSet<_> = codes.iter().collect();
        assert_eq!(distinct.len(), count);

        for code in codes {
            assert!((CODE_MIN..=CODE_MAX).contains(&code));
        }
    }

    #[test]
    fn test_sample_zero_codes() {
        let mut rng = StdRng::seed_from_u64(42);
        let codes = sample_client_codes(0, &mut rng).unwrap();
        assert!(codes.is_empty());
    }

    #[test]
    fn test_sample_rejects_oversized_request() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = sample_client_codes(CODE_SPACE + 1, &mut rng);

        assert_eq!(
            result,
            Err(GeneratorError::IdSpaceExhausted {
                requested: CODE_SPACE + 1,
                capacity: CODE_SPACE,
            })
        );
    }

    #[test]
    fn test_sample_is_deterministic_for_a_seed() {
        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);

        let codes_a = sample_client_codes(50, &mut rng_a).unwrap();
        let codes_b = sample_client_codes(50, &mut rng_b).unwrap();

        assert_eq!(codes_a, codes_b);
    }
}
