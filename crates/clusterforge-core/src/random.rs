//! Random number source used by solution generators.

use rand::Rng;

/// Source of uniformly distributed integers.
///
/// Every [`rand::Rng`] is a `RandomSource`, so a seeded
/// `rand_chacha::ChaCha8Rng` gives reproducible searches.
pub trait RandomSource {
    /// Draws an integer uniformly from `min..=max`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    fn uniform_int(&mut self, min: usize, max: usize) -> usize;

    /// Draws `len` integers independently and uniformly from `min..=max`.
    fn uniform_int_vec(&mut self, min: usize, max: usize, len: usize) -> Vec<usize> {
        (0..len).map(|_| self.uniform_int(min, max)).collect()
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform_int(&mut self, min: usize, max: usize) -> usize {
        self.random_range(min..=max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_uniform_int_inclusive_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let v = rng.uniform_int(2, 4);
            assert!((2..=4).contains(&v));
            seen[v - 2] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_uniform_int_single_value() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(rng.uniform_int(5, 5), 5);
    }

    #[test]
    fn test_uniform_int_vec_is_reproducible() {
        let a = ChaCha8Rng::seed_from_u64(42).uniform_int_vec(0, 9, 16);
        let b = ChaCha8Rng::seed_from_u64(42).uniform_int_vec(0, 9, 16);
        assert_eq!(a, b);
        assert_eq!(a.len(), 16);
        assert!(a.iter().all(|&v| v <= 9));
    }

    #[test]
    fn test_uniform_int_vec_empty() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert!(rng.uniform_int_vec(0, 0, 0).is_empty());
    }
}
