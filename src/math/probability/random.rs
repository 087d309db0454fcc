// src/math/probability/random.rs

use rand::Rng;

/// Quelle gleichverteilter Zufallszahlen in `[min, max]`.
///
/// Für jeden `rand::Rng` automatisch implementiert. Tests können eigene,
/// deterministische Quellen einstecken.
pub trait RandomSource {
    fn uniform(&mut self, min: f64, max: f64) -> f64;
}

impl<R: Rng> RandomSource for R {
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        if min.is_nan() || max.is_nan() {
            return f64::NAN;
        }

        // Vertauschte Grenzen entstehen z.B. bei negativem Radius
        let (low, high) = if min <= max { (min, max) } else { (max, min) };

        // Leerer oder unendlicher Bereich: random_range würde paniken
        if low == high || !(high - low).is_finite() {
            return low;
        }

        self.random_range(low..=high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_uniform_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let value = rng.uniform(-2.5, 4.0);
            assert!((-2.5..=4.0).contains(&value));
        }
    }

    #[test]
    fn test_swapped_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let value = rng.uniform(1.0, -1.0);
            assert!((-1.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn test_degenerate_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(rng.uniform(3.0, 3.0), 3.0);
        assert!(rng.uniform(f64::NAN, 1.0).is_nan());
        assert_eq!(rng.uniform(f64::NEG_INFINITY, 0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_mean_is_centred() {
        let mut rng = StdRng::seed_from_u64(99);
        let n = 10_000;
        let mean = (0..n).map(|_| rng.uniform(0.0, 10.0)).sum::<f64>() / n as f64;
        assert!((mean - 5.0).abs() < 0.2, "mean = {mean}");
    }
}
