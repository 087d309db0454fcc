// src/math/geometry/circle/sampling.rs

use super::{
    config::{SamplingBounds, SamplingConfig},
    core::Circle,
};
use crate::math::{
    error::{MathError, MathResult},
    probability::RandomSource,
    types::Point3D,
    utils::constants,
};
use bevy::log::warn;
use rand::{SeedableRng, rngs::StdRng};

/// Ein akzeptierter Punkt samt Anzahl der benötigten Versuche
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteriorSample {
    pub point: Point3D,
    /// Versuche inklusive des akzeptierten (mindestens 1)
    pub attempts: usize,
}

impl Circle {
    /// Zufälliger Punkt, dessen Projektion auf die Kreisebene in der Scheibe liegt.
    ///
    /// Rejection Sampling ohne Trigonometrie: Kandidaten werden gleichverteilt aus einem
    /// achsenparallelen Würfel um den Mittelpunkt gezogen, bis die projizierte Distanz
    /// passt. Zurückgegeben wird der ursprüngliche 3D-Punkt, nicht seine Projektion.
    /// Nach `max_attempts` Fehlversuchen gibt es `MathError::SamplingExhausted`.
    pub fn sample_inside<R>(
        &self,
        rng: &mut R,
        bounds: SamplingBounds,
        max_attempts: usize,
    ) -> MathResult<InteriorSample>
    where
        R: RandomSource + ?Sized,
    {
        let half_side = bounds.half_side(self.radius());
        let centre = self.centre();
        let min = centre - Point3D::splat(half_side);
        let max = centre + Point3D::splat(half_side);

        for attempt in 1..=max_attempts {
            let x = rng.uniform(min.x, max.x);
            let y = rng.uniform(min.y, max.y);
            let z = rng.uniform(min.z, max.z);
            let candidate = Point3D::new(x, y, z);

            if self.contains_projected(candidate) {
                return Ok(InteriorSample {
                    point: candidate,
                    attempts: attempt,
                });
            }
        }

        warn!(
            "Rejection sampling gave up after {} attempts (centre {}, radius {})",
            max_attempts,
            centre,
            self.radius()
        );
        Err(MathError::SamplingExhausted {
            attempts: max_attempts,
        })
    }

    /// Zufälliger Punkt mit Standard-Würfel und Standard-Obergrenze
    pub fn random_point_inside<R>(&self, rng: &mut R) -> MathResult<Point3D>
    where
        R: RandomSource + ?Sized,
    {
        self.sample_inside(
            rng,
            SamplingBounds::default(),
            constants::DEFAULT_MAX_SAMPLING_ATTEMPTS,
        )
        .map(|sample| sample.point)
    }

    /// `count` unabhängige Punkte in Ziehungsreihenfolge
    pub fn random_points_inside<R>(&self, rng: &mut R, count: usize) -> MathResult<Vec<Point3D>>
    where
        R: RandomSource + ?Sized,
    {
        (0..count).map(|_| self.random_point_inside(rng)).collect()
    }
}

/// Sampler mit eigenem RNG für wiederholte Ziehungen
pub struct CircleSampler {
    config: SamplingConfig,
    rng: StdRng,
}

impl CircleSampler {
    /// Erstellt einen neuen Sampler (Seed aus dem Betriebssystem)
    pub fn new() -> Self {
        Self {
            config: SamplingConfig::default(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Erstellt einen Sampler mit festem Seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            config: SamplingConfig::default().with_seed(seed),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_config(config: SamplingConfig) -> MathResult<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &SamplingConfig {
        &self.config
    }

    pub fn sample_with_stats(&mut self, circle: &Circle) -> MathResult<InteriorSample> {
        circle.sample_inside(&mut self.rng, self.config.bounds, self.config.max_attempts)
    }

    pub fn sample_point(&mut self, circle: &Circle) -> MathResult<Point3D> {
        self.sample_with_stats(circle).map(|sample| sample.point)
    }

    pub fn sample_points(&mut self, circle: &Circle, count: usize) -> MathResult<Vec<Point3D>> {
        (0..count).map(|_| self.sample_point(circle)).collect()
    }
}

impl Default for CircleSampler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::utils::constants::PI;
    use approx::assert_abs_diff_eq;

    /// Liefert feste Anteile des angefragten Bereichs in Reihenfolge
    struct ScriptedSource {
        fractions: Vec<f64>,
        index: usize,
    }

    impl ScriptedSource {
        fn new(fractions: &[f64]) -> Self {
            Self {
                fractions: fractions.to_vec(),
                index: 0,
            }
        }
    }

    impl RandomSource for ScriptedSource {
        fn uniform(&mut self, min: f64, max: f64) -> f64 {
            let fraction = self.fractions[self.index % self.fractions.len()];
            self.index += 1;
            min + (max - min) * fraction
        }
    }

    fn unit_circle() -> Circle {
        Circle::new(Point3D::ZERO, 1.0, Point3D::Z).unwrap()
    }

    #[test]
    fn test_rejects_then_keeps_off_plane_point() {
        // Erster Kandidat (1, 1, 0) liegt außerhalb, zweiter (0, 0, 1) darüber
        let mut source = ScriptedSource::new(&[1.0, 1.0, 0.5, 0.5, 0.5, 1.0]);
        let sample = unit_circle()
            .sample_inside(&mut source, SamplingBounds::Enclosing, 10)
            .unwrap();

        assert_eq!(sample.attempts, 2);
        assert_eq!(sample.point, Point3D::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_all_samples_project_into_disc() {
        let mut sampler = CircleSampler::with_seed(42);
        let circle = unit_circle();

        for point in sampler.sample_points(&circle, 10_000).unwrap() {
            assert!(point.x * point.x + point.y * point.y <= 1.0);
            assert!(point.z.abs() <= 1.0);
        }
    }

    #[test]
    fn test_acceptance_rate_matches_quarter_pi() {
        let mut sampler = CircleSampler::with_seed(2024);
        let circle = unit_circle();
        let samples = 10_000;

        let total_attempts: usize = (0..samples)
            .map(|_| sampler.sample_with_stats(&circle).unwrap().attempts)
            .sum();
        let acceptance = samples as f64 / total_attempts as f64;

        assert_abs_diff_eq!(acceptance, PI / 4.0, epsilon = 0.02);
    }

    #[test]
    fn test_projection_is_uniform_in_disc() {
        let mut sampler = CircleSampler::with_seed(7);
        let circle = unit_circle();
        let points = sampler.sample_points(&circle, 10_000).unwrap();

        // Innere Scheibe mit halbem Radius hat ein Viertel der Fläche
        let inner = points
            .iter()
            .filter(|p| p.x * p.x + p.y * p.y <= 0.25)
            .count();
        let ratio = inner as f64 / points.len() as f64;

        assert_abs_diff_eq!(ratio, 0.25, epsilon = 0.03);
    }

    #[test]
    fn test_inscribed_bounds_never_reject_aligned_circle() {
        let config = SamplingConfig::new()
            .with_seed(11)
            .with_bounds(SamplingBounds::Inscribed);
        let mut sampler = CircleSampler::from_config(config).unwrap();
        let circle = Circle::new(Point3D::new(5.0, 5.0, 5.0), 2.0, Point3D::Z).unwrap();
        let half_side = 2.0 / constants::ROOT_TWO;

        for _ in 0..1000 {
            let sample = sampler.sample_with_stats(&circle).unwrap();
            let offset = sample.point - circle.centre();

            assert_eq!(sample.attempts, 1);
            assert!(offset.abs().max_element() <= half_side + 1e-12);
        }
    }

    #[test]
    fn test_tilted_circle() {
        let mut sampler = CircleSampler::with_seed(3);
        let circle = Circle::new(Point3D::new(-4.0, 2.0, 9.0), 3.0, Point3D::new(1.0, 1.0, 1.0)).unwrap();

        for point in sampler.sample_points(&circle, 2000).unwrap() {
            assert!(circle.contains_projected(point));
            assert!((point - circle.centre()).abs().max_element() <= 3.0 + 1e-9);
        }
    }

    #[test]
    fn test_zero_radius_returns_centre() {
        let centre = Point3D::new(1.0, -2.0, 3.0);
        let circle = Circle::new(centre, 0.0, Point3D::Y).unwrap();
        let mut sampler = CircleSampler::with_seed(5);

        let sample = sampler.sample_with_stats(&circle).unwrap();
        assert_eq!(sample.point, centre);
        assert_eq!(sample.attempts, 1);
    }

    #[test]
    fn test_negative_radius_samples_like_positive() {
        let circle = Circle::new(Point3D::ZERO, -2.0, Point3D::Z).unwrap();
        let mut sampler = CircleSampler::with_seed(8);

        for point in sampler.sample_points(&circle, 500).unwrap() {
            assert!(point.x * point.x + point.y * point.y <= 4.0);
        }
    }

    #[test]
    fn test_exhaustion_is_reported() {
        let circle = unit_circle().with_radius(f64::NAN);
        let mut sampler = CircleSampler::from_config(SamplingConfig::new().with_seed(1).with_max_attempts(5)).unwrap();

        assert_eq!(
            sampler.sample_point(&circle),
            Err(MathError::SamplingExhausted { attempts: 5 })
        );
    }

    #[test]
    fn test_seeded_samplers_are_reproducible() {
        let circle = Circle::new(Point3D::ONE, 1.5, Point3D::new(0.0, 1.0, 1.0)).unwrap();
        let first = CircleSampler::with_seed(99).sample_points(&circle, 20).unwrap();
        let second = CircleSampler::with_seed(99).sample_points(&circle, 20).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_random_points_inside_with_plain_rng() {
        let mut rng = StdRng::seed_from_u64(123);
        let circle = Circle::new(Point3D::new(10.0, 0.0, 0.0), 4.0, Point3D::X).unwrap();
        let points = circle.random_points_inside(&mut rng, 250).unwrap();

        assert_eq!(points.len(), 250);
        assert!(points.iter().all(|p| circle.contains_projected(*p)));
    }

    #[test]
    fn test_invalid_config() {
        assert!(CircleSampler::from_config(SamplingConfig::new().with_max_attempts(0)).is_err());
    }
}
