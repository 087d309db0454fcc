// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const EPSILON: f64 = 1e-10;
    pub const ROOT_TWO: f64 = std::f64::consts::SQRT_2;
    pub const PI: f64 = std::f64::consts::PI;
    /// Ein voller Umlauf in Grad
    pub const FULL_TURN_DEGREES: f64 = 360.0;
    /// Ab diesem |axis · X| gilt die Achse als parallel zur X-Referenz
    pub const REFERENCE_PARALLEL_THRESHOLD: f64 = 0.999;
    /// Obergrenze für Versuche beim Rejection Sampling
    pub const DEFAULT_MAX_SAMPLING_ATTEMPTS: usize = 10_000;
}

/// Vergleichsfunktionen mit Toleranz
pub mod comparison {
    use super::constants::EPSILON;

    /// Prüft ob zwei Floats (nahezu) gleich sind
    pub fn nearly_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Prüft ob zwei Floats mit custom Toleranz gleich sind
    pub fn nearly_equal_eps(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    /// Lineare Interpolation
    pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
        a + (b - a) * t
    }

    /// Inverse lineare Interpolation
    pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
        if nearly_equal(a, b) {
            0.0
        } else {
            (value - a) / (b - a)
        }
    }
}

/// Winkel-Hilfsfunktionen
pub mod angles {
    use super::constants::PI;

    /// Konvertiert Grad zu Radiant
    pub fn deg_to_rad(degrees: f64) -> f64 {
        degrees * PI / 180.0
    }

    /// Konvertiert Radiant zu Grad
    pub fn rad_to_deg(radians: f64) -> f64 {
        radians * 180.0 / PI
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_inverse_lerp() {
        assert_abs_diff_eq!(comparison::inverse_lerp(0.0, 8.0, 2.0), 0.25);
        // Leerer Bereich liefert 0 statt NaN
        assert_eq!(comparison::inverse_lerp(3.0, 3.0, 3.0), 0.0);
    }

    #[test]
    fn test_angle_conversion() {
        assert_abs_diff_eq!(angles::deg_to_rad(180.0), constants::PI, epsilon = 1e-12);
        assert_abs_diff_eq!(angles::rad_to_deg(angles::deg_to_rad(42.5)), 42.5, epsilon = 1e-12);
    }

    #[test]
    fn test_lerp() {
        assert!(comparison::nearly_equal(comparison::lerp(0.0, 360.0, 0.5), 180.0));
        assert!(comparison::nearly_equal_eps(comparison::lerp(-1.0, 1.0, 0.75), 0.5, 1e-12));
    }
}
