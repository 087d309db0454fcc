// src/math/geometry/circle/config.rs
use crate::math::{
    easing::{CustomEase, EaseType},
    error::{MathError, MathResult},
    utils::constants,
};
use bevy::log::debug;
use serde::{Deserialize, Serialize};

/// Parameter für die Verteilung von Punkten auf dem Umfang
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircumferenceConfig {
    /// Anzahl der Punkte
    pub count: usize,
    /// Phasenversatz in Grad
    pub offset: f64,
    pub ease: EaseType,
    /// Stärke der Easing-Kurve (0 = linear, 1 = volle Kurve)
    pub strength: f64,
}

impl CircumferenceConfig {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_ease(mut self, ease: EaseType) -> Self {
        self.ease = ease;
        self
    }

    pub fn with_strength(mut self, strength: f64) -> Self {
        self.strength = strength;
        self
    }

    /// Konkrete Easing-Funktion aus Kurve und Stärke
    pub fn resolved_ease(&self) -> CustomEase {
        self.ease.with_strength(self.strength)
    }

    pub fn validate(&self) -> MathResult<()> {
        if !self.offset.is_finite() {
            debug!("CircumferenceConfig rejected: offset = {}", self.offset);
            return Err(MathError::InvalidConfiguration {
                message: "Offset must be a finite number of degrees".to_string(),
            });
        }

        if !self.strength.is_finite() {
            debug!("CircumferenceConfig rejected: strength = {}", self.strength);
            return Err(MathError::InvalidConfiguration {
                message: "Ease strength must be finite".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for CircumferenceConfig {
    fn default() -> Self {
        Self {
            count: 0,
            offset: 0.0,
            ease: EaseType::default(),
            strength: 1.0,
        }
    }
}

/// Größe des achsenparallelen Würfels, aus dem Kandidaten gezogen werden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingBounds {
    /// Halbe Kantenlänge = Radius. Enthält die Scheibe bei jeder Ausrichtung,
    /// bei achsenparallelen Kreisen liegt die Akzeptanzrate bei π/4.
    #[default]
    Enclosing,
    /// Halbe Kantenlänge = Radius / √2. Das Quadrat liegt bei achsenparallelen
    /// Kreisen komplett in der Scheibe, der Rand der Scheibe wird nie erreicht.
    Inscribed,
}

impl SamplingBounds {
    pub fn half_side(self, radius: f64) -> f64 {
        match self {
            SamplingBounds::Enclosing => radius,
            SamplingBounds::Inscribed => radius / constants::ROOT_TWO,
        }
    }
}

/// Parameter für das Rejection Sampling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Maximale Anzahl an Versuchen pro Punkt
    pub max_attempts: usize,
    pub seed: Option<u64>,
    pub bounds: SamplingBounds,
}

impl SamplingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_bounds(mut self, bounds: SamplingBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn validate(&self) -> MathResult<()> {
        if self.max_attempts == 0 {
            debug!("SamplingConfig rejected: max_attempts = 0");
            return Err(MathError::InvalidConfiguration {
                message: "Need at least 1 sampling attempt".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            max_attempts: constants::DEFAULT_MAX_SAMPLING_ATTEMPTS,
            seed: None,
            bounds: SamplingBounds::default(),
        }
    }
}
