// src/math/easing.rs

use crate::math::utils::{comparison, constants::PI};
use serde::{Deserialize, Serialize};

/// Strategie, die einen Fortschritt `t` in einen Wert zwischen `low` und `high` abbildet.
///
/// Der Kreis verlangt nur diesen Vertrag. Ob die Kurve monoton ist, prüft er nicht.
pub trait Ease {
    fn ease(&self, low: f64, high: f64, t: f64) -> f64;
}

// Closures lassen sich direkt als Easing-Strategie einstecken
impl<F> Ease for F
where
    F: Fn(f64, f64, f64) -> f64,
{
    fn ease(&self, low: f64, high: f64, t: f64) -> f64 {
        self(low, high, t)
    }
}

/// Benannte Easing-Kurven
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EaseType {
    #[default]
    Linear,
    /// Quadratisch
    EaseIn,
    EaseOut,
    EaseInOut,
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInExpo,
    EaseOutExpo,
    EaseOutElastic,
    EaseOutBounce,
}

impl EaseType {
    pub const ALL: [EaseType; 14] = [
        EaseType::Linear,
        EaseType::EaseIn,
        EaseType::EaseOut,
        EaseType::EaseInOut,
        EaseType::EaseInSine,
        EaseType::EaseOutSine,
        EaseType::EaseInOutSine,
        EaseType::EaseInCubic,
        EaseType::EaseOutCubic,
        EaseType::EaseInOutCubic,
        EaseType::EaseInExpo,
        EaseType::EaseOutExpo,
        EaseType::EaseOutElastic,
        EaseType::EaseOutBounce,
    ];

    /// Bildet `t` (auf [0, 1] geklemmt) auf den geglätteten Fortschritt ab.
    /// Alle Kurven starten bei 0 und enden bei 1.
    pub fn curve(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EaseType::Linear => t,
            EaseType::EaseIn => t * t,
            EaseType::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            EaseType::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            EaseType::EaseInSine => 1.0 - (t * PI / 2.0).cos(),
            EaseType::EaseOutSine => (t * PI / 2.0).sin(),
            EaseType::EaseInOutSine => -((PI * t).cos() - 1.0) / 2.0,
            EaseType::EaseInCubic => t * t * t,
            EaseType::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            EaseType::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            EaseType::EaseInExpo => {
                if t == 0.0 {
                    0.0
                } else {
                    2.0_f64.powf(10.0 * t - 10.0)
                }
            }
            EaseType::EaseOutExpo => {
                if t == 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f64.powf(-10.0 * t)
                }
            }
            EaseType::EaseOutElastic => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let c4 = 2.0 * PI / 3.0;
                2.0_f64.powf(-10.0 * t) * ((t * 10.0 - 0.75) * c4).sin() + 1.0
            }
            EaseType::EaseOutBounce => {
                let n1 = 7.5625;
                let d1 = 2.75;

                if t < 1.0 / d1 {
                    n1 * t * t
                } else if t < 2.0 / d1 {
                    let t_adj = t - 1.5 / d1;
                    n1 * t_adj * t_adj + 0.75
                } else if t < 2.5 / d1 {
                    let t_adj = t - 2.25 / d1;
                    n1 * t_adj * t_adj + 0.9375
                } else {
                    let t_adj = t - 2.625 / d1;
                    n1 * t_adj * t_adj + 0.984375
                }
            }
        }
    }

    /// Löst Kurve und Stärke zu einer konkreten Easing-Funktion auf.
    ///
    /// Stärke 0 ergibt lineares Verhalten, 1 die reine Kurve, Werte > 1 überzeichnen.
    pub fn with_strength(self, strength: f64) -> CustomEase {
        CustomEase {
            kind: self,
            strength,
        }
    }
}

impl Ease for EaseType {
    fn ease(&self, low: f64, high: f64, t: f64) -> f64 {
        comparison::lerp(low, high, self.curve(t))
    }
}

/// Benannte Kurve mit fester Stärke
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CustomEase {
    pub kind: EaseType,
    pub strength: f64,
}

impl CustomEase {
    pub fn progress(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        comparison::lerp(t, self.kind.curve(t), self.strength)
    }
}

impl Default for CustomEase {
    fn default() -> Self {
        EaseType::default().with_strength(1.0)
    }
}

impl Ease for CustomEase {
    fn ease(&self, low: f64, high: f64, t: f64) -> f64 {
        comparison::lerp(low, high, self.progress(t))
    }
}
