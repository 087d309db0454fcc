// src/math/geometry/mod.rs

pub mod circle;

// Re-Exporte für einen schnellen Zugriff auf die Kreis-Typen
pub use self::circle::{
    Circle, CircleSampler, CircumferenceConfig, InteriorSample, OrthonormalBasis, ReferenceAxis,
    SamplingBounds, SamplingConfig,
};
