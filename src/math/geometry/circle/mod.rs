// src/math/geometry/circle/mod.rs

pub mod config;
pub mod core;
pub mod sampling;

pub use self::config::{CircumferenceConfig, SamplingBounds, SamplingConfig};
pub use self::core::{Circle, OrthonormalBasis, ReferenceAxis};
pub use self::sampling::{CircleSampler, InteriorSample};
