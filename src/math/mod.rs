pub mod easing;
pub mod error;
pub mod geometry;
pub mod probability;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{MathError, MathResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        easing::{CustomEase, Ease, EaseType},
        error::{MathError, MathResult},
        geometry::circle::{
            Circle, CircleSampler, CircumferenceConfig, InteriorSample, OrthonormalBasis,
            ReferenceAxis, SamplingBounds, SamplingConfig,
        },
        probability::RandomSource,
        types::*,
    };
}
