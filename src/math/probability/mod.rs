// src/math/probability/mod.rs
pub mod random;

pub use random::RandomSource;
