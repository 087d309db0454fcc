// src/math/types/mod.rs
pub mod direction;

pub use direction::*;

// Re-export der externen Vektor-Typen
pub use bevy::math::DVec3;

// Einheitlicher Punkt-Typ für das gesamte Modul (doppelte Genauigkeit)
pub type Point3D = DVec3;
