// src/lib.rs
//! 3D-Kreise mit beliebiger Achse: Punkte auf dem Umfang (optional mit Easing)
//! und zufällige Punkte innerhalb der Kreisscheibe per Rejection Sampling.

pub mod math;

pub use math::prelude;
