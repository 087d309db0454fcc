// src/math/types/direction.rs

use crate::math::error::{MathError, MathResult};
use bevy::math::DVec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Symbolische Richtung im Block-Raster: die 6 Seiten, 12 Kanten und 8 Ecken.
///
/// Konvention: Norden = -Z, Süden = +Z, Osten = +X, Westen = -X, Oben = +Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    North,
    South,
    East,
    West,
    Up,
    Down,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
    NorthUp,
    NorthDown,
    SouthUp,
    SouthDown,
    EastUp,
    EastDown,
    WestUp,
    WestDown,
    NorthEastUp,
    NorthEastDown,
    NorthWestUp,
    NorthWestDown,
    SouthEastUp,
    SouthEastDown,
    SouthWestUp,
    SouthWestDown,
}

impl Direction {
    pub const ALL: [Direction; 26] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Up,
        Direction::Down,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthUp,
        Direction::NorthDown,
        Direction::SouthUp,
        Direction::SouthDown,
        Direction::EastUp,
        Direction::EastDown,
        Direction::WestUp,
        Direction::WestDown,
        Direction::NorthEastUp,
        Direction::NorthEastDown,
        Direction::NorthWestUp,
        Direction::NorthWestDown,
        Direction::SouthEastUp,
        Direction::SouthEastDown,
        Direction::SouthWestUp,
        Direction::SouthWestDown,
    ];

    /// Rasterversatz (x, y, z) der Richtung, jede Komponente in {-1, 0, 1}
    pub const fn offsets(self) -> (i8, i8, i8) {
        match self {
            Direction::North => (0, 0, -1),
            Direction::South => (0, 0, 1),
            Direction::East => (1, 0, 0),
            Direction::West => (-1, 0, 0),
            Direction::Up => (0, 1, 0),
            Direction::Down => (0, -1, 0),
            Direction::NorthEast => (1, 0, -1),
            Direction::NorthWest => (-1, 0, -1),
            Direction::SouthEast => (1, 0, 1),
            Direction::SouthWest => (-1, 0, 1),
            Direction::NorthUp => (0, 1, -1),
            Direction::NorthDown => (0, -1, -1),
            Direction::SouthUp => (0, 1, 1),
            Direction::SouthDown => (0, -1, 1),
            Direction::EastUp => (1, 1, 0),
            Direction::EastDown => (1, -1, 0),
            Direction::WestUp => (-1, 1, 0),
            Direction::WestDown => (-1, -1, 0),
            Direction::NorthEastUp => (1, 1, -1),
            Direction::NorthEastDown => (1, -1, -1),
            Direction::NorthWestUp => (-1, 1, -1),
            Direction::NorthWestDown => (-1, -1, -1),
            Direction::SouthEastUp => (1, 1, 1),
            Direction::SouthEastDown => (1, -1, 1),
            Direction::SouthWestUp => (-1, 1, 1),
            Direction::SouthWestDown => (-1, -1, 1),
        }
    }

    /// Einheitsvektor der Richtung. Kanten und Ecken werden normalisiert.
    pub fn to_vector(self) -> DVec3 {
        let (x, y, z) = self.offsets();
        DVec3::new(x as f64, y as f64, z as f64).normalize()
    }

    /// Die entgegengesetzte Richtung
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::NorthEast => Direction::SouthWest,
            Direction::NorthWest => Direction::SouthEast,
            Direction::SouthEast => Direction::NorthWest,
            Direction::SouthWest => Direction::NorthEast,
            Direction::NorthUp => Direction::SouthDown,
            Direction::NorthDown => Direction::SouthUp,
            Direction::SouthUp => Direction::NorthDown,
            Direction::SouthDown => Direction::NorthUp,
            Direction::EastUp => Direction::WestDown,
            Direction::EastDown => Direction::WestUp,
            Direction::WestUp => Direction::EastDown,
            Direction::WestDown => Direction::EastUp,
            Direction::NorthEastUp => Direction::SouthWestDown,
            Direction::NorthEastDown => Direction::SouthWestUp,
            Direction::NorthWestUp => Direction::SouthEastDown,
            Direction::NorthWestDown => Direction::SouthEastUp,
            Direction::SouthEastUp => Direction::NorthWestDown,
            Direction::SouthEastDown => Direction::NorthWestUp,
            Direction::SouthWestUp => Direction::NorthEastDown,
            Direction::SouthWestDown => Direction::NorthEastUp,
        }
    }

    /// Name im Stil `NORTH_EAST_UP`
    pub const fn name(self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::South => "SOUTH",
            Direction::East => "EAST",
            Direction::West => "WEST",
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::NorthEast => "NORTH_EAST",
            Direction::NorthWest => "NORTH_WEST",
            Direction::SouthEast => "SOUTH_EAST",
            Direction::SouthWest => "SOUTH_WEST",
            Direction::NorthUp => "NORTH_UP",
            Direction::NorthDown => "NORTH_DOWN",
            Direction::SouthUp => "SOUTH_UP",
            Direction::SouthDown => "SOUTH_DOWN",
            Direction::EastUp => "EAST_UP",
            Direction::EastDown => "EAST_DOWN",
            Direction::WestUp => "WEST_UP",
            Direction::WestDown => "WEST_DOWN",
            Direction::NorthEastUp => "NORTH_EAST_UP",
            Direction::NorthEastDown => "NORTH_EAST_DOWN",
            Direction::NorthWestUp => "NORTH_WEST_UP",
            Direction::NorthWestDown => "NORTH_WEST_DOWN",
            Direction::SouthEastUp => "SOUTH_EAST_UP",
            Direction::SouthEastDown => "SOUTH_EAST_DOWN",
            Direction::SouthWestUp => "SOUTH_WEST_UP",
            Direction::SouthWestDown => "SOUTH_WEST_DOWN",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = MathError;

    /// Groß-/Kleinschreibung egal, `-` und Leerzeichen zählen als `_`
    fn from_str(s: &str) -> MathResult<Self> {
        let normalized = s.trim().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|direction| direction.name().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| MathError::UnknownDirection {
                name: s.to_string(),
            })
    }
}
