// src/math/geometry/circle/core.rs

use super::config::CircumferenceConfig;
use crate::math::{
    easing::{Ease, EaseType},
    error::{MathError, MathResult},
    types::{Direction, Point3D},
    utils::{angles, comparison, constants},
};
use bevy::log::trace;

/// Referenzvektor, aus dem die Basis der Kreisebene gebildet wurde
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceAxis {
    /// Standardfall `(1, 0, 0)`
    X,
    /// Ausweichvektor `(0, 1, 0)`, wenn die Achse fast parallel zu X liegt
    Y,
}

impl ReferenceAxis {
    pub fn vector(self) -> Point3D {
        match self {
            ReferenceAxis::X => Point3D::X,
            ReferenceAxis::Y => Point3D::Y,
        }
    }
}

/// Zwei orthonormale Vektoren, die die Ebene senkrecht zur Achse aufspannen.
///
/// Winkel 0 liegt auf `ortho1`, Winkel 90 auf `ortho2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthonormalBasis {
    pub ortho1: Point3D,
    pub ortho2: Point3D,
    pub reference: ReferenceAxis,
}

impl OrthonormalBasis {
    /// Erwartet eine normalisierte Achse
    pub fn for_axis(axis: Point3D) -> Self {
        let reference = if axis.dot(Point3D::X).abs() > constants::REFERENCE_PARALLEL_THRESHOLD {
            trace!("Axis {axis} is nearly parallel to X, using Y as reference");
            ReferenceAxis::Y
        } else {
            ReferenceAxis::X
        };

        let ortho1 = axis.cross(reference.vector()).normalize();
        let ortho2 = axis.cross(ortho1).normalize();

        Self {
            ortho1,
            ortho2,
            reference,
        }
    }
}

/// Ein Kreis im 3D-Raum: Mittelpunkt, Radius und Achse (Normale der Kreisebene).
///
/// Die Achse ist immer normalisiert. Radius wird nicht geprüft: 0 liefert nur den
/// Mittelpunkt, ein negativer Radius spiegelt die Punkte am Mittelpunkt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    centre: Point3D,
    radius: f64,
    axis: Point3D,
}

impl Circle {
    /// Erstellt einen Kreis. Schlägt fehl, wenn sich die Achse nicht normalisieren lässt.
    pub fn new(centre: Point3D, radius: f64, axis: Point3D) -> MathResult<Self> {
        Ok(Self {
            centre,
            radius,
            axis: normalize_axis(axis)?,
        })
    }

    /// Erstellt einen Kreis, dessen Achse in die gegebene Richtung zeigt
    pub fn from_direction(centre: Point3D, radius: f64, direction: Direction) -> Self {
        Self {
            centre,
            radius,
            axis: direction.to_vector(),
        }
    }

    pub fn centre(&self) -> Point3D {
        self.centre
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Normalisierte Achse (Kopie)
    pub fn axis(&self) -> Point3D {
        self.axis
    }

    pub fn set_centre(&mut self, centre: Point3D) {
        self.centre = centre;
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }

    /// Setzt die Achse und normalisiert sie. Bei Fehler bleibt die alte Achse erhalten.
    pub fn set_axis(&mut self, axis: Point3D) -> MathResult<()> {
        self.axis = normalize_axis(axis)?;
        Ok(())
    }

    pub fn with_centre(mut self, centre: Point3D) -> Self {
        self.centre = centre;
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_axis(mut self, axis: Point3D) -> MathResult<Self> {
        self.set_axis(axis)?;
        Ok(self)
    }

    /// Basis der Kreisebene. Wird bei jedem Aufruf neu berechnet.
    pub fn basis(&self) -> OrthonormalBasis {
        OrthonormalBasis::for_axis(self.axis)
    }

    /// Punkt auf dem Umfang beim Winkel `angle` (Grad)
    pub fn point_on_circumference(&self, angle: f64) -> Point3D {
        self.point_on_circumference_offset(angle, 0.0)
    }

    /// Punkt auf dem Umfang beim Winkel `angle + offset` (beides in Grad)
    pub fn point_on_circumference_offset(&self, angle: f64, offset: f64) -> Point3D {
        self.point_with_basis(&self.basis(), angle, offset)
    }

    /// `count` gleichmäßig verteilte Punkte mit linearem Easing
    pub fn points_on_circumference(&self, count: usize) -> Vec<Point3D> {
        self.points_on_circumference_eased(count, 0.0, &EaseType::default())
    }

    pub fn points_on_circumference_offset(&self, count: usize, offset: f64) -> Vec<Point3D> {
        self.points_on_circumference_eased(count, offset, &EaseType::default())
    }

    /// Punkte nach Konfiguration (Anzahl, Versatz, Kurve und Stärke)
    pub fn points_on_circumference_with(&self, config: &CircumferenceConfig) -> MathResult<Vec<Point3D>> {
        config.validate()?;
        Ok(self.points_on_circumference_eased(config.count, config.offset, &config.resolved_ease()))
    }

    /// Erzeugt `count` Punkte in Reihenfolge des Index `i`.
    ///
    /// Der Fortschritt `i / count` liegt in `[0, 1)`, daher gibt es keinen doppelten
    /// Punkt bei 360°. Die Easing-Funktion bildet ihn auf einen Winkel in `[0, 360)` ab.
    pub fn points_on_circumference_eased<E>(&self, count: usize, offset: f64, ease: &E) -> Vec<Point3D>
    where
        E: Ease + ?Sized,
    {
        let basis = self.basis();

        (0..count)
            .map(|i| {
                let progress = comparison::inverse_lerp(0.0, count as f64, i as f64);
                let eased_angle = ease.ease(0.0, constants::FULL_TURN_DEGREES, progress);
                self.point_with_basis(&basis, eased_angle, offset)
            })
            .collect()
    }

    /// Liegt die Projektion des Punktes auf die Kreisebene innerhalb der Scheibe?
    /// Der Abstand entlang der Achse spielt keine Rolle.
    pub fn contains_projected(&self, point: Point3D) -> bool {
        let relative = point - self.centre;
        let projected = relative - self.axis * relative.dot(self.axis);
        projected.length_squared() <= self.radius * self.radius
    }

    fn point_with_basis(&self, basis: &OrthonormalBasis, angle: f64, offset: f64) -> Point3D {
        let phase = angles::deg_to_rad(angle) + angles::deg_to_rad(offset);
        let (sin, cos) = phase.sin_cos();

        self.centre + basis.ortho1 * (self.radius * cos) + basis.ortho2 * (self.radius * sin)
    }
}

fn normalize_axis(axis: Point3D) -> MathResult<Point3D> {
    axis.try_normalize().ok_or(MathError::DegenerateAxis)
}
