//! Circle geometry with a lazily cached area.
//!
//! # Responsibility
//! - Hold a validated non-negative radius.
//! - Derive diameter on read and cache the area until invalidated.
//!
//! # Invariants
//! - `radius >= 0` and finite at all times, including construction.
//! - `diameter()` is always exactly `2 * radius`.
//! - Every radius-affecting write clears the cache, so `area()` never
//!   serves a stale value.

use crate::model::error::{require_finite, InvalidArgument};
use serde::{Deserialize, Serialize};

/// Circle with validated radius mutation and a lazy area cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "CircleShapeWire", try_from = "CircleShapeWire")]
pub struct CircleShape {
    radius: f64,
    area_cache: Option<f64>,
}

impl CircleShape {
    /// Creates a circle, applying the same rule as [`CircleShape::set_radius`].
    ///
    /// # Errors
    /// - [`InvalidArgument::NonFinite`] for a NaN or infinite radius.
    /// - [`InvalidArgument::NegativeRadius`] for `radius < 0`.
    pub fn new(radius: f64) -> Result<Self, InvalidArgument> {
        check_radius(radius)?;
        Ok(Self {
            radius,
            area_cache: None,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Validates and stores a new radius, clearing the cached area.
    pub fn set_radius(&mut self, radius: f64) -> Result<(), InvalidArgument> {
        check_radius(radius)?;
        self.radius = radius;
        self.area_cache = None;
        Ok(())
    }

    /// Always exactly `2 * radius`.
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    /// Sets `radius = diameter / 2`, clearing the cached area.
    ///
    /// Applies the full radius rule, including non-negativity, so the
    /// two mutation paths cannot disagree about the invariant.
    ///
    /// # Errors
    /// - [`InvalidArgument::NonFinite`] for a NaN or infinite diameter.
    /// - [`InvalidArgument::NegativeDiameter`] for `diameter < 0`.
    pub fn set_diameter(&mut self, diameter: f64) -> Result<(), InvalidArgument> {
        require_finite("diameter", diameter)?;
        if diameter < 0.0 {
            return Err(InvalidArgument::NegativeDiameter { diameter });
        }
        self.radius = diameter / 2.0;
        self.area_cache = None;
        Ok(())
    }

    /// Area of the circle, `π * radius²`.
    ///
    /// # Contract
    /// - Computes once and reuses the cached value on later reads.
    /// - Any intervening `set_radius`/`set_diameter` forces a
    ///   recomputation against the current radius.
    pub fn area(&mut self) -> f64 {
        match self.area_cache {
            Some(area) => area,
            None => {
                let area = std::f64::consts::PI * self.radius * self.radius;
                self.area_cache = Some(area);
                area
            }
        }
    }

    /// Read-only view of the cache, `None` when invalidated or never filled.
    pub fn cached_area(&self) -> Option<f64> {
        self.area_cache
    }
}

/// Serialization shape; the cache never hits the wire.
#[derive(Debug, Serialize, Deserialize)]
struct CircleShapeWire {
    radius: f64,
}

impl From<CircleShape> for CircleShapeWire {
    fn from(circle: CircleShape) -> Self {
        Self {
            radius: circle.radius,
        }
    }
}

impl TryFrom<CircleShapeWire> for CircleShape {
    type Error = InvalidArgument;

    fn try_from(wire: CircleShapeWire) -> Result<Self, Self::Error> {
        CircleShape::new(wire.radius)
    }
}

fn check_radius(radius: f64) -> Result<(), InvalidArgument> {
    require_finite("radius", radius)?;
    if radius < 0.0 {
        return Err(InvalidArgument::NegativeRadius { radius });
    }
    Ok(())
}
