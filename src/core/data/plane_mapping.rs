use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PlaneMappingError {
    InvalidScale { real: f64, imag: f64 },
}

impl fmt::Display for PlaneMappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScale { real, imag } => {
                write!(
                    f,
                    "cells per unit must be finite and positive: real {}, imag {}",
                    real, imag
                )
            }
        }
    }
}

impl Error for PlaneMappingError {}

/// Affine map from grid cells onto the complex plane.
///
/// The `origin` cell lands on `0 + 0i`; each step of one cell moves
/// `1 / cells_per_unit` along the matching axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneMapping {
    origin: Point,
    cells_per_unit_real: f64,
    cells_per_unit_imag: f64,
}

impl PlaneMapping {
    pub fn new(
        origin: Point,
        cells_per_unit_real: f64,
        cells_per_unit_imag: f64,
    ) -> Result<Self, PlaneMappingError> {
        let valid = |scale: f64| scale.is_finite() && scale > 0.0;

        if !valid(cells_per_unit_real) || !valid(cells_per_unit_imag) {
            return Err(PlaneMappingError::InvalidScale {
                real: cells_per_unit_real,
                imag: cells_per_unit_imag,
            });
        }

        Ok(Self {
            origin,
            cells_per_unit_real,
            cells_per_unit_imag,
        })
    }

    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    #[must_use]
    pub fn cells_per_unit_real(&self) -> f64 {
        self.cells_per_unit_real
    }

    #[must_use]
    pub fn cells_per_unit_imag(&self) -> f64 {
        self.cells_per_unit_imag
    }

    #[must_use]
    pub fn map(&self, cell: Point) -> Complex {
        Complex {
            real: (cell.x as i64 - self.origin.x as i64) as f64 / self.cells_per_unit_real,
            imag: (cell.y as i64 - self.origin.y as i64) as f64 / self.cells_per_unit_imag,
        }
    }
}
