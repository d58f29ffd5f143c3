use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::grid_rect::GridRect;
use crate::core::data::plane_mapping::PlaneMapping;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::cell_to_complex_coords::{
    cell_to_complex_coords, CellToComplexCoordsError,
};

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Result of iterating one point of the plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeSample {
    pub iterations: u32,
    /// Distance estimate to the set boundary, `None` when the estimate is
    /// not a finite number.
    pub distance: Option<f64>,
}

/// Iterates `z -> z² + c` alongside its derivative `dz -> 2·z·dz + 1`
/// until `|z|² >= 4` or `max_iterations` steps have run.
#[must_use]
pub fn escape_sample(c: Complex, max_iterations: u32) -> EscapeSample {
    let mut z = Complex::ZERO;
    let mut dz = Complex::ONE;
    let mut iterations = 0;

    while z.magnitude_squared() < ESCAPE_RADIUS_SQUARED && iterations < max_iterations {
        dz = z * dz * 2.0 + Complex::ONE;
        z = z * z + c;
        iterations += 1;
    }

    EscapeSample {
        iterations,
        distance: distance_estimate(z, dz),
    }
}

fn distance_estimate(z: Complex, dz: Complex) -> Option<f64> {
    let modulus = z.magnitude();
    let distance = modulus * modulus.ln() / dz.magnitude();

    distance.is_finite().then_some(distance)
}

#[derive(Debug, PartialEq)]
pub struct MandelbrotDistanceAlgorithm {
    grid_rect: GridRect,
    mapping: PlaneMapping,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotDistanceAlgorithm {
    type Success = EscapeSample;
    type Failure = CellToComplexCoordsError;

    fn compute(&self, cell: Point) -> Result<Self::Success, Self::Failure> {
        let c = cell_to_complex_coords(cell, self.grid_rect, self.mapping)?;

        Ok(escape_sample(c, self.max_iterations))
    }
}

impl MandelbrotDistanceAlgorithm {
    pub fn new(
        grid_rect: GridRect,
        mapping: PlaneMapping,
        max_iterations: u32,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self { grid_rect, mapping, max_iterations })
    }
}
