use crate::core::{
    data::{grid_rect::GridRect, plane_mapping::PlaneMapping, point::Point},
    fractals::mandelbrot::{
        algorithm::MandelbrotDistanceAlgorithm, errors::MandelbrotError,
        glyph_maps::distance_ramp::MandelbrotDistanceRamp,
    },
};

pub const DEFAULT_COLUMNS: u32 = 120;
pub const DEFAULT_ROWS: u32 = 51;
pub const DEFAULT_ORIGIN: Point = Point { x: 85, y: 25 };
pub const DEFAULT_CELLS_PER_UNIT_REAL: f64 = 40.0;
pub const DEFAULT_CELLS_PER_UNIT_IMAG: f64 = 20.0;
pub const DEFAULT_MAX_ITERATIONS: u32 = 25;
pub const DEFAULT_DISTANCE_THRESHOLD: f64 = 0.004;

/// Everything needed to render one ASCII frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    grid_rect: GridRect,
    mapping: PlaneMapping,
    max_iterations: u32,
    distance_threshold: f64,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            grid_rect: GridRect::new(
                Point { x: 0, y: 0 },
                Point {
                    x: DEFAULT_COLUMNS as i32 - 1,
                    y: DEFAULT_ROWS as i32 - 1,
                },
            )
            .expect("default grid is non-empty"),
            mapping: PlaneMapping::new(
                DEFAULT_ORIGIN,
                DEFAULT_CELLS_PER_UNIT_REAL,
                DEFAULT_CELLS_PER_UNIT_IMAG,
            )
            .expect("default plane mapping is valid"),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            distance_threshold: DEFAULT_DISTANCE_THRESHOLD,
        }
    }
}

impl MandelbrotConfig {
    pub fn new(
        columns: u32,
        rows: u32,
        mapping: PlaneMapping,
        max_iterations: u32,
        distance_threshold: f64,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        if !distance_threshold.is_finite() || distance_threshold < 0.0 {
            return Err(MandelbrotError::InvalidDistanceThreshold {
                threshold: distance_threshold,
            });
        }

        Ok(Self {
            grid_rect: GridRect::with_size(columns, rows)?,
            mapping,
            max_iterations,
            distance_threshold,
        })
    }

    #[must_use]
    pub fn grid_rect(&self) -> GridRect {
        self.grid_rect
    }

    #[must_use]
    pub fn mapping(&self) -> PlaneMapping {
        self.mapping
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn distance_threshold(&self) -> f64 {
        self.distance_threshold
    }

    pub fn build_algorithm(&self) -> Result<MandelbrotDistanceAlgorithm, MandelbrotError> {
        MandelbrotDistanceAlgorithm::new(self.grid_rect, self.mapping, self.max_iterations)
    }

    #[must_use]
    pub fn build_glyph_map(&self) -> MandelbrotDistanceRamp {
        MandelbrotDistanceRamp::new(self.max_iterations, self.distance_threshold)
    }
}
