use crate::core::actions::generate_text_buffer::ports::glyph_map::GlyphMap;
use crate::core::fractals::mandelbrot::algorithm::EscapeSample;
use crate::core::fractals::mandelbrot::glyph_maps::errors::MandelbrotGlyphMapError;

pub const DEFAULT_GLYPH: char = '.';
pub const BOUNDARY_GLYPH: char = 'X';
pub const SLOW_ESCAPE_GLYPH: char = '-';

/// Exact iteration counts with their own glyph.
const ITERATION_GLYPHS: [(u32, char); 3] = [(1, ':'), (2, '='), (3, '*')];

/// Iterations from which a cell counts as a slow escape.
const SLOW_ESCAPE_ITERATIONS: u32 = 5;

/// Shades cells by escape speed, then marks anything inside the set or
/// within `distance_threshold` of its boundary with [`BOUNDARY_GLYPH`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotDistanceRamp {
    max_iterations: u32,
    distance_threshold: f64,
}

impl GlyphMap<EscapeSample> for MandelbrotDistanceRamp {
    type Failure = MandelbrotGlyphMapError;

    fn map(&self, sample: EscapeSample) -> Result<char, Self::Failure> {
        if sample.iterations > self.max_iterations {
            return Err(MandelbrotGlyphMapError::IterationsExceedMax {
                iterations: sample.iterations,
                max_iterations: self.max_iterations,
            });
        }

        let near_boundary = sample
            .distance
            .is_some_and(|distance| distance <= self.distance_threshold);

        if near_boundary || sample.iterations >= self.max_iterations {
            return Ok(BOUNDARY_GLYPH);
        }

        let glyph = ITERATION_GLYPHS
            .iter()
            .find(|(iterations, _)| *iterations == sample.iterations)
            .map(|&(_, glyph)| glyph)
            .unwrap_or(if sample.iterations >= SLOW_ESCAPE_ITERATIONS {
                SLOW_ESCAPE_GLYPH
            } else {
                DEFAULT_GLYPH
            });

        Ok(glyph)
    }

    fn display_name(&self) -> &str {
        "Distance Ramp"
    }
}

impl MandelbrotDistanceRamp {
    #[must_use]
    pub fn new(max_iterations: u32, distance_threshold: f64) -> Self {
        Self {
            max_iterations,
            distance_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> MandelbrotDistanceRamp {
        MandelbrotDistanceRamp::new(25, 0.004)
    }

    fn sample(iterations: u32, distance: f64) -> EscapeSample {
        EscapeSample {
            iterations,
            distance: Some(distance),
        }
    }

    #[test]
    fn test_iteration_glyphs() {
        let ramp = ramp();

        assert_eq!(ramp.map(sample(1, 1.0)), Ok(':'));
        assert_eq!(ramp.map(sample(2, 1.0)), Ok('='));
        assert_eq!(ramp.map(sample(3, 1.0)), Ok('*'));
    }

    #[test]
    fn test_four_iterations_keeps_default() {
        assert_eq!(ramp().map(sample(4, 1.0)), Ok('.'));
    }

    #[test]
    fn test_zero_iterations_keeps_default() {
        assert_eq!(ramp().map(sample(0, 1.0)), Ok('.'));
    }

    #[test]
    fn test_slow_escape_is_dash() {
        assert_eq!(ramp().map(sample(5, 1.0)), Ok('-'));
        assert_eq!(ramp().map(sample(24, 0.0041)), Ok('-'));
    }

    #[test]
    fn test_close_distance_overrides_every_other_rule() {
        let ramp = ramp();

        for iterations in 0..=25 {
            assert_eq!(ramp.map(sample(iterations, 0.004)), Ok('X'));
            assert_eq!(ramp.map(sample(iterations, 0.001)), Ok('X'));
        }
    }

    #[test]
    fn test_negative_distance_counts_as_close() {
        assert_eq!(ramp().map(sample(3, -0.5)), Ok('X'));
    }

    #[test]
    fn test_max_iterations_is_boundary_regardless_of_distance() {
        assert_eq!(ramp().map(sample(25, 10.0)), Ok('X'));
        assert_eq!(
            ramp().map(EscapeSample {
                iterations: 25,
                distance: None
            }),
            Ok('X')
        );
    }

    #[test]
    fn test_missing_distance_falls_through_to_iterations() {
        let ramp = ramp();
        let no_distance = |iterations| EscapeSample {
            iterations,
            distance: None,
        };

        assert_eq!(ramp.map(no_distance(1)), Ok(':'));
        assert_eq!(ramp.map(no_distance(3)), Ok('*'));
        assert_eq!(ramp.map(no_distance(4)), Ok('.'));
        assert_eq!(ramp.map(no_distance(9)), Ok('-'));
    }

    #[test]
    fn test_iterations_above_max_fail() {
        assert_eq!(
            ramp().map(sample(26, 1.0)),
            Err(MandelbrotGlyphMapError::IterationsExceedMax {
                iterations: 26,
                max_iterations: 25
            })
        );
    }
}
