mod controllers;
mod core;
mod presenters;
mod storage;

pub use controllers::ascii::AsciiController;
pub use controllers::ports::text_presenter::TextPresenterPort;
pub use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
pub use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_text_buffer::generate_text_buffer::{
    generate_text_buffer, GenerateTextBufferError,
};
pub use crate::core::actions::generate_text_buffer::ports::glyph_map::GlyphMap;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::grid_rect::{GridRect, GridRectError};
pub use crate::core::data::plane_mapping::{PlaneMapping, PlaneMappingError};
pub use crate::core::data::point::Point;
pub use crate::core::data::text_buffer::{TextBuffer, TextBufferError};
pub use crate::core::fractals::mandelbrot::algorithm::{
    escape_sample, EscapeSample, MandelbrotDistanceAlgorithm,
};
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::fractals::mandelbrot::glyph_maps::distance_ramp::MandelbrotDistanceRamp;
pub use crate::core::fractals::mandelbrot::glyph_maps::errors::MandelbrotGlyphMapError;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
pub use crate::core::util::cell_to_complex_coords::CellToComplexCoordsError;
pub use presenters::console::stdout::StdoutPresenter;
pub use storage::write_text::write_text;
