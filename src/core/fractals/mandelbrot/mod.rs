pub mod algorithm;
pub mod errors;
pub mod glyph_maps;
pub mod mandelbrot_config;
