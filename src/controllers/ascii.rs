use std::time::Instant;

use log::{debug, info};

use crate::controllers::ports::text_presenter::TextPresenterPort;
use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::actions::generate_text_buffer::generate_text_buffer::generate_text_buffer;
use crate::core::actions::generate_text_buffer::ports::glyph_map::GlyphMap;
use crate::core::data::text_buffer::TextBuffer;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

pub struct AsciiController<P: TextPresenterPort> {
    presenter: P,
    config: MandelbrotConfig,
    buffer: Option<TextBuffer>,
}

impl<P: TextPresenterPort> AsciiController<P> {
    pub fn new(presenter: P, config: MandelbrotConfig) -> Self {
        Self {
            presenter,
            config,
            buffer: None,
        }
    }

    pub fn generate(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let grid_rect = self.config.grid_rect();

        info!(
            "Rendering Mandelbrot set: {}x{} cells, max iterations {}",
            grid_rect.columns(),
            grid_rect.rows(),
            self.config.max_iterations()
        );
        debug!("Threads: {}", rayon::current_num_threads());

        let algorithm = self.config.build_algorithm()?;
        let start = Instant::now();
        let samples = generate_fractal_rayon(grid_rect, &algorithm)?;

        debug!("Duration: {:?}", start.elapsed());

        let glyph_map = self.config.build_glyph_map();
        debug!("Glyph map: {}", glyph_map.display_name());

        self.buffer = Some(generate_text_buffer(samples, &glyph_map, grid_rect)?);

        Ok(())
    }

    pub fn present(&self) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer)?
        }

        Ok(())
    }

    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.generate()?;
        self.present()?;

        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&TextBuffer> {
        self.buffer.as_ref()
    }
}
