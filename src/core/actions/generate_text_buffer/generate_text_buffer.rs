use crate::core::actions::generate_text_buffer::ports::glyph_map::GlyphMap;
use crate::core::data::grid_rect::GridRect;
use crate::core::data::text_buffer::{TextBuffer, TextBufferError};
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum GenerateTextBufferError<E> {
    GlyphMap(E),
    TextBuffer(TextBufferError),
}

impl<E: fmt::Display> fmt::Display for GenerateTextBufferError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GlyphMap(err) => write!(f, "glyph map error: {}", err),
            Self::TextBuffer(err) => write!(f, "text buffer error: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for GenerateTextBufferError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::GlyphMap(err) => Some(err),
            Self::TextBuffer(err) => Some(err),
        }
    }
}

/// Maps one computed value per cell to a glyph, keeping row-major order.
pub fn generate_text_buffer<T, GMap: GlyphMap<T>>(
    input: Vec<T>,
    mapper: &GMap,
    grid_rect: GridRect,
) -> Result<TextBuffer, GenerateTextBufferError<GMap::Failure>> {
    let glyphs = input
        .into_iter()
        .map(|value| mapper.map(value))
        .collect::<Result<Vec<char>, _>>()
        .map_err(GenerateTextBufferError::GlyphMap)?;

    TextBuffer::from_data(grid_rect, glyphs).map_err(GenerateTextBufferError::TextBuffer)
}
