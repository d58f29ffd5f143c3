use crate::core::data::grid_rect::GridRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum TextBufferError {
    CellOutsideBounds {
        cell: Point,
        grid_rect: GridRect,
    },
    BoundsMismatch {
        grid_rect_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for TextBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                grid_rect_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "grid rect size {} does not match buffer size {}",
                    grid_rect_size, buffer_size
                )
            }
            Self::CellOutsideBounds { cell, grid_rect } => {
                write!(
                    f,
                    "cell at x:{}, y:{} outside of GridRect bounds top:{}, left:{}, bottom:{}, right:{}",
                    cell.x,
                    cell.y,
                    grid_rect.top_left().y,
                    grid_rect.top_left().x,
                    grid_rect.bottom_right().y,
                    grid_rect.bottom_right().x
                )
            }
        }
    }
}

impl Error for TextBufferError {}

/// Row-major glyphs covering a [`GridRect`].
#[derive(Debug, Clone, PartialEq)]
pub struct TextBuffer {
    grid_rect: GridRect,
    glyphs: Vec<char>,
}

impl TextBuffer {
    pub fn from_data(grid_rect: GridRect, glyphs: Vec<char>) -> Result<Self, TextBufferError> {
        if grid_rect.cell_count() != glyphs.len() {
            return Err(TextBufferError::BoundsMismatch {
                grid_rect_size: grid_rect.cell_count(),
                buffer_size: glyphs.len(),
            });
        }

        Ok(Self { grid_rect, glyphs })
    }

    #[must_use]
    pub fn grid_rect(&self) -> GridRect {
        self.grid_rect
    }

    #[must_use]
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    pub fn glyph(&self, cell: Point) -> Result<char, TextBufferError> {
        Ok(self.glyphs[self.index_of(cell)?])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.glyphs.chunks(self.grid_rect.columns() as usize)
    }

    fn index_of(&self, cell: Point) -> Result<usize, TextBufferError> {
        if !self.grid_rect.contains_point(cell) {
            return Err(TextBufferError::CellOutsideBounds {
                cell,
                grid_rect: self.grid_rect,
            });
        }

        let column = (cell.x as i64 - self.grid_rect.top_left().x as i64) as usize;
        let row = (cell.y as i64 - self.grid_rect.top_left().y as i64) as usize;

        Ok(row * self.grid_rect.columns() as usize + column)
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for glyph in row {
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
