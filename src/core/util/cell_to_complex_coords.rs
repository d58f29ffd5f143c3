use crate::core::data::complex::Complex;
use crate::core::data::grid_rect::GridRect;
use crate::core::data::plane_mapping::PlaneMapping;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CellToComplexCoordsError {
    CellOutsideRect { cell: Point, grid_rect: GridRect },
}

impl fmt::Display for CellToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellOutsideRect { cell, grid_rect } => {
                write!(
                    f,
                    "cell (x: {}, y: {}) is outside the grid with coords top-left: (x: {}, y: {}) bottom-right: (x: {}, y: {})",
                    cell.x,
                    cell.y,
                    grid_rect.top_left().x,
                    grid_rect.top_left().y,
                    grid_rect.bottom_right().x,
                    grid_rect.bottom_right().y
                )
            }
        }
    }
}

impl Error for CellToComplexCoordsError {}

pub fn cell_to_complex_coords(
    cell: Point,
    grid_rect: GridRect,
    mapping: PlaneMapping,
) -> Result<Complex, CellToComplexCoordsError> {
    if !grid_rect.contains_point(cell) {
        return Err(CellToComplexCoordsError::CellOutsideRect { cell, grid_rect });
    }

    Ok(mapping.map(cell))
}
