use std::error::Error;
use std::fmt;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridRectError {
    InvalidSize { columns: i64, rows: i64 },
}

impl fmt::Display for GridRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { columns, rows } => {
                write!(
                    f,
                    "grid must have between 1 and {} columns and rows: {}x{}",
                    u32::MAX,
                    columns,
                    rows
                )
            }
        }
    }
}

impl Error for GridRectError {}

/// An inclusive rectangle of character cells.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridRect {
    top_left: Point,
    bottom_right: Point,
}

impl GridRect {
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Self, GridRectError> {
        let columns = (bottom_right.x as i64) - (top_left.x as i64) + 1;
        let rows = (bottom_right.y as i64) - (top_left.y as i64) + 1;

        let valid = 1..=u32::MAX as i64;

        if !valid.contains(&columns) || !valid.contains(&rows) {
            return Err(GridRectError::InvalidSize { columns, rows });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// Grid anchored at the origin, `columns` wide and `rows` tall.
    pub fn with_size(columns: u32, rows: u32) -> Result<Self, GridRectError> {
        if columns == 0 || rows == 0 || columns > i32::MAX as u32 || rows > i32::MAX as u32 {
            return Err(GridRectError::InvalidSize {
                columns: columns as i64,
                rows: rows as i64,
            });
        }

        Self::new(
            Point { x: 0, y: 0 },
            Point {
                x: columns as i32 - 1,
                y: rows as i32 - 1,
            },
        )
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    #[must_use]
    pub fn columns(&self) -> u32 {
        (self.bottom_right.x as i64 - self.top_left.x as i64 + 1) as u32
    }

    #[must_use]
    pub fn rows(&self) -> u32 {
        (self.bottom_right.y as i64 - self.top_left.y as i64 + 1) as u32
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.top_left.x <= point.x
            && self.top_left.y <= point.y
            && self.bottom_right.x >= point.x
            && self.bottom_right.y >= point.y
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.columns() as usize * self.rows() as usize
    }

    /// Cells of row `y`, left to right.
    pub fn row(&self, y: i32) -> impl Iterator<Item = Point> + use<> {
        (self.top_left.x..=self.bottom_right.x).map(move |x| Point { x, y })
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Point> + use<> {
        let rect = *self;

        (rect.top_left.y..=rect.bottom_right.y).flat_map(move |y| rect.row(y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_rect_new_valid() {
        let top_left = Point { x: 0, y: 0 };
        let bottom_right = Point { x: 119, y: 50 };

        let rect = GridRect::new(top_left, bottom_right).unwrap();

        assert_eq!(rect.top_left(), top_left);
        assert_eq!(rect.bottom_right(), bottom_right);
        assert_eq!(rect.columns(), 120);
        assert_eq!(rect.rows(), 51);
        assert_eq!(rect.cell_count(), 6120);
    }

    #[test]
    fn test_with_size_anchors_at_origin() {
        let rect = GridRect::with_size(120, 51).unwrap();

        assert_eq!(rect.top_left(), Point { x: 0, y: 0 });
        assert_eq!(rect.bottom_right(), Point { x: 119, y: 50 });
    }

    #[test]
    fn test_single_cell_grid_is_valid() {
        let rect = GridRect::with_size(1, 1).unwrap();

        assert_eq!(rect.cell_count(), 1);
    }

    #[test]
    fn test_grid_rect_dimensions_must_be_positive() {
        let inverted = GridRect::new(Point { x: 2, y: 2 }, Point { x: -2, y: -2 });
        let zero_columns = GridRect::with_size(0, 10);
        let zero_rows = GridRect::with_size(10, 0);

        assert_eq!(inverted, Err(GridRectError::InvalidSize { columns: -3, rows: -3 }));
        assert_eq!(zero_columns, Err(GridRectError::InvalidSize { columns: 0, rows: 10 }));
        assert_eq!(zero_rows, Err(GridRectError::InvalidSize { columns: 10, rows: 0 }));
    }

    #[test]
    fn test_span_wider_than_u32_is_rejected() {
        let full_width = GridRect::new(
            Point { x: i32::MIN, y: 0 },
            Point { x: i32::MAX, y: 0 },
        );
        let full_height = GridRect::new(
            Point { x: 0, y: i32::MIN },
            Point { x: 0, y: i32::MAX },
        );

        assert_eq!(
            full_width,
            Err(GridRectError::InvalidSize { columns: 1 << 32, rows: 1 })
        );
        assert_eq!(
            full_height,
            Err(GridRectError::InvalidSize { columns: 1, rows: 1 << 32 })
        );
    }

    #[test]
    fn test_dimensions_of_span_past_i32_range() {
        let rect = GridRect::new(
            Point { x: i32::MIN, y: -1 },
            Point { x: 0, y: i32::MAX },
        )
        .unwrap();

        assert_eq!(rect.columns(), (1u32 << 31) + 1);
        assert_eq!(rect.rows(), (1u32 << 31) + 1);
    }

    #[test]
    fn test_grid_rect_contains_point() {
        let rect = GridRect::new(Point { x: -5, y: -5 }, Point { x: 10, y: 10 }).unwrap();

        assert!(rect.contains_point(Point { x: -5, y: -5 }));
        assert!(rect.contains_point(Point { x: 10, y: 10 }));
        assert!(!rect.contains_point(Point { x: 11, y: 0 }));
        assert!(!rect.contains_point(Point { x: 0, y: -6 }));
    }

    #[test]
    fn test_cells_are_row_major() {
        let rect = GridRect::with_size(3, 2).unwrap();
        let cells: Vec<Point> = rect.cells().collect();

        assert_eq!(
            cells,
            vec![
                Point { x: 0, y: 0 },
                Point { x: 1, y: 0 },
                Point { x: 2, y: 0 },
                Point { x: 0, y: 1 },
                Point { x: 1, y: 1 },
                Point { x: 2, y: 1 },
            ]
        );
    }
}
