use std::error::Error;
use crate::core::data::point::Point;

/// Computes one value per grid cell.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, cell: Point) -> Result<Self::Success, Self::Failure>;
}
