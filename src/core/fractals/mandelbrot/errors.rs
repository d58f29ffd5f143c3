use crate::core::data::grid_rect::GridRectError;
use crate::core::data::plane_mapping::PlaneMappingError;
use std::{error::Error, fmt};

#[derive(Debug, PartialEq)]
pub enum MandelbrotError {
    ZeroMaxIterationsError,
    InvalidDistanceThreshold { threshold: f64 },
    InvalidGrid(GridRectError),
    InvalidMapping(PlaneMappingError),
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::InvalidDistanceThreshold { threshold } => {
                write!(f, "Distance threshold must be finite and non-negative: {}", threshold)
            }
            Self::InvalidGrid(err) => write!(f, "invalid grid: {}", err),
            Self::InvalidMapping(err) => write!(f, "invalid plane mapping: {}", err),
        }
    }
}

impl Error for MandelbrotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidGrid(err) => Some(err),
            Self::InvalidMapping(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GridRectError> for MandelbrotError {
    fn from(err: GridRectError) -> Self {
        Self::InvalidGrid(err)
    }
}

impl From<PlaneMappingError> for MandelbrotError {
    fn from(err: PlaneMappingError) -> Self {
        Self::InvalidMapping(err)
    }
}
