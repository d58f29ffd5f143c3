use std::{error::Error, fmt};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MandelbrotGlyphMapError {
    IterationsExceedMax { iterations: u32, max_iterations: u32 },
}

impl fmt::Display for MandelbrotGlyphMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationsExceedMax { iterations, max_iterations } => {
                write!(f, "Iterations {} exceed maximum iterations {}", iterations, max_iterations)
            }
        }
    }
}

impl Error for MandelbrotGlyphMapError {}
