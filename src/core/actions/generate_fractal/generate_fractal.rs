use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid_rect::GridRect;

/// Runs `algorithm` over every cell of `grid_rect`, row by row, on the
/// calling thread.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    grid_rect: GridRect,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    grid_rect
        .cells()
        .map(|cell| algorithm.compute(cell))
        .collect()
}
