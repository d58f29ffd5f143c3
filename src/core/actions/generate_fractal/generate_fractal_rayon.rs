use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::grid_rect::GridRect;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Each row is computed as one task. Rows are stitched back together in
/// index order, so the result matches [`generate_fractal`] exactly.
///
/// [`generate_fractal`]: crate::core::actions::generate_fractal::generate_fractal::generate_fractal
pub fn generate_fractal_rayon<Alg>(
    grid_rect: GridRect,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let rows: Vec<Vec<Alg::Success>> = (grid_rect.top_left().y..=grid_rect.bottom_right().y)
        .into_par_iter()
        .map(|y| {
            grid_rect
                .row(y)
                .map(|cell| algorithm.compute(cell))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, Alg::Failure>>()?;

    Ok(rows.into_iter().flatten().collect())
}
