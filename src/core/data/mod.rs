pub mod complex;
pub mod grid_rect;
pub mod plane_mapping;
pub mod point;
pub mod text_buffer;
