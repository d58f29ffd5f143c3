pub mod distance_ramp;
pub mod errors;
