pub mod ascii;
pub mod ports;
