pub mod generate_text_buffer;
pub mod ports;
