pub mod write_text;
