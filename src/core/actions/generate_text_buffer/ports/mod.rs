pub mod glyph_map;
