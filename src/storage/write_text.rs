use std::io::Write;
use crate::core::data::text_buffer::TextBuffer;

/// Writes one line per grid row, each terminated by `\n`.
pub fn write_text(buffer: &TextBuffer, out: &mut impl Write) -> std::io::Result<()> {
    write!(out, "{}", buffer)?;

    out.flush()
}
